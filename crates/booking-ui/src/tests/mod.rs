//! Behavioral tests for page behaviors
//!
//! BDD-style tests using given-when-then naming, run against `MemoryPage`.

pub mod guard_behaviors;
pub mod init_behaviors;
