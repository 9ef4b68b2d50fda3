//! WASM page behaviors for the train booking web application
//!
//! The server renders every page; this crate adds the client-side glue on
//! top of that markup once the document is parsed.
//!
//! ## Behaviors
//! - Tooltips on `[data-bs-toggle="tooltip"]` elements
//! - Live text filters for the train, ticket and user card lists
//! - Confirmation before `.btn-delete` actions
//! - `.alert` banners hidden after five seconds
//! - Invalid forms blocked on submit and marked `was-validated`
//!
//! ## Module Structure
//! - `page`: DOM capability trait the behaviors are written against
//! - `search`: card text matching
//! - `config`: selectors, texts and timings
//! - `behaviors`: one installer per behavior
//! - `init`: installs every behavior in its own failure boundary
//! - `memory`: in-memory page for tests and headless checks
//! - `web`: `web-sys` bindings and the browser entry point
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod behaviors;
pub mod config;
pub mod error;
pub mod init;
pub mod memory;
pub mod page;
pub mod search;
pub mod web;

pub use config::{BehaviorConfig, FilterConfig};
pub use error::{BehaviorError, Result};
pub use init::{Behavior, BehaviorOutcome, InitReport, initialize};
pub use page::{DomEvent, EventKind, Page, TooltipFactory};

#[cfg(test)]
mod tests;
