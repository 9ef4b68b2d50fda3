//! Page behaviors
//!
//! Each submodule installs one behavior into a [`Page`](crate::page::Page)
//! and reports how many elements it bound. Behaviors share no state.

pub mod alerts;
pub mod delete_guard;
pub mod filter;
pub mod form_guard;
pub mod tooltips;

/// What an installer bound on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installation {
    /// Installed on this many elements (may be zero)
    Bound(usize),
    /// Optional anchor element is not rendered; nothing installed
    Absent,
}

impl Installation {
    /// Number of elements bound
    #[must_use]
    pub const fn bound(self) -> usize {
        match self {
            Self::Bound(count) => count,
            Self::Absent => 0,
        }
    }
}
