//! Browser bindings
//!
//! - `page`: [`WebPage`], the `web-sys` implementation of [`Page`](crate::page::Page)
//! - `tooltip`: [`BootstrapTooltips`], backed by the page's `bootstrap.Tooltip`
//! - `logging`: `tracing` output to the browser console
//! - `boot`: DOM-ready entry point

pub mod boot;
pub mod logging;
pub mod page;
pub mod tooltip;

pub use boot::boot;
pub use page::WebPage;
pub use tooltip::BootstrapTooltips;
