//! DOM capability seam
//!
//! Behaviors never touch `web_sys` directly. They are written against
//! [`Page`], which the browser binding ([`crate::web::WebPage`]) and the
//! in-memory page ([`crate::memory::MemoryPage`]) both implement.

use crate::error::Result;

/// DOM events the behaviors listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Text input changed (fires on every keystroke)
    Input,
    /// Element activated
    Click,
    /// Form submission requested
    Submit,
}

impl EventKind {
    /// DOM event type name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Click => "click",
            Self::Submit => "submit",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a dispatched event a handler may act on
pub trait DomEvent {
    /// Cancel the browser's default action for this event
    fn prevent_default(&self);

    /// Stop the event from reaching further listeners up the tree
    fn stop_propagation(&self);
}

/// Boxed event handler registered for the page lifetime
pub type EventHandler = Box<dyn FnMut(&dyn DomEvent)>;

/// One-shot deferred task
pub type DeferredTask = Box<dyn FnOnce()>;

/// Rendering root the behaviors are installed into
///
/// Implementations are cheap handles (`Clone`) so handlers can capture them.
pub trait Page: Clone + 'static {
    /// Handle to one element of the page
    type Node: Clone + 'static;

    /// Look up an element by id; `None` when the page does not render it
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order
    ///
    /// # Errors
    ///
    /// Returns an error if the selector cannot be evaluated
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>>;

    /// Full rendered text of the element and its descendants
    fn text_content(&self, node: &Self::Node) -> String;

    /// Current value of a text input
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not an input
    fn input_value(&self, node: &Self::Node) -> Result<String>;

    /// Show (clear inline `display`) or hide (`display: none`) the element
    ///
    /// # Errors
    ///
    /// Returns an error if the inline style cannot be updated
    fn set_displayed(&self, node: &Self::Node, displayed: bool) -> Result<()>;

    /// Add a class to the element's class list
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated
    fn add_class(&self, node: &Self::Node, class: &str) -> Result<()>;

    /// Native constraint validation of a form
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not a form
    fn check_validity(&self, node: &Self::Node) -> Result<bool>;

    /// Blocking yes/no confirmation dialog
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot show the dialog
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Register `handler` for `event` on the element for the page lifetime
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered
    fn listen(&self, node: &Self::Node, event: EventKind, handler: EventHandler) -> Result<()>;

    /// Run `task` once after `delay_ms`; not cancellable
    ///
    /// # Errors
    ///
    /// Returns an error if the timer cannot be scheduled
    fn defer(&self, delay_ms: u32, task: DeferredTask) -> Result<()>;
}

/// Injected tooltip widget capability
///
/// In the browser this wraps the page's tooltip library; the page decides
/// which library (if any) is loaded.
pub trait TooltipFactory<N> {
    /// Attach a tooltip widget to `trigger`, configured from its attributes
    ///
    /// # Errors
    ///
    /// Returns an error if the library is missing or rejects the element
    fn attach(&self, trigger: &N) -> Result<()>;
}
