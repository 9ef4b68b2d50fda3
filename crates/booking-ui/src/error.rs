//! Error types for page behaviors
//!
//! Every DOM operation returns a `Result`; nothing in the behavior layer
//! panics or unwraps.

/// Errors that can occur while installing or running page behaviors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BehaviorError {
    /// No window object (not running in a browser context)
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// No document object on the window
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// Selector syntax the page implementation cannot evaluate
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),

    /// Selector query rejected by the host
    #[error("query failed for '{selector}': {reason}")]
    QueryFailed { selector: String, reason: String },

    /// Element exists but is not of the expected kind
    #[error("element is not a {expected}")]
    WrongElementType { expected: &'static str },

    /// Event listener registration failed
    #[error("failed to add {event} listener: {reason}")]
    ListenerFailed { event: &'static str, reason: String },

    /// Inline style or class mutation failed
    #[error("failed to update element: {0}")]
    MutationFailed(String),

    /// Deferred task could not be scheduled
    #[error("failed to schedule timer: {0}")]
    TimerFailed(String),

    /// Confirmation dialog could not be shown
    #[error("confirmation dialog unavailable: {0}")]
    DialogUnavailable(String),

    /// Tooltip library is not loaded on the page
    #[error("tooltip library unavailable: {0}")]
    TooltipLibraryUnavailable(String),

    /// Tooltip construction failed for some trigger elements
    #[error("failed to attach {failed} of {total} tooltips: {first}")]
    TooltipsFailed {
        failed: usize,
        total: usize,
        first: String,
    },

    /// Configuration did not parse or failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for page behavior operations
pub type Result<T> = std::result::Result<T, BehaviorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = BehaviorError::UnsupportedSelector("div > p".to_string());
        assert_eq!(error.to_string(), "unsupported selector: div > p");

        let error = BehaviorError::ListenerFailed {
            event: "click",
            reason: "detached".to_string(),
        };
        assert_eq!(error.to_string(), "failed to add click listener: detached");

        let error = BehaviorError::TooltipsFailed {
            failed: 2,
            total: 5,
            first: "bad placement".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to attach 2 of 5 tooltips: bad placement"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = BehaviorError::TooltipLibraryUnavailable("bootstrap".to_string());
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_result_type() {
        let success: Result<usize> = Ok(3);
        assert!(success.is_ok());

        let failure: Result<usize> = Err(BehaviorError::WindowNotAvailable);
        assert!(failure.is_err());
    }
}
