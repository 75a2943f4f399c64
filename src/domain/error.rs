//! Error types for the Concierge plugin.
//!
//! This module defines the centralized error type [`ConciergeError`] and a type
//! alias [`Result`] used throughout the crate. Errors are implemented with the
//! `thiserror` crate.
//!
//! Very little in the plugin can fail: the overlay state machine itself is
//! infallible. Errors come from loading optional files (themes, static content)
//! and from pointer events that arrive before the render root exists.

use thiserror::Error;

/// The main error type for Concierge operations.
///
/// # Examples
///
/// ```
/// use concierge::ConciergeError;
///
/// fn load_palette() -> Result<(), ConciergeError> {
///     Err(ConciergeError::Theme("missing [colors] table".to_string()))
/// }
///
/// assert!(load_palette().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ConciergeError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically while
    /// reading a theme or content file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Static content file could not be parsed.
    #[error("Content error: {0}")]
    Content(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The render root does not exist yet.
    ///
    /// Raised when an operation needs the pane geometry (hit-testing a pointer
    /// press, attaching the overlay layer) before the first render call.
    #[error("Render target unavailable: {0}")]
    RenderTargetUnavailable(&'static str),
}

/// A specialized `Result` type for Concierge operations.
pub type Result<T> = std::result::Result<T, ConciergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/concierge.toml")?)
        }

        let err = read_missing().unwrap_err();
        assert!(matches!(err, ConciergeError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn render_target_message_names_the_operation() {
        let err = ConciergeError::RenderTargetUnavailable("hit test before first render");
        assert_eq!(
            err.to_string(),
            "Render target unavailable: hit test before first render"
        );
    }
}
