//! Error types for relay request handling.
//!
//! The relay deliberately never surfaces a failure to the calling platform:
//! every error here is caught at the outermost handler and converted into a
//! 200 acknowledgment, because a non-200 reply would trigger the platform's
//! retry machinery. The taxonomy exists for logging and for the error text
//! echoed inside the acknowledgment body.

use thiserror::Error;

/// Result type alias using `RelayError`.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors that can occur while classifying an inbound event.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Request body is not valid JSON.
    #[error("malformed body: {message}")]
    MalformedBody {
        /// Parser error text describing what was wrong with the body
        message: String,
    },
}

impl RelayError {
    /// Creates a malformed body error from a parser message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_body_display_includes_parser_message() {
        let error = RelayError::malformed("expected value at line 1 column 1");
        assert_eq!(error.to_string(), "malformed body: expected value at line 1 column 1");
    }
}
