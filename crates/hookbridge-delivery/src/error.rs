//! Error types for forwarding operations.
//!
//! Every variant is swallowed by the webhook handler after logging; the
//! taxonomy exists so the logs distinguish an unreachable downstream from a
//! slow one or one that rejected the payload.

use thiserror::Error;

/// Result type alias for forwarding operations.
pub type Result<T> = std::result::Result<T, ForwardError>;

/// Outcomes of a failed forward to the downstream endpoint.
#[derive(Debug, Clone, Error)]
pub enum ForwardError {
    /// Network-level connectivity failure.
    #[error("network connection failed: {message}")]
    Network {
        /// Error message describing the network failure
        message: String,
    },

    /// Request exceeded the configured timeout.
    #[error("request timeout after {timeout_seconds}s")]
    Timeout {
        /// Number of seconds before the request timed out
        timeout_seconds: u64,
    },

    /// Downstream answered with a 4xx status.
    #[error("client error: HTTP {status}")]
    ClientStatus {
        /// HTTP status code (4xx)
        status: u16,
    },

    /// Downstream answered with a 5xx status.
    #[error("server error: HTTP {status}")]
    ServerStatus {
        /// HTTP status code (5xx)
        status: u16,
    },

    /// Downstream answered with a status outside 2xx/4xx/5xx.
    #[error("unexpected status: HTTP {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// The HTTP client could not be built from its configuration.
    #[error("invalid forward configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ForwardError {
    /// Creates a network error from a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_seconds: u64) -> Self {
        Self::Timeout { timeout_seconds }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Returns true for timeouts.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// The downstream HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ClientStatus { status }
            | Self::ServerStatus { status }
            | Self::UnexpectedStatus { status } => Some(*status),
            Self::Network { .. } | Self::Timeout { .. } | Self::Configuration { .. } => None,
        }
    }
}
