//! Hooklet core domain types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod models;

// Re-export commonly used types
pub use models::{is_url_verification, Ack, ChallengeEcho};
