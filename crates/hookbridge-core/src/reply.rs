//! Reply bodies returned to the calling platform.
//!
//! Every variant serializes to the exact JSON body sent back with status
//! 200. There is no failure variant that maps to a non-200 status: the
//! relay acknowledges everything so the platform never retries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Message included in acknowledgments for bodies that matched no probe.
pub const UNKNOWN_EVENT_MESSAGE: &str = "event received but not recognized, nothing forwarded";

/// The relay's answer to an inbound request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RelayReply {
    /// Handshake echo: `{"challenge": <token>}`.
    Challenge {
        /// The token echoed back verbatim; null when the body carried none
        challenge: Value,
    },
    /// Acknowledgment after a forward attempt, whatever its outcome.
    Forwarded {
        /// Always true
        success: bool,
        /// Always true; the downstream outcome is not reflected here
        forwarded: bool,
    },
    /// Acknowledgment for a body that matched no probe.
    Unknown {
        /// Always true
        success: bool,
        /// Fixed human-readable note
        message: String,
        /// The original body, echoed for caller-side debugging
        received: Value,
    },
    /// Outermost catch: a relay-side failure, still acknowledged with 200.
    Error {
        /// Always true
        success: bool,
        /// Description of what went wrong
        error: String,
        /// When the failure was observed
        timestamp: DateTime<Utc>,
    },
}

impl RelayReply {
    /// Builds the handshake echo, substituting null for an absent token.
    pub fn challenge(token: Option<&Value>) -> Self {
        Self::Challenge { challenge: token.cloned().unwrap_or(Value::Null) }
    }

    /// Builds the post-forward acknowledgment.
    pub fn forwarded() -> Self {
        Self::Forwarded { success: true, forwarded: true }
    }

    /// Builds the unknown-event acknowledgment echoing the original body.
    pub fn unknown(received: Value) -> Self {
        Self::Unknown { success: true, message: UNKNOWN_EVENT_MESSAGE.to_string(), received }
    }

    /// Builds the masked-error acknowledgment.
    pub fn error(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::Error { success: true, error: message.into(), timestamp }
    }
}
