//! Domain models for the Hooklet relay.

use serde::Serialize;
use serde_json::Value;

/// Reply to the platform's URL-verification handshake.
#[derive(Debug, Serialize)]
pub struct ChallengeEcho {
    /// Token echoed back verbatim.
    pub challenge: Value,
}

/// Unconditional acknowledgment for everything else.
#[derive(Debug, Serialize)]
pub struct Ack {
    /// Always true.
    pub success: bool,
}

impl Ack {
    /// The only acknowledgment the relay ever sends.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// True when the body is the platform's URL-verification handshake.
pub fn is_url_verification(body: &Value) -> bool {
    body.get("type").and_then(Value::as_str) == Some("url_verification")
}
