//! Inbound event probing and classification.
//!
//! The platform sends opaque JSON bodies. No schema is enforced; the relay
//! consults exactly three optional probes (`type`, `challenge`,
//! `header.event_type`) and treats every other shape as unknown.

use bytes::Bytes;
use serde_json::Value;

use crate::error::{RelayError, Result};

/// Classification of an inbound webhook body. First match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `type == "url_verification"`: the endpoint-ownership handshake.
    UrlVerification,
    /// `header.event_type` is present: a platform event to forward downstream.
    PlatformEvent,
    /// Anything else.
    Unknown,
}

/// An inbound webhook body.
///
/// Keeps the raw request bytes next to the parsed JSON so that a forwarded
/// payload is byte-identical to what the platform sent, regardless of how
/// serde would re-serialize the value.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    raw: Bytes,
    value: Value,
}

impl InboundEvent {
    /// Parses a raw request body into an event.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::MalformedBody` when the bytes are not valid
    /// JSON. The caller is expected to mask this into a 200 acknowledgment.
    pub fn parse(raw: Bytes) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(&raw).map_err(|e| RelayError::malformed(e.to_string()))?;
        Ok(Self { raw, value })
    }

    /// Classifies the event.
    ///
    /// The handshake probe is checked before the event probe, so a body
    /// carrying both `type == "url_verification"` and `header.event_type`
    /// is answered as a handshake and never forwarded.
    pub fn kind(&self) -> EventKind {
        if self.value.get("type").and_then(Value::as_str) == Some("url_verification") {
            return EventKind::UrlVerification;
        }
        if self.value.pointer("/header/event_type").is_some() {
            return EventKind::PlatformEvent;
        }
        EventKind::Unknown
    }

    /// The handshake token, if the body carries one.
    pub fn challenge(&self) -> Option<&Value> {
        self.value.get("challenge")
    }

    /// The platform event type from the `header.event_type` probe.
    pub fn event_type(&self) -> Option<&str> {
        self.value.pointer("/header/event_type").and_then(Value::as_str)
    }

    /// The raw request bytes, exactly as received.
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    /// The parsed JSON body.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the event and returns the parsed body.
    pub fn into_value(self) -> Value {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn event(value: Value) -> InboundEvent {
        InboundEvent::parse(Bytes::from(value.to_string())).expect("valid JSON")
    }

    #[test]
    fn url_verification_classified_first() {
        let e = event(json!({ "type": "url_verification", "challenge": "abc123" }));
        assert_eq!(e.kind(), EventKind::UrlVerification);
        assert_eq!(e.challenge(), Some(&json!("abc123")));
    }

    #[test]
    fn handshake_wins_over_event_header() {
        let e = event(json!({
            "type": "url_verification",
            "challenge": "tok",
            "header": { "event_type": "im.message.receive_v1" }
        }));
        assert_eq!(e.kind(), EventKind::UrlVerification);
    }

    #[test]
    fn header_event_type_classified_as_platform_event() {
        let e = event(json!({
            "header": { "event_type": "im.message.receive_v1" },
            "event": { "message": { "content": "hi" } }
        }));
        assert_eq!(e.kind(), EventKind::PlatformEvent);
        assert_eq!(e.event_type(), Some("im.message.receive_v1"));
    }

    #[test]
    fn non_string_event_type_still_counts_as_present() {
        // The probe checks presence, not type.
        let e = event(json!({ "header": { "event_type": 42 } }));
        assert_eq!(e.kind(), EventKind::PlatformEvent);
        assert_eq!(e.event_type(), None);
    }

    #[test]
    fn other_shapes_are_unknown() {
        assert_eq!(event(json!({})).kind(), EventKind::Unknown);
        assert_eq!(event(json!({ "type": "other" })).kind(), EventKind::Unknown);
        assert_eq!(event(json!({ "header": {} })).kind(), EventKind::Unknown);
        assert_eq!(event(json!([1, 2, 3])).kind(), EventKind::Unknown);
        assert_eq!(event(json!("just a string")).kind(), EventKind::Unknown);
    }

    #[test]
    fn raw_bytes_preserved_exactly() {
        // Key order and whitespace must survive untouched.
        let raw = Bytes::from_static(b"{\"header\": {\"event_type\": \"x\"},  \"z\": 1, \"a\": 2}");
        let e = InboundEvent::parse(raw.clone()).expect("valid JSON");
        assert_eq!(e.raw(), &raw);
    }

    #[test]
    fn malformed_body_rejected() {
        let err = InboundEvent::parse(Bytes::from_static(b"not json")).unwrap_err();
        assert!(err.to_string().starts_with("malformed body:"));
    }
}
