//! Webhook relay handler.
//!
//! Classifies the inbound body and either answers the platform handshake,
//! forwards the event downstream, or acknowledges an unknown shape. Always
//! replies 200: a non-200 status would make the platform retry, so every
//! failure (malformed body, downstream outage) is masked into an
//! acknowledgment.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use hookbridge_core::{EventKind, InboundEvent, RelayReply, Result};
use tracing::{debug, info, instrument, warn};

use crate::AppState;

/// Relays an inbound platform callback.
///
/// Classification order, first match wins:
/// 1. `type == "url_verification"`: echo the challenge token.
/// 2. `header.event_type` present: forward the raw body downstream, swallow
///    the outcome, acknowledge.
/// 3. Anything else: acknowledge with the body echoed back.
#[instrument(name = "relay_webhook", skip(state, body), fields(payload_size = body.len()))]
pub async fn relay_webhook(State(state): State<AppState>, body: Bytes) -> Response {
    match handle(&state, body).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            warn!(error = %e, "relay failed, acknowledging anyway");
            let reply = RelayReply::error(e.to_string(), state.timestamp());
            (StatusCode::OK, Json(reply)).into_response()
        },
    }
}

async fn handle(state: &AppState, body: Bytes) -> Result<RelayReply> {
    let event = InboundEvent::parse(body)?;

    match event.kind() {
        EventKind::UrlVerification => {
            debug!("answering url_verification handshake");
            Ok(RelayReply::challenge(event.challenge()))
        },
        EventKind::PlatformEvent => {
            // The acknowledgment must not depend on the downstream outcome;
            // the platform retries anything that is not a 200.
            match state.forwarder.forward(event.raw().clone()).await {
                Ok(response) => info!(
                    event_type = event.event_type().unwrap_or("unknown"),
                    status = response.status,
                    duration_ms = response.duration.as_millis(),
                    "event forwarded"
                ),
                Err(e) => warn!(
                    event_type = event.event_type().unwrap_or("unknown"),
                    error = %e,
                    "downstream forward failed"
                ),
            }
            Ok(RelayReply::forwarded())
        },
        EventKind::Unknown => {
            debug!("no probe matched, acknowledging without forwarding");
            Ok(RelayReply::unknown(event.into_value()))
        },
    }
}
