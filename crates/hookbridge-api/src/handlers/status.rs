//! Status and catch-all handlers.
//!
//! `GET /` is informational only; nothing health-critical lives behind it
//! since the relay has no dependencies of its own to probe.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use super::AVAILABLE_ENDPOINTS;
use crate::AppState;

/// Status response for the informational root endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Fixed "ok" marker
    pub status: &'static str,
    /// When this status was produced
    pub timestamp: DateTime<Utc>,
    /// Seconds since the service started
    pub uptime_seconds: u64,
    /// Routes the service answers
    pub endpoints: Vec<&'static str>,
    /// Service version
    pub version: &'static str,
}

/// Diagnostic body for unmatched routes.
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    /// Fixed error marker
    pub error: &'static str,
    /// Method of the unmatched request
    pub method: String,
    /// Path of the unmatched request
    pub path: String,
    /// Routes the service answers
    pub available: Vec<&'static str>,
}

/// Informational status endpoint.
#[instrument(name = "service_status", skip(state))]
pub async fn service_status(State(state): State<AppState>) -> Response {
    debug!("serving status");

    let response = StatusResponse {
        status: "ok",
        timestamp: state.timestamp(),
        uptime_seconds: state.uptime().as_secs(),
        endpoints: AVAILABLE_ENDPOINTS.to_vec(),
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Answers CORS preflight requests on registered routes.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Catch-all for unmatched method/path combinations.
///
/// OPTIONS is always 200 so preflights succeed on any path; everything else
/// gets a 404 with a small diagnostic body.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let response = NotFoundResponse {
        error: "route not found",
        method: method.to_string(),
        path: uri.path().to_string(),
        available: AVAILABLE_ENDPOINTS.to_vec(),
    };

    (StatusCode::NOT_FOUND, Json(response)).into_response()
}
