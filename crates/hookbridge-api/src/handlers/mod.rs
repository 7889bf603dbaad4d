//! Request handlers for the relay API.

pub mod status;
pub mod webhook;

pub use status::{not_found, preflight, service_status};
pub use webhook::relay_webhook;

/// Routes advertised by the status endpoint and the 404 diagnostic.
pub(crate) const AVAILABLE_ENDPOINTS: &[&str] = &["POST /webhook", "GET /"];
