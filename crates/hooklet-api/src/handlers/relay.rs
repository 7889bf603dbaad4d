//! Webhook relay handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use hooklet_core::{is_url_verification, Ack, ChallengeEcho};
use serde_json::Value;

/// Automation endpoint that receives forwarded events.
const DOWNSTREAM_URL: &str = "https://hook.us2.make.com/ksycdm5ek8ae3rrykmplztv9zsrr6hsq";

/// Handles POST /webhook.
pub async fn relay_webhook(State(client): State<reqwest::Client>, Json(body): Json<Value>) -> Response {
    if is_url_verification(&body) {
        let challenge = body.get("challenge").cloned().unwrap_or(Value::Null);
        return Json(ChallengeEcho { challenge }).into_response();
    }

    // Failures are swallowed so the platform never retries.
    if let Err(e) = client.post(DOWNSTREAM_URL).json(&body).send().await {
        tracing::warn!(error = %e, "downstream forward failed");
    }

    Json(Ack::ok()).into_response()
}
