//! HTTP client for forwarding events downstream.
//!
//! Handles request construction, timeout enforcement, and error
//! categorization. The caller decides what to do with the outcome; for the
//! relay that means logging it and acknowledging the platform regardless.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};

use crate::error::{ForwardError, Result};

/// Downstream automation URL that receives forwarded events.
///
/// Deliberately a constant: the relay has no runtime configuration surface
/// for its destination.
pub const DOWNSTREAM_URL: &str = "https://hook.us2.make.com/ksycdm5ek8ae3rrykmplztv9zsrr6hsq";

/// Configuration for the forwarding client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardConfig {
    /// Destination URL for forwarded events.
    pub url: String,
    /// Timeout for the outbound request.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            url: DOWNSTREAM_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: "Hookbridge-Relay/0.2".to_string(),
        }
    }
}

/// HTTP client for downstream forwarding.
///
/// Wraps a pooled `reqwest::Client` so concurrent inbound requests reuse
/// connections to the single destination.
#[derive(Debug, Clone)]
pub struct ForwardClient {
    client: reqwest::Client,
    config: ForwardConfig,
}

/// Response from a successful (2xx) forward.
#[derive(Debug, Clone)]
pub struct ForwardResponse {
    /// HTTP status code returned by the downstream endpoint.
    pub status: u16,
    /// Total duration of the request.
    pub duration: Duration,
}

impl ForwardClient {
    /// Creates a new forwarding client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ForwardError::Configuration` if the HTTP client cannot be
    /// built with the provided settings.
    pub fn new(config: ForwardConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ForwardError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Creates a forwarding client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ForwardConfig::default())
    }

    /// The destination URL this client posts to.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Forwards the raw inbound body to the downstream endpoint.
    ///
    /// Posts the bytes unchanged with `Content-Type: application/json` so
    /// the downstream receives exactly what the platform sent.
    ///
    /// # Errors
    ///
    /// Returns categorized errors based on the outcome:
    /// - `Network` for connection failures
    /// - `Timeout` when the configured deadline elapses
    /// - `ClientStatus` / `ServerStatus` for 4xx / 5xx responses
    pub async fn forward(&self, body: Bytes) -> Result<ForwardResponse> {
        let start_time = std::time::Instant::now();

        let span = info_span!("forward_event", url = %self.config.url, payload_size = body.len());

        async move {
            tracing::debug!("forwarding event downstream");

            let response = match self
                .client
                .post(&self.config.url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    let duration = start_time.elapsed();
                    tracing::warn!(duration_ms = duration.as_millis(), "forward failed: {}", e);

                    if e.is_timeout() {
                        return Err(ForwardError::timeout(self.config.timeout.as_secs()));
                    }
                    if e.is_connect() {
                        return Err(ForwardError::network(format!("connection failed: {e}")));
                    }
                    return Err(ForwardError::network(e.to_string()));
                },
            };

            let duration = start_time.elapsed();
            let status = response.status();

            tracing::debug!(
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "downstream responded"
            );

            if status.is_success() {
                return Ok(ForwardResponse { status: status.as_u16(), duration });
            }
            if status.is_client_error() {
                return Err(ForwardError::ClientStatus { status: status.as_u16() });
            }
            if status.is_server_error() {
                return Err(ForwardError::ServerStatus { status: status.as_u16() });
            }
            Err(ForwardError::UnexpectedStatus { status: status.as_u16() })
        }
        .instrument(span)
        .await
    }
}
