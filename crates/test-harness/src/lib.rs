//! Integration test environment for the relay.
//!
//! Spawns the real router on an ephemeral port with its forwarding client
//! pointed at a mock downstream, so tests drive the full inbound-to-
//! outbound path over real HTTP.

pub mod http;

use std::{sync::Arc, time::Duration};

use hookbridge_api::AppState;
use hookbridge_core::RealClock;
use hookbridge_delivery::{ForwardClient, ForwardConfig};

pub use http::DownstreamMock;

/// A running relay instance plus its mock downstream.
pub struct TestEnv {
    /// Base URL of the relay under test.
    pub base_url: String,
    /// Client for driving requests at the relay.
    pub client: reqwest::Client,
    /// The mock automation endpoint receiving forwards.
    pub downstream: DownstreamMock,
}

impl TestEnv {
    /// Starts a relay with the production forward timeout.
    pub async fn new() -> Self {
        Self::with_forward_timeout(Duration::from_secs(10)).await
    }

    /// Starts a relay with a custom forward timeout.
    ///
    /// Timeout tests shrink this so a delayed mock response trips the
    /// deadline in milliseconds instead of ten seconds.
    pub async fn with_forward_timeout(timeout: Duration) -> Self {
        let downstream = DownstreamMock::start().await;

        let forwarder = ForwardClient::new(ForwardConfig {
            url: downstream.hook_url(),
            timeout,
            user_agent: "hookbridge-test/0".to_string(),
        })
        .expect("forward client should build");

        let state = AppState::new(forwarder, Arc::new(RealClock::new()));
        let app = hookbridge_api::create_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        Self { base_url: format!("http://{addr}"), client: reqwest::Client::new(), downstream }
    }

    /// Absolute URL for a relay path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Posts a JSON body to the relay's webhook endpoint.
    pub async fn post_webhook(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/webhook"))
            .json(body)
            .send()
            .await
            .expect("webhook request should complete")
    }

    /// Posts raw bytes to the relay's webhook endpoint.
    pub async fn post_webhook_raw(&self, body: impl Into<reqwest::Body>) -> reqwest::Response {
        self.client
            .post(self.url("/webhook"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("webhook request should complete")
    }
}
