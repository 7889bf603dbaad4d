//! HTTP mocking for the downstream automation endpoint.

use std::time::Duration;

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock of the fixed downstream endpoint the relay forwards to.
///
/// Wraps wiremock with the small surface the relay tests need: configure
/// one POST route, then inspect what arrived.
pub struct DownstreamMock {
    server: MockServer,
}

impl DownstreamMock {
    /// Starts a new mock downstream on a random port.
    pub async fn start() -> Self {
        Self { server: MockServer::start().await }
    }

    /// URL the relay's forward client should post to.
    pub fn hook_url(&self) -> String {
        format!("{}/hook", self.server.uri())
    }

    /// Configures the downstream to accept forwards with 200.
    pub async fn respond_ok(&self) {
        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }

    /// Configures the downstream to reject forwards with the given status.
    pub async fn respond_error(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Configures the downstream to answer 200 only after a delay.
    pub async fn respond_delayed(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Bodies of all forwards received, in arrival order.
    pub async fn received_bodies(&self) -> Vec<Vec<u8>> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
            .into_iter()
            .map(|request| request.body)
            .collect()
    }

    /// Number of forwards received so far.
    pub async fn request_count(&self) -> usize {
        self.server.received_requests().await.expect("request recording is enabled").len()
    }

    /// Content-Type header of the most recent forward.
    pub async fn last_content_type(&self) -> Option<String> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
            .last()
            .and_then(|request| request.headers.get("content-type").cloned())
            .and_then(|value| value.to_str().map(ToString::to_string).ok())
    }
}
