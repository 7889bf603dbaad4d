//! Hookbridge HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use hookbridge_core::Clock;
use hookbridge_delivery::ForwardClient;

pub mod config;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use server::{create_router, start_server};

/// Shared application state, cloned per request.
///
/// Everything here is immutable after startup; handlers share connections
/// through the forward client's internal pool and otherwise touch nothing
/// mutable.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client used to forward platform events downstream.
    pub forwarder: ForwardClient,
    /// Clock used for status and acknowledgment timestamps.
    pub clock: Arc<dyn Clock>,
    started: Instant,
}

impl AppState {
    /// Creates application state, recording the start instant for uptime.
    pub fn new(forwarder: ForwardClient, clock: Arc<dyn Clock>) -> Self {
        let started = clock.now();
        Self { forwarder, clock, started }
    }

    /// Time elapsed since the service started.
    pub fn uptime(&self) -> Duration {
        self.clock.now().duration_since(self.started)
    }

    /// Current wall-clock timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        DateTime::from(self.clock.now_system())
    }
}
