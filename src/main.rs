//! Hookbridge webhook relay service.
//!
//! Main entry point. Loads configuration, builds the forwarding client,
//! and serves the relay until a termination signal arrives.

use std::sync::Arc;

use anyhow::{Context, Result};
use hookbridge_api::{AppState, Config};
use hookbridge_core::RealClock;
use hookbridge_delivery::ForwardClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config.rust_log);

    info!("Starting hookbridge webhook relay");
    info!(
        host = %config.host,
        port = config.port,
        forward_timeout_seconds = config.forward_timeout_seconds,
        "Configuration loaded"
    );

    let forwarder = ForwardClient::new(config.to_forward_config())
        .context("Failed to build forwarding client")?;
    info!(downstream = forwarder.url(), "Forwarding client ready");

    let state = AppState::new(forwarder, Arc::new(RealClock::new()));
    let addr = config.parse_server_addr()?;

    hookbridge_api::start_server(state, addr).await.context("Server failed")?;

    info!("Hookbridge shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
