//! HTTP server setup.

use axum::{routing::post, Router};
use std::net::SocketAddr;

use crate::handlers;

/// Creates the Axum router with all routes.
pub fn create_router(client: reqwest::Client) -> Router {
    Router::new().route("/webhook", post(handlers::relay_webhook)).with_state(client)
}

/// Starts the HTTP server.
pub async fn start_server(client: reqwest::Client, addr: SocketAddr) -> Result<(), std::io::Error> {
    let app = create_router(client);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await
}
