//! Preview Engine Binary
//!
//! Serves the order validation and risk-preview engine over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin preview-engine
//! ```
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `BIND_ADDRESS`: bind address (default: 0.0.0.0)
//! - `MAX_BATCH_ORDERS`: maximum drafts per request (default: 200)
//! - `RUST_LOG`: log level (default: info)

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use preview_engine::config::ServerConfig;
use preview_engine::preview::PreviewEngine;
use preview_engine::server::{PreviewServer, create_router};
use preview_engine::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let config = ServerConfig::from_env();
    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.http_port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.bind_address, config.http_port
            )
        })?;

    let server = PreviewServer::new(PreviewEngine::new(), config.max_batch_orders);
    let router = create_router(server);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Preview engine listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Preview engine shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
