//! Location beacon server.
//!
//! Serves a single page that asks the visitor for their position and records
//! whatever coordinates come back to an append-only text file.
//!
//! Run the server with
//! ```not_rust
//! PORT=3000 LOCATIONS_FILE=locations.txt cargo run
//! ```
//!
//! and open http://localhost:3000 in a browser.

mod app;
mod config;
mod handlers;
mod models;

use std::net::SocketAddr;
use axum::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::app::{app, AppState};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "location_beacon=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("invalid configuration: {}", e);
        e
    })?;
    let addr = config.bind_addr()?;

    let app = app(AppState::from_config(&config), config.static_dir.as_deref());

    info!(
        page = ?config.page,
        locations_file = %config.locations_file.display(),
        "listening on {}", addr
    );

    Server::try_bind(&addr)?
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
