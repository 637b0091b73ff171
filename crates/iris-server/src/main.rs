//! HTTP server entry point.
//!
//! Loads configuration and the model artifact, then starts the Axum server.
//! Any startup failure exits with status 1 before a socket is bound.

use std::sync::Arc;

use anyhow::Result;
use iris_server::config::ServerConfig;
use iris_server::{app, ServerState};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let state = match ServerState::load(&config.model_path) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
