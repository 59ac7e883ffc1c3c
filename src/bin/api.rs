//! Heroes Mock API Server
//!
//! Run with: cargo run --bin heroes-api
//!
//! # Configuration
//!
//! Config file: `~/.config/heroes/config.toml` or `./heroes.toml`.
//!
//! Environment variables:
//! - `HEROES_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HEROES_API_PORT`: Port to listen on (default: 8082)
//! - `HEROES_LOG_LEVEL`: Log level (default: info)
//! - `HEROES_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter, overrides the log level

use heroes::api::{serve, AppState};
use heroes::config::{Config, ConfigNote};
use heroes::service::InMemoryBackend;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, notes) = Config::load_default();
    config.logging.init();
    notes.iter().for_each(ConfigNote::log);

    tracing::info!("Starting Heroes API server v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(InMemoryBackend::with_fixture());
    tracing::info!("Seeded store with {} heroes", store.len().await);

    let state = AppState::new(store);

    tracing::info!("Starting server on {}", config.server.addr());
    serve(state, &config.server).await?;

    tracing::info!("Heroes API server stopped");
    Ok(())
}
