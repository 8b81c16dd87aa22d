//! Rentora Geocoding Service - Google Maps address and coordinate lookups
//!
//! Exposes forward and reverse geocoding to the web frontend so the provider
//! credential stays on the server.

mod config;
mod error;
mod server;
mod types;

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use crate::server::{start_server, ServerState, SharedState};
use google_geocoding::GeocodingClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("rentora_geocoding=info".parse()?)
        .add_directive("google_geocoding=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Rentora Geocoding Service...");

    // Fails fast when GOOGLE_MAPS_API_KEY is missing
    let config = ServiceConfig::from_env()?;
    info!("Port: {}", config.port);
    info!("Provider: {}", config.geocoding.base_url);

    let client = GeocodingClient::new(config.geocoding);
    let state: SharedState = Arc::new(ServerState::new(client));

    // Start HTTP server (blocking)
    start_server(state, config.port)
        .await
        .map_err(|e| ServiceError::Config(format!("Server error: {}", e)))?;

    Ok(())
}
