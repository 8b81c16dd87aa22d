//! HTTP server for geocoding endpoints
//!
//! Provides /health, /geocode, and /reverse endpoints.

use crate::types::{ErrorResponse, GeocodeQuery, HealthResponse, ReverseQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use google_geocoding::{ComponentFilter, GeocodingClient, GeocodingError};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Shared state for the HTTP server
pub struct ServerState {
    pub client: GeocodingClient,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(client: GeocodingClient) -> Self {
        Self {
            client,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/geocode", get(geocode))
        .route("/reverse", get(reverse_geocode))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
    })
}

/// Forward geocode an address and/or component filters
async fn geocode(
    State(state): State<SharedState>,
    Query(params): Query<GeocodeQuery>,
) -> Response {
    let components = match params.components.as_deref().map(str::parse::<ComponentFilter>) {
        Some(Ok(filter)) => Some(filter),
        Some(Err(e)) => return error_response(e),
        None => None,
    };

    match state
        .client
        .geocode(params.address.as_deref(), components.as_ref())
        .await
    {
        Ok(Some(geometry)) => Json(geometry).into_response(),
        Ok(None) => not_found("No results for address"),
        Err(e) => error_response(e),
    }
}

/// Reverse geocode coordinates to normalized address components
async fn reverse_geocode(
    State(state): State<SharedState>,
    Query(params): Query<ReverseQuery>,
) -> Response {
    match state.client.reverse_geocode(params.lat, params.lng).await {
        Ok(Some(location)) => Json(location).into_response(),
        Ok(None) => not_found("No results for coordinates"),
        Err(e) => error_response(e),
    }
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn error_response(err: GeocodingError) -> Response {
    let status = match &err {
        GeocodingError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        GeocodingError::RequestFailed(_) => StatusCode::BAD_GATEWAY,
        GeocodingError::ConfigurationMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    // Upstream failures are only described in the log
    let message = match &err {
        GeocodingError::InvalidArgument(_) => err.to_string(),
        _ => {
            warn!(error = %err, "Geocoding lookup failed");
            "Geocoding provider request failed".to_string()
        }
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}
