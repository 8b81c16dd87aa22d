//! Request and response types for the geocoding service

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Forward geocoding query parameters
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    #[serde(default)]
    pub address: Option<String>,
    /// Component filters in `key:value|key:value` form
    #[serde(default)]
    pub components: Option<String>,
}

/// Reverse geocoding query parameters
#[derive(Debug, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lng: f64,
}
