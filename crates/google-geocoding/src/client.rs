use tracing::{debug, warn};

use crate::components::ComponentFilter;
use crate::config::GeocodingConfig;
use crate::error::{GeocodingError, Result};
use crate::normalize::normalize_components;
use crate::types::{ClientLocation, GeocodeResponse, Geometry};

/// Google Maps geocoding client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GeocodingClient {
    client: reqwest::Client,
    config: GeocodingConfig,
}

impl GeocodingClient {
    /// Create a new client with a default HTTP client
    pub fn new(config: GeocodingConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a new client sharing an existing HTTP client
    pub fn with_http_client(config: GeocodingConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    /// Build a client from `GOOGLE_MAPS_API_KEY` / `GOOGLE_MAPS_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GeocodingConfig::from_env()?))
    }

    pub fn config(&self) -> &GeocodingConfig {
        &self.config
    }

    /// Forward geocode a free-text address and/or component filters.
    ///
    /// Returns the geometry of the first match, or `None` when the provider
    /// found nothing. At least one of `address` or `components` must be
    /// non-empty: an empty string or an empty filter counts as omitted, so
    /// no request is ever sent with a blank `components=` parameter.
    pub async fn geocode(
        &self,
        address: Option<&str>,
        components: Option<&ComponentFilter>,
    ) -> Result<Option<Geometry>> {
        let address = address.filter(|a| !a.is_empty());
        let components = components.filter(|c| !c.is_empty());
        if address.is_none() && components.is_none() {
            return Err(GeocodingError::InvalidArgument(
                "either address or components must be provided for geocoding".to_string(),
            ));
        }

        let query = geocode_query(address, components, &self.config.api_key);
        let data = self.fetch(&query).await?;

        debug!(
            address = address.unwrap_or_default(),
            components = %components.map(ToString::to_string).unwrap_or_default(),
            results = data.results.len(),
            "Geocoded address"
        );

        let Some(first) = data.results.into_iter().next() else {
            return Ok(None);
        };

        first
            .geometry
            .map(Some)
            .ok_or_else(|| GeocodingError::request_failed("first result has no geometry"))
    }

    /// Reverse geocode coordinates to normalized address components.
    ///
    /// Only the first (most specific) result is used. Returns `None` when the
    /// provider found nothing.
    pub async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Option<ClientLocation>> {
        let query = reverse_geocode_query(lat, lng, &self.config.api_key);
        let data = self.fetch(&query).await?;

        debug!(lat, lng, results = data.results.len(), "Reverse geocoded coordinates");

        let Some(first) = data.results.into_iter().next() else {
            return Ok(None);
        };

        let components = first.address_components.ok_or_else(|| {
            GeocodingError::request_failed("first result has no address_components")
        })?;

        Ok(Some(normalize_components(components)))
    }

    async fn fetch(&self, query: &str) -> Result<GeocodeResponse> {
        let url = format!("{}/geocode/json?{}", self.config.base_url, query);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Geocoding provider returned error status");
            return Err(GeocodingError::request_failed(format!(
                "geocoding provider returned status {}",
                response.status()
            )));
        }

        let data: GeocodeResponse = response.json().await?;

        if let Some(status) = data.status.as_deref() {
            if status != "OK" && status != "ZERO_RESULTS" {
                warn!(
                    status,
                    error = data.error_message.as_deref().unwrap_or("none"),
                    "Geocoding provider reported a problem"
                );
            }
        }

        Ok(data)
    }
}

/// Query string for a forward lookup, parameters in `address`, `components`, `key` order
pub(crate) fn geocode_query(
    address: Option<&str>,
    components: Option<&ComponentFilter>,
    api_key: &str,
) -> String {
    let mut params = Vec::with_capacity(3);
    if let Some(address) = address {
        params.push(format!("address={}", urlencoding::encode(address)));
    }
    if let Some(components) = components {
        params.push(format!(
            "components={}",
            urlencoding::encode(&components.to_string())
        ));
    }
    params.push(format!("key={}", urlencoding::encode(api_key)));
    params.join("&")
}

pub(crate) fn reverse_geocode_query(lat: f64, lng: f64, api_key: &str) -> String {
    format!("latlng={},{}&key={}", lat, lng, urlencoding::encode(api_key))
}
