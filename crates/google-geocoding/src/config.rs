use std::env;
use std::fmt;

use crate::error::{GeocodingError, Result};

pub(crate) const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
const BASE_URL_VAR: &str = "GOOGLE_MAPS_BASE_URL";

/// Credential and endpoint for the geocoding provider
#[derive(Clone)]
pub struct GeocodingConfig {
    pub api_key: String,
    /// API root without a trailing slash, e.g. `https://maps.googleapis.com/maps/api`
    pub base_url: String,
}

impl GeocodingConfig {
    /// Config for the public Google endpoint with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (proxy or test stub)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Read `GOOGLE_MAPS_API_KEY` and the optional `GOOGLE_MAPS_BASE_URL`.
    ///
    /// Fails with [`GeocodingError::ConfigurationMissing`] when the key is
    /// unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                GeocodingError::ConfigurationMissing(format!(
                    "{API_KEY_VAR} is not set in environment variables"
                ))
            })?;

        let config = Self::new(api_key);
        Ok(match lookup(BASE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
            _ => config,
        })
    }
}

impl fmt::Debug for GeocodingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodingConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
