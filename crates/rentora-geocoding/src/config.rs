use google_geocoding::GeocodingConfig;
use std::env;

use crate::error::Result;

const DEFAULT_PORT: u16 = 3005;

/// Service configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub geocoding: GeocodingConfig,
}

impl ServiceConfig {
    /// Parse configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = parse_port(env::var("PORT").ok().as_deref());
        let geocoding = GeocodingConfig::from_env()?;

        Ok(Self { port, geocoding })
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(Some("8080")), 8080);
        assert_eq!(parse_port(Some("not-a-port")), DEFAULT_PORT);
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }
}
