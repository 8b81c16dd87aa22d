//! Error types for the geocoding service

use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    /// Geocoding client error (including a missing credential at startup)
    Geocoding(google_geocoding::GeocodingError),
    /// Configuration error
    Config(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geocoding(e) => write!(f, "{}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geocoding(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<google_geocoding::GeocodingError> for ServiceError {
    fn from(e: google_geocoding::GeocodingError) -> Self {
        Self::Geocoding(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for ServiceError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use google_geocoding::GeocodingError;

    #[test]
    fn test_config_error_display() {
        let err = ServiceError::Config("Server error: address in use".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration error: Server error: address in use"
        );
    }

    #[test]
    fn test_geocoding_error_passes_through() {
        let err: ServiceError =
            GeocodingError::ConfigurationMissing("GOOGLE_MAPS_API_KEY".to_string()).into();
        assert!(format!("{}", err).contains("GOOGLE_MAPS_API_KEY"));
    }
}
