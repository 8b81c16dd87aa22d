//! Error types for the geocoding client

use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from the geocoding client
///
/// A lookup that finds nothing is not an error; it is reported as `Ok(None)`.
#[derive(Debug)]
pub enum GeocodingError {
    /// The caller omitted required input or passed an unusable filter
    InvalidArgument(String),
    /// The provider credential is absent
    ConfigurationMissing(String),
    /// Transport failure, non-success status, or malformed response body
    RequestFailed(BoxError),
}

impl fmt::Display for GeocodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::ConfigurationMissing(msg) => write!(f, "Configuration missing: {msg}"),
            Self::RequestFailed(e) => write!(f, "Geocoding request failed: {e}"),
        }
    }
}

impl std::error::Error for GeocodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RequestFailed(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// The request URL carries the API key, so it is stripped before the error
/// can reach a log line or a response body.
impl From<reqwest::Error> for GeocodingError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(Box::new(err.without_url()))
    }
}

impl GeocodingError {
    pub(crate) fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into().into())
    }
}

pub type Result<T> = std::result::Result<T, GeocodingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_argument_display() {
        let err = GeocodingError::InvalidArgument("address or components required".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid argument: address or components required"
        );
    }

    #[test]
    fn test_configuration_missing_display() {
        let err = GeocodingError::ConfigurationMissing("GOOGLE_MAPS_API_KEY".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration missing: GOOGLE_MAPS_API_KEY"
        );
    }

    #[test]
    fn test_request_failed_exposes_source() {
        let err = GeocodingError::request_failed("provider returned status 500");
        assert!(err.to_string().contains("status 500"));
        assert!(err.source().is_some());
        assert!(GeocodingError::InvalidArgument("x".into()).source().is_none());
    }
}
