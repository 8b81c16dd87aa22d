//! Google Maps Geocoding Client
//!
//! A Rust client for the [Google Maps Geocoding API](https://developers.google.com/maps/documentation/geocoding)
//! covering forward lookups (address and component filters to geometry) and
//! reverse lookups (coordinates to a normalized set of address components).
//!
//! # Example
//!
//! ```no_run
//! use google_geocoding::{ComponentFilter, GeocodingClient, GeocodingConfig};
//!
//! # async fn example() -> Result<(), google_geocoding::GeocodingError> {
//! let client = GeocodingClient::new(GeocodingConfig::from_env()?);
//!
//! let filter = ComponentFilter::new().with("city", "Austin").with("state", "TX");
//! if let Some(geometry) = client.geocode(Some("1100 Congress Ave"), Some(&filter)).await? {
//!     println!("{:?}", geometry.location());
//! }
//!
//! if let Some(location) = client.reverse_geocode(30.2747, -97.7404).await? {
//!     println!("{:?}", location.city().map(|c| &c.long_name));
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod components;
mod config;
mod error;
mod normalize;
mod types;

pub use client::GeocodingClient;
pub use components::ComponentFilter;
pub use config::GeocodingConfig;
pub use error::{GeocodingError, Result};
pub use normalize::{application_key, normalize_components, CITY, COUNTY, STATE, STREET};
pub use types::{AddressComponent, Bounds, ClientLocation, Geometry, LatLng};
