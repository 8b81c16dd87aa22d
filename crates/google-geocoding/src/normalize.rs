//! Reduction of provider address components into a [`ClientLocation`]

use tracing::trace;

use crate::types::{AddressComponent, ClientLocation};

pub const STREET: &str = "street";
pub const CITY: &str = "city";
pub const STATE: &str = "state";
pub const COUNTY: &str = "county";

/// Translate a provider type into the application key it is stored under.
/// Types without a translation pass through unchanged.
pub fn application_key(provider_type: &str) -> &str {
    match provider_type {
        "route" => STREET,
        "locality" => CITY,
        "administrative_area_level_1" => STATE,
        "administrative_area_level_2" => COUNTY,
        other => other,
    }
}

/// Fold components, in order, into one entry per application key.
///
/// Each component is keyed by its primary (first) type. Components without
/// any type are skipped. When two components resolve to the same key the
/// later one wins.
pub fn normalize_components<I>(components: I) -> ClientLocation
where
    I: IntoIterator<Item = AddressComponent>,
{
    components
        .into_iter()
        .fold(ClientLocation::default(), |mut location, component| {
            let Some(key) = component.primary_type().map(|t| application_key(t).to_string())
            else {
                return location;
            };
            if let Some(replaced) = location.insert(key.as_str(), component) {
                trace!(key = %key, replaced = %replaced.long_name, "Address component overwritten");
            }
            location
        })
}
