//! Data types for Geocoding API requests and responses

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A rectangular area given by its corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

/// The provider's `geometry` object, passed through untouched.
///
/// The typed accessors decode on demand and return `None` when the field is
/// missing or shaped differently than expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Geometry(Value);

impl Geometry {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn location(&self) -> Option<LatLng> {
        self.field("location")
    }

    pub fn viewport(&self) -> Option<Bounds> {
        self.field("viewport")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    fn field<T: serde::de::DeserializeOwned>(&self, name: &str) -> Option<T> {
        serde_json::from_value(self.0.get(name)?.clone()).ok()
    }
}

/// One structured fragment of a resolved address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub types: Vec<String>,
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
}

impl AddressComponent {
    /// The first entry of `types`, if any
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

/// Address components keyed by application vocabulary
/// (`street`, `city`, `state`, `county`, or an untranslated provider type).
///
/// Holds at most one component per key. Keys iterate and serialize in
/// alphabetical order, not in the order the provider listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientLocation(BTreeMap<String, AddressComponent>);

impl ClientLocation {
    /// Store `component` under `key`, returning whatever it replaced
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        component: AddressComponent,
    ) -> Option<AddressComponent> {
        self.0.insert(key.into(), component)
    }

    pub fn get(&self, key: &str) -> Option<&AddressComponent> {
        self.0.get(key)
    }

    pub fn street(&self) -> Option<&AddressComponent> {
        self.get(crate::normalize::STREET)
    }

    pub fn city(&self) -> Option<&AddressComponent> {
        self.get(crate::normalize::CITY)
    }

    pub fn state(&self) -> Option<&AddressComponent> {
        self.get(crate::normalize::STATE)
    }

    pub fn county(&self) -> Option<&AddressComponent> {
        self.get(crate::normalize::COUNTY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AddressComponent)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Treat an explicit `null` list the same as a missing one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub(crate) results: Vec<GeocodeResult>,
    pub(crate) status: Option<String>,
    pub(crate) error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub(crate) geometry: Option<Geometry>,
    pub(crate) address_components: Option<Vec<AddressComponent>>,
}
