use std::fmt;
use std::str::FromStr;

use crate::error::GeocodingError;

/// Exact-match component filters for forward geocoding, e.g. `city:Austin|state:TX`.
///
/// Entries keep insertion order, which is also the order they are sent in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    entries: Vec<(String, String)>,
}

impl ComponentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Unencoded wire form: `key1:value1|key2:value2`
impl fmt::Display for ComponentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{key}:{value}")?;
        }
        Ok(())
    }
}

impl FromStr for ComponentFilter {
    type Err = GeocodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut filter = Self::new();
        for entry in s.split('|').filter(|e| !e.trim().is_empty()) {
            let (key, value) = entry.split_once(':').ok_or_else(|| {
                GeocodingError::InvalidArgument(format!(
                    "component filter entry '{entry}' is not in key:value form"
                ))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(GeocodingError::InvalidArgument(format!(
                    "component filter entry '{entry}' has an empty key"
                )));
            }
            filter.insert(key, value.trim());
        }
        Ok(filter)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ComponentFilter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Self::new();
        for (key, value) in iter {
            filter.insert(key, value);
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_in_insertion_order() {
        let filter = ComponentFilter::new()
            .with("state", "TX")
            .with("city", "Austin")
            .with("postal_code", "78701");
        assert_eq!(filter.to_string(), "state:TX|city:Austin|postal_code:78701");
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut filter = ComponentFilter::new().with("city", "Dallas").with("state", "TX");
        filter.insert("city", "Austin");

        assert_eq!(filter.len(), 2);
        assert_eq!(filter.get("city"), Some("Austin"));
        assert_eq!(filter.to_string(), "city:Austin|state:TX");
    }

    #[test]
    fn test_parse() {
        let filter: ComponentFilter = "city:Austin|state:TX".parse().unwrap();
        let entries: Vec<_> = filter.iter().collect();
        assert_eq!(entries, vec![("city", "Austin"), ("state", "TX")]);
    }

    #[test]
    fn test_parse_value_may_contain_colon() {
        let filter: ComponentFilter = "street:Unit 4: Rear".parse().unwrap();
        assert_eq!(filter.get("street"), Some("Unit 4: Rear"));
    }

    #[test]
    fn test_parse_rejects_malformed_entries() {
        assert!(matches!(
            "city".parse::<ComponentFilter>(),
            Err(GeocodingError::InvalidArgument(_))
        ));
        assert!(matches!(
            ":Austin".parse::<ComponentFilter>(),
            Err(GeocodingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_empty_string_is_empty_filter() {
        let filter: ComponentFilter = "".parse().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let filter: ComponentFilter = [("city", "Austin"), ("state", "TX")].into_iter().collect();
        assert_eq!(filter.to_string(), "city:Austin|state:TX");
    }
}
