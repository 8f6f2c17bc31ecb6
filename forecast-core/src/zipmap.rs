use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// The zip-code-to-URL map bundled with the crate.
const BUNDLED_MAP_JSON: &str = include_str!("../data/zip_code_to_url_map.json");

/// Read-only mapping from five-digit zip codes to forecast-page URLs.
///
/// An empty URL string is the data source's sentinel for "no forecast
/// page for this region". The map is loaded once at process start and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ZipCodeMap {
    entries: HashMap<String, String>,
}

impl ZipCodeMap {
    /// Load the map bundled with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_MAP_JSON).context("Failed to parse the bundled zip code map")
    }

    /// Parse a map from a JSON object of zip code to URL strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: Self = serde_json::from_str(json).context("Zip code map is not a JSON object")?;
        Ok(map)
    }

    pub fn contains(&self, zip_code: &str) -> bool {
        self.entries.contains_key(zip_code)
    }

    /// The forecast-page URL for a zip code, if the key exists. The
    /// returned string may be empty (the "no data" sentinel).
    pub fn url_for(&self, zip_code: &str) -> Option<&str> {
        self.entries.get(zip_code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_map_parses_and_is_not_empty() {
        let map = ZipCodeMap::bundled().expect("bundled map must parse");
        assert!(!map.is_empty());
    }

    #[test]
    fn from_json_exposes_entries() {
        let map = ZipCodeMap::from_json(r#"{"10001": "https://example.gov/x", "00501": ""}"#)
            .expect("valid JSON object");

        assert_eq!(map.len(), 2);
        assert!(map.contains("10001"));
        assert_eq!(map.url_for("10001"), Some("https://example.gov/x"));
        assert_eq!(map.url_for("00501"), Some(""));
        assert_eq!(map.url_for("99999"), None);
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(ZipCodeMap::from_json("[1, 2, 3]").is_err());
        assert!(ZipCodeMap::from_json("not json").is_err());
    }
}
