use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::HashMap, fmt};

/// Identifier of a surveyed street section.
///
/// The geometry file stores it as a JSON number while the attribute and
/// observation files key their objects by its string form, so both are
/// normalized into the same string-backed id.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteId {
    fn from(value: &str) -> Self {
        SiteId(value.trim().to_string())
    }
}

impl From<String> for SiteId {
    fn from(value: String) -> Self {
        SiteId::from(value.as_str())
    }
}

impl From<i64> for SiteId {
    fn from(value: i64) -> Self {
        SiteId(value.to_string())
    }
}

impl<'de> Deserialize<'de> for SiteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSiteId {
            Number(i64),
            Text(String),
        }
        Ok(match RawSiteId::deserialize(deserializer)? {
            RawSiteId::Number(n) => SiteId::from(n),
            RawSiteId::Text(s) => SiteId::from(s),
        })
    }
}

/// Geographic location of a street section.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "street_section_id")]
    pub site_id: SiteId,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Site {
    /// Parse the street locations file: a JSON array of
    /// `{street_section_id, latitude, longitude}` objects.
    pub fn parse_locations_json(json: &str) -> anyhow::Result<Vec<Site>> {
        let sites: Vec<Site> =
            serde_json::from_str(json).context("failed to parse street locations")?;
        log::debug!("parsed {} street locations", sites.len());
        Ok(sites)
    }
}

/// Descriptive attributes of a street section.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SiteAttributes {
    pub street_name: String,
    pub cross_street_a: String,
    pub cross_street_b: String,
}

impl SiteAttributes {
    /// Parse the street attributes file: a JSON object keyed by site id.
    pub fn parse_attributes_json(json: &str) -> anyhow::Result<HashMap<SiteId, SiteAttributes>> {
        let attributes: HashMap<SiteId, SiteAttributes> =
            serde_json::from_str(json).context("failed to parse street attributes")?;
        log::debug!("parsed attributes for {} street sections", attributes.len());
        Ok(attributes)
    }

    /// One-line description, e.g. "George St between King St and Market St."
    pub fn describe(&self) -> String {
        format!(
            "{} between {} and {}.",
            self.street_name, self.cross_street_a, self.cross_street_b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Site, SiteAttributes, SiteId};

    #[test]
    fn test_parse_locations_json() {
        let json = r#"[
            {"street_section_id": 42, "latitude": -33.8731, "longitude": 151.2068},
            {"street_section_id": "7", "latitude": -33.8690, "longitude": 151.2070}
        ]"#;
        let sites = Site::parse_locations_json(json).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].site_id, SiteId::from("42"));
        assert!((sites[0].latitude - (-33.8731)).abs() < f64::EPSILON);
        assert_eq!(sites[1].site_id.as_str(), "7");
    }

    #[test]
    fn test_parse_attributes_json() {
        let json = r#"{
            "42": {"street_name": "George St", "cross_street_a": "King St", "cross_street_b": "Market St"}
        }"#;
        let attributes = SiteAttributes::parse_attributes_json(json).unwrap();
        let george = &attributes[&SiteId::from(42)];
        assert_eq!(george.street_name, "George St");
        assert_eq!(george.describe(), "George St between King St and Market St.");
    }

    #[test]
    fn test_parse_malformed_locations() {
        assert!(Site::parse_locations_json("{not json").is_err());
    }

    #[test]
    fn test_site_id_serializes_as_string() {
        let json = serde_json::to_string(&SiteId::from(42)).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
