// src/models/campsite.rs

//! Campsite records as loaded from the GeoJSON data file.

use std::fs;
use std::path::Path;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::AvailabilityWindow;
use crate::utils::slugify;

/// Agency used when a record does not name one.
pub const UNKNOWN_AGENCY: &str = "Unknown";

/// A campsite with its seasonal availability windows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Campsite {
    /// Stable identifier, also used for backend lookups
    pub id: String,

    /// Display name
    pub name: String,

    /// Managing agency (e.g., "Washington State Parks")
    pub agency: String,

    /// Official information or reservation page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_url: Option<String>,

    /// Site types (e.g., "tent", "rv")
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// `[longitude, latitude]` of the site marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,

    /// Recurring seasons, possibly empty
    pub windows: Vec<AvailabilityWindow>,
}

impl Campsite {
    /// The name/URL pair used for calendar export text.
    pub fn export_ref(&self) -> CampsiteRef<'_> {
        CampsiteRef {
            name: &self.name,
            official_url: self.official_url.as_deref(),
        }
    }

    /// Window by zero-based index.
    pub fn window(&self, index: usize) -> Result<&AvailabilityWindow> {
        self.windows.get(index).ok_or_else(|| {
            AppError::not_found(format!(
                "window {} of '{}' ({} available)",
                index,
                self.name,
                self.windows.len()
            ))
        })
    }

    /// Lowercased, hyphenated form of the name.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Load all campsites from a GeoJSON FeatureCollection file.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)?;
        Self::parse_collection(&content)
    }

    /// Parse a GeoJSON FeatureCollection.
    pub fn parse_collection(content: &str) -> Result<Vec<Self>> {
        let collection: FeatureCollection = serde_json::from_str(content)?;
        Ok(collection
            .features
            .into_iter()
            .map(Self::from_feature)
            .collect())
    }

    fn from_feature(feature: Feature) -> Self {
        let props = feature.properties;
        let id = props
            .id
            .as_ref()
            .and_then(id_to_string)
            .or_else(|| feature.id.as_ref().and_then(id_to_string))
            .unwrap_or_else(|| slugify(&props.name));

        let coordinates = feature
            .geometry
            .filter(|g| g.kind == "Point")
            .and_then(|g| match g.coordinates.as_slice() {
                [lon, lat, ..] => Some([*lon, *lat]),
                _ => None,
            });

        Self {
            id,
            name: props.name,
            agency: props
                .agency
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_AGENCY.to_string()),
            official_url: props.official_url.filter(|u| !u.trim().is_empty()),
            types: props.types,
            coordinates,
            windows: props.windows,
        }
    }
}

/// Minimal campsite data needed for calendar export text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampsiteRef<'a> {
    pub name: &'a str,
    pub official_url: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: Option<Value>,

    #[serde(default)]
    geometry: Option<Geometry>,

    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,

    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Properties {
    #[serde(default)]
    id: Option<Value>,

    name: String,

    #[serde(default)]
    agency: Option<String>,

    #[serde(default, alias = "official_url")]
    official_url: Option<String>,

    #[serde(default, deserialize_with = "embedded")]
    types: Vec<String>,

    #[serde(
        default,
        rename = "availabilityWindows",
        alias = "availability_windows",
        alias = "windows",
        deserialize_with = "embedded"
    )]
    windows: Vec<AvailabilityWindow>,
}

fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accept a value either as structured JSON or as JSON encoded in a string.
fn embedded<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        Value::String(s) if s.trim().is_empty() => Ok(T::default()),
        Value::String(s) => serde_json::from_str(&s).map_err(D::Error::custom),
        other => serde_json::from_value(other).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": 17,
                "geometry": { "type": "Point", "coordinates": [-121.76, 46.85] },
                "properties": {
                    "name": "Rainier Base Camp",
                    "agency": "National Park Service",
                    "officialUrl": "https://example.com/rainier",
                    "types": ["tent", "rv"],
                    "availabilityWindows": [
                        { "start": "05-22", "end": "10-01", "bookingAdvanceDays": 180 }
                    ]
                }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-123.1, 47.6] },
                "properties": {
                    "name": "Lake Cushman",
                    "agency": "",
                    "types": "[\"tent\"]",
                    "availability_windows": "[{\"start\":\"01-01\",\"end\":\"12-31\"}]"
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_collection() {
        let sites = Campsite::parse_collection(SAMPLE).unwrap();
        assert_eq!(sites.len(), 2);

        let rainier = &sites[0];
        assert_eq!(rainier.id, "17");
        assert_eq!(rainier.agency, "National Park Service");
        assert_eq!(rainier.coordinates, Some([-121.76, 46.85]));
        assert_eq!(rainier.windows[0].advance_days(), 180);
        assert_eq!(rainier.types, vec!["tent", "rv"]);
    }

    #[test]
    fn test_string_encoded_fields() {
        let sites = Campsite::parse_collection(SAMPLE).unwrap();
        let cushman = &sites[1];

        assert_eq!(cushman.id, "lake-cushman");
        assert_eq!(cushman.agency, UNKNOWN_AGENCY);
        assert_eq!(cushman.types, vec!["tent"]);
        assert_eq!(cushman.windows.len(), 1);
        assert!(cushman.windows[0].is_year_round());
        assert!(cushman.official_url.is_none());
    }

    #[test]
    fn test_export_ref() {
        let sites = Campsite::parse_collection(SAMPLE).unwrap();
        let r = sites[0].export_ref();
        assert_eq!(r.name, "Rainier Base Camp");
        assert_eq!(r.official_url, Some("https://example.com/rainier"));
        assert_eq!(sites[0].slug(), "rainier-base-camp");
    }

    #[test]
    fn test_blank_property_id_falls_back_to_feature_id() {
        let blank = r#"{"features":[
            {"id":"abc","properties":{"id":"","name":"Blank Id"}},
            {"id":"def","properties":{"id":null,"name":"Null Id"}},
            {"properties":{"id":"  ","name":"No Ids"}}
        ]}"#;
        let sites = Campsite::parse_collection(blank).unwrap();
        assert_eq!(sites[0].id, "abc");
        assert_eq!(sites[1].id, "def");
        assert_eq!(sites[2].id, "no-ids");
    }

    #[test]
    fn test_window_by_index() {
        let sites = Campsite::parse_collection(SAMPLE).unwrap();
        assert_eq!(sites[0].window(0).unwrap().advance_days(), 180);

        let err = sites[0].window(1).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("1 available"));
    }

    #[test]
    fn test_bad_window_is_rejected() {
        let bad = r#"{"features":[{"properties":{"name":"X","availabilityWindows":[{"start":"00-10","end":"05-01"}]}}]}"#;
        assert!(Campsite::parse_collection(bad).is_err());
    }
}
