// crates/globetrotter-core/src/model/location.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// One travel-log entry.
///
/// `country` and `region` are free text exactly as the user typed them;
/// nothing here is normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub id: u64,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub coordinates: Coordinates,
    pub visit_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
}

impl Location {
    pub fn new(country: impl Into<String>, coordinates: Coordinates, visit_date: NaiveDate) -> Self {
        Self {
            id: 0,
            country: country.into(),
            region: None,
            city: None,
            coordinates,
            visit_date,
            notes: None,
            photo_uri: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_photo_uri(mut self, uri: impl Into<String>) -> Self {
        self.photo_uri = Some(uri.into());
        self
    }

    /// Region text, if present and not blank.
    pub fn region_str(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.trim().is_empty())
    }

    pub fn city_str(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.trim().is_empty())
    }
}
