// crates/globetrotter-core/src/config.rs

//! Runtime configuration: where boundary datasets come from and how the
//! matcher is tuned. Both structs deserialize from JSON with every field
//! optional.

use crate::error::{GeoError, Result};
use crate::matcher::MIN_CONTAINMENT_LEN;
use crate::model::PropertyKeys;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const NATURAL_EARTH_COUNTRIES_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_50m_admin_0_countries.geojson";

pub const NATURAL_EARTH_REGION_URLS: &[&str] = &[
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_10m_admin_1_states_provinces.geojson",
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_50m_admin_1_states_provinces.geojson",
];

/// Radius of the circle drawn per country when polygons are unavailable.
pub const DEFAULT_FALLBACK_RADIUS_KM: f64 = 250.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Admin-0 (country) polygons.
    pub country_endpoint: String,
    /// Admin-1 (region) polygons, tried in order.
    pub region_endpoints: Vec<String>,
    pub fallback_radius_km: f64,
    /// Request timeout for HTTP sources; `None` uses the client default.
    pub timeout_secs: Option<u64>,
    /// Appended to [`PropertyKeys::country_names`].
    pub extra_country_keys: Vec<String>,
    /// Appended to [`PropertyKeys::region_names`].
    pub extra_region_keys: Vec<String>,
    /// Appended to [`PropertyKeys::region_country_names`].
    pub extra_region_country_keys: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            country_endpoint: NATURAL_EARTH_COUNTRIES_URL.to_string(),
            region_endpoints: NATURAL_EARTH_REGION_URLS.iter().map(|s| s.to_string()).collect(),
            fallback_radius_km: DEFAULT_FALLBACK_RADIUS_KM,
            timeout_secs: None,
            extra_country_keys: Vec::new(),
            extra_region_keys: Vec::new(),
            extra_region_country_keys: Vec::new(),
        }
    }
}

impl SourceConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            GeoError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.country_endpoint.trim().is_empty() {
            return Err(GeoError::Config("country_endpoint must not be empty".into()));
        }
        if !(self.fallback_radius_km.is_finite() && self.fallback_radius_km > 0.0) {
            return Err(GeoError::Config(format!(
                "fallback_radius_km must be positive, got {}",
                self.fallback_radius_km
            )));
        }
        Ok(())
    }

    pub fn country_keys(&self) -> PropertyKeys {
        PropertyKeys::country_names().extended(self.extra_country_keys.iter().cloned())
    }

    pub fn region_keys(&self) -> PropertyKeys {
        PropertyKeys::region_names().extended(self.extra_region_keys.iter().cloned())
    }

    pub fn region_country_keys(&self) -> PropertyKeys {
        PropertyKeys::region_country_names()
            .extended(self.extra_region_country_keys.iter().cloned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Shortest name allowed to match by containment.
    pub min_containment_len: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_containment_len: MIN_CONTAINMENT_LEN,
        }
    }
}
