// crates/globetrotter-core/src/model/feature.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::io::Read;

use crate::error::Result;

/// One polygon record from a boundary dataset.
///
/// Only `properties` is interpreted; `geometry` is carried through untouched
/// for the renderer. Property naming differs between sources, so names are
/// read through a [`PropertyKeys`] list rather than fixed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Value,
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GeoFeature {
    /// A feature with the given string properties and no geometry.
    pub fn with_properties<K, V>(props: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let properties = props
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self {
            kind: feature_type(),
            properties,
            geometry: Value::Null,
        }
    }

    /// String property `key`, if present and not blank.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        match self.properties.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Stable textual fingerprint used to order output deterministically.
    ///
    /// Covers type, properties and geometry, so two features only tie when
    /// they are identical.
    pub(crate) fn fingerprint(&self) -> String {
        // serde_json::Map is ordered by key, so this is independent of input order.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// GeoJSON `FeatureCollection`; unknown members are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<GeoFeature>,
}

impl FeatureCollection {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl From<Vec<GeoFeature>> for FeatureCollection {
    fn from(features: Vec<GeoFeature>) -> Self {
        Self { features }
    }
}

/// Ordered list of property keys tried until one yields a non-blank string.
///
/// This is the data-driven field-accessor list: supporting a new dataset
/// schema means appending its key, not adding a code branch.
///
/// ```rust
/// use globetrotter_core::model::{GeoFeature, PropertyKeys};
///
/// let f = GeoFeature::with_properties([("NAME", "France"), ("name", "")]);
/// assert_eq!(PropertyKeys::country_names().first_non_empty(&f), Some("France"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyKeys {
    keys: Vec<Cow<'static, str>>,
}

impl PropertyKeys {
    pub fn new(keys: &[&'static str]) -> Self {
        Self {
            keys: keys.iter().map(|k| Cow::Borrowed(*k)).collect(),
        }
    }

    /// Country name on admin-0 features (Natural Earth, geoBoundaries, GADM).
    pub fn country_names() -> Self {
        Self::new(&[
            "ADMIN", "admin", "NAME", "name", "NAME_LONG", "NAME_EN", "name_en", "COUNTRY",
            "country", "shapeName",
        ])
    }

    /// Region name on admin-1 features.
    pub fn region_names() -> Self {
        Self::new(&[
            "name", "NAME", "name_en", "NAME_EN", "NAME_1", "shapeName", "woe_name", "gn_name",
        ])
    }

    /// Parent-country reference on admin-1 features.
    pub fn region_country_names() -> Self {
        Self::new(&["admin", "ADMIN", "geonunit", "GEOUNIT", "country", "COUNTRY", "NAME_0"])
    }

    /// ISO 3166-1 alpha-2 code on admin-0 features.
    pub fn iso_alpha2() -> Self {
        Self::new(&["ISO_A2_EH", "ISO_A2", "iso_a2", "ISO2", "iso2"])
    }

    /// Append `key` at the lowest priority. Duplicates are ignored.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !self.keys.iter().any(|k| k.as_ref() == key.as_str()) {
            self.keys.push(Cow::Owned(key));
        }
        self
    }

    pub fn extended<I, S>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extra.into_iter().fold(self, |acc, k| acc.with_key(k))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.as_ref())
    }

    /// All non-blank values, in priority order.
    pub fn values<'f>(&'f self, feature: &'f GeoFeature) -> impl Iterator<Item = &'f str> + 'f {
        self.keys.iter().filter_map(move |k| feature.property_str(k))
    }

    /// The highest-priority non-blank value.
    pub fn first_non_empty<'f>(&self, feature: &'f GeoFeature) -> Option<&'f str> {
        self.keys.iter().find_map(|k| feature.property_str(k))
    }
}
