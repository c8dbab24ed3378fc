// crates/globetrotter-core/src/region.rs

//! # Region Matcher
//!
//! Admin-1 features match a visited `(region, country)` pair only when the
//! region names match **and** the country names match, each through
//! [`NameMatcher::matches`] on its own. The two are never concatenated.

use crate::matcher::NameMatcher;
use crate::model::{GeoFeature, PropertyKeys, RegionKey};

/// `true` if some visited pair matches both the candidate region and the
/// candidate country.
pub fn region_visited(
    matcher: &NameMatcher<'_>,
    candidate_region: &str,
    candidate_country: &str,
    visited: &[RegionKey],
) -> bool {
    visited.iter().any(|v| {
        matcher.matches(&v.region, candidate_region) && matcher.matches(&v.country, candidate_country)
    })
}

/// Name extraction for admin-1 features.
#[derive(Debug, Clone)]
pub struct RegionFields {
    pub region: PropertyKeys,
    pub country: PropertyKeys,
}

impl Default for RegionFields {
    fn default() -> Self {
        Self {
            region: PropertyKeys::region_names(),
            country: PropertyKeys::region_country_names(),
        }
    }
}

impl RegionFields {
    /// `(region, country)` from the first non-blank field of each list.
    /// `None` if either is missing; such features are skipped.
    pub fn extract<'f>(&self, feature: &'f GeoFeature) -> Option<(&'f str, &'f str)> {
        let region = self.region.first_non_empty(feature)?;
        let country = self.country.first_non_empty(feature)?;
        Some((region, country))
    }

    pub fn feature_visited(
        &self,
        matcher: &NameMatcher<'_>,
        feature: &GeoFeature,
        visited: &[RegionKey],
    ) -> bool {
        match self.extract(feature) {
            Some((region, country)) => region_visited(matcher, region, country, visited),
            None => {
                tracing::debug!("skipping region feature without region/country name");
                false
            }
        }
    }
}
