// crates/globetrotter-core/src/highlight.rs

//! # Highlight Selector
//!
//! Scans country features (always) and region features (only when regions
//! were visited) and returns those to style as visited.
//!
//! Output is a function of the *set* of input features: every feature is
//! tested independently, there is no first-match shortcut, and results are
//! sorted by name and feature fingerprint before returning.

use crate::config::SourceConfig;
use crate::matcher::NameMatcher;
use crate::model::{GeoFeature, PropertyKeys, VisitedNameSet};
use crate::region::{region_visited, RegionFields};
use serde::Serialize;

/// Which of the two visited styles to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    Country,
    Region,
}

impl HighlightStyle {
    pub fn fill_color(self) -> &'static str {
        match self {
            HighlightStyle::Country => "#2e7d32",
            HighlightStyle::Region => "#f9a825",
        }
    }

    pub fn fill_opacity(self) -> f64 {
        match self {
            HighlightStyle::Country => 0.45,
            HighlightStyle::Region => 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightedFeature {
    /// Display name the feature matched under.
    pub name: String,
    pub style: HighlightStyle,
    pub feature: GeoFeature,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HighlightSet {
    pub country_matches: Vec<HighlightedFeature>,
    pub region_matches: Vec<HighlightedFeature>,
}

impl HighlightSet {
    pub fn is_empty(&self) -> bool {
        self.country_matches.is_empty() && self.region_matches.is_empty()
    }
}

/// Matching configuration for one highlight pass.
#[derive(Debug, Clone)]
pub struct Highlighter<'a> {
    pub(crate) matcher: NameMatcher<'a>,
    pub(crate) country_keys: PropertyKeys,
    pub(crate) region_fields: RegionFields,
}

impl Highlighter<'static> {
    /// Built-in tables and default property keys.
    pub fn builtin() -> Self {
        Self::new(*NameMatcher::builtin())
    }
}

impl<'a> Highlighter<'a> {
    pub fn new(matcher: NameMatcher<'a>) -> Self {
        Self {
            matcher,
            country_keys: PropertyKeys::country_names(),
            region_fields: RegionFields::default(),
        }
    }

    /// Use the property-key extensions from `config`.
    pub fn with_source_config(mut self, config: &SourceConfig) -> Self {
        self.country_keys = config.country_keys();
        self.region_fields = RegionFields {
            region: config.region_keys(),
            country: config.region_country_keys(),
        };
        self
    }

    pub fn matcher(&self) -> &NameMatcher<'a> {
        &self.matcher
    }

    /// Country features whose name matches any visited country.
    pub fn match_countries(
        &self,
        visited: &VisitedNameSet,
        features: &[GeoFeature],
    ) -> Vec<HighlightedFeature> {
        if visited.countries().is_empty() {
            return Vec::new();
        }
        let mut out: Vec<HighlightedFeature> = features
            .iter()
            .filter_map(|f| {
                let Some(name) = self.country_keys.first_non_empty(f) else {
                    tracing::debug!("skipping country feature without a name field");
                    return None;
                };
                visited
                    .countries()
                    .iter()
                    .any(|c| self.matcher.matches(c, name))
                    .then(|| HighlightedFeature {
                        name: name.to_string(),
                        style: HighlightStyle::Country,
                        feature: f.clone(),
                    })
            })
            .collect();
        sort_stable(&mut out);
        out
    }

    /// Region features matching a visited `(region, country)` pair.
    pub fn match_regions(
        &self,
        visited: &VisitedNameSet,
        features: &[GeoFeature],
    ) -> Vec<HighlightedFeature> {
        if visited.regions().is_empty() {
            return Vec::new();
        }
        let mut out: Vec<HighlightedFeature> = features
            .iter()
            .filter_map(|f| {
                let Some((region, country)) = self.region_fields.extract(f) else {
                    tracing::debug!("skipping region feature without region/country name");
                    return None;
                };
                region_visited(&self.matcher, region, country, visited.regions()).then(|| {
                    HighlightedFeature {
                        name: format!("{region}, {country}"),
                        style: HighlightStyle::Region,
                        feature: f.clone(),
                    }
                })
            })
            .collect();
        sort_stable(&mut out);
        out
    }

    /// Both passes. Region features are ignored when no region was visited.
    pub fn compute(
        &self,
        visited: &VisitedNameSet,
        country_features: &[GeoFeature],
        region_features: Option<&[GeoFeature]>,
    ) -> HighlightSet {
        HighlightSet {
            country_matches: self.match_countries(visited, country_features),
            region_matches: region_features
                .map(|r| self.match_regions(visited, r))
                .unwrap_or_default(),
        }
    }
}

fn sort_stable(items: &mut [HighlightedFeature]) {
    items.sort_by_cached_key(|h| (h.name.clone(), h.feature.fingerprint()));
}

/// Highlight set for `visited` using the built-in tables.
///
/// ```rust
/// use globetrotter_core::{compute_highlight_set, GeoFeature, VisitedNameSet};
///
/// let visited = VisitedNameSet::from_names(["USA"], []);
/// let countries = vec![
///     GeoFeature::with_properties([("ADMIN", "United States of America")]),
///     GeoFeature::with_properties([("ADMIN", "Canada")]),
/// ];
/// let set = compute_highlight_set(&visited, &countries, None);
/// assert_eq!(set.country_matches.len(), 1);
/// assert!(set.region_matches.is_empty());
/// ```
pub fn compute_highlight_set(
    visited: &VisitedNameSet,
    country_features: &[GeoFeature],
    region_features: Option<&[GeoFeature]>,
) -> HighlightSet {
    Highlighter::builtin().compute(visited, country_features, region_features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RegionKey;

    fn country(name: &str) -> GeoFeature {
        GeoFeature::with_properties([("ADMIN", name)])
    }

    fn region(name: &str, admin: &str) -> GeoFeature {
        GeoFeature::with_properties([("name", name), ("admin", admin)])
    }

    #[test]
    fn empty_visited_set_yields_nothing() {
        let set = compute_highlight_set(
            &VisitedNameSet::default(),
            &[country("France"), country("Peru")],
            Some(&[region("Bavaria", "Germany")][..]),
        );
        assert!(set.is_empty());
    }

    #[test]
    fn styles_are_distinct_per_pass() {
        let visited = VisitedNameSet::from_names(["Germany"], [RegionKey::new("Bavaria", "Germany")]);
        let set = compute_highlight_set(
            &visited,
            &[country("Germany")],
            Some(&[region("Bavaria", "Germany"), region("Saxony", "Germany")][..]),
        );
        assert_eq!(set.country_matches[0].style, HighlightStyle::Country);
        assert_eq!(set.region_matches.len(), 1);
        assert_eq!(set.region_matches[0].style, HighlightStyle::Region);
        assert_eq!(set.region_matches[0].name, "Bavaria, Germany");
        assert_ne!(HighlightStyle::Country.fill_color(), HighlightStyle::Region.fill_color());
        for style in [HighlightStyle::Country, HighlightStyle::Region] {
            assert!((0.0..=1.0).contains(&style.fill_opacity()));
        }
    }

    #[test]
    fn region_pass_skipped_without_visited_regions() {
        let visited = VisitedNameSet::from_names(["Germany"], []);
        let set = compute_highlight_set(&visited, &[], Some(&[region("Bavaria", "Germany")][..]));
        assert!(set.region_matches.is_empty());
    }

    #[test]
    fn nameless_features_are_skipped() {
        let visited = VisitedNameSet::from_names(["Peru"], []);
        let nameless = GeoFeature::with_properties([("ISO_A3", "PER")]);
        let set = compute_highlight_set(&visited, &[nameless, country("Peru")], None);
        assert_eq!(set.country_matches.len(), 1);
    }

    #[test]
    fn denylisted_neighbours_are_not_highlighted() {
        let visited = VisitedNameSet::from_names(["Oman", "Niger"], []);
        let set = compute_highlight_set(
            &visited,
            &[country("Romania"), country("Nigeria"), country("Oman")],
            None,
        );
        let names: Vec<_> = set.country_matches.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Oman"]);
    }

    #[test]
    fn extra_keys_from_config_are_used() {
        let cfg = SourceConfig {
            extra_country_keys: vec!["LABEL".into()],
            ..SourceConfig::default()
        };
        let h = Highlighter::builtin().with_source_config(&cfg);
        let visited = VisitedNameSet::from_names(["Chile"], []);
        let f = GeoFeature::with_properties([("LABEL", "Chile")]);
        assert_eq!(h.match_countries(&visited, &[f]).len(), 1);
    }
}
