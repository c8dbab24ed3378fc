// crates/globetrotter-core/src/selector.rs

//! End-to-end highlight pass against live sources.
//!
//! One fetch for country polygons, then (only if regions were visited) a
//! sequential walk through the region endpoints until one both loads and
//! yields at least one match. Nothing here returns an error: failures are
//! logged, recorded in the outcome and degrade the result.

use crate::circles::{centroid_circles, CentroidCircle};
use crate::config::SourceConfig;
use crate::highlight::{HighlightSet, HighlightedFeature, Highlighter};
use crate::loader::{first_usable, SourceFailure};
use crate::model::{Location, VisitedNameSet};
use crate::traits::FeatureSource;
use serde::Serialize;

/// Country layer of an outcome: exact polygons, or circles when the
/// polygons could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum CountryHighlights {
    Polygons(Vec<HighlightedFeature>),
    Circles(Vec<CentroidCircle>),
}

impl CountryHighlights {
    pub fn len(&self) -> usize {
        match self {
            CountryHighlights::Polygons(p) => p.len(),
            CountryHighlights::Circles(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, CountryHighlights::Circles(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightOutcome {
    pub countries: CountryHighlights,
    pub regions: Vec<HighlightedFeature>,
    /// Endpoint that supplied `regions`, if any.
    pub region_endpoint: Option<String>,
    pub failures: Vec<SourceFailure>,
}

impl HighlightOutcome {
    /// The exact-polygon part of this outcome, if polygons were available.
    pub fn polygon_set(&self) -> Option<HighlightSet> {
        match &self.countries {
            CountryHighlights::Polygons(p) => Some(HighlightSet {
                country_matches: p.clone(),
                region_matches: self.regions.clone(),
            }),
            CountryHighlights::Circles(_) => None,
        }
    }
}

impl Highlighter<'_> {
    /// Fetch datasets per `config` and compute highlights for `locations`.
    pub fn run<S: FeatureSource>(
        &self,
        source: &S,
        config: &SourceConfig,
        locations: &[Location],
    ) -> HighlightOutcome {
        let visited = VisitedNameSet::from_locations_with(locations, self.matcher.aliases());
        self.run_with(source, config, &visited, locations)
    }

    /// As [`Highlighter::run`] with a precomputed visited set.
    pub fn run_with<S: FeatureSource>(
        &self,
        source: &S,
        config: &SourceConfig,
        visited: &VisitedNameSet,
        locations: &[Location],
    ) -> HighlightOutcome {
        let mut failures = Vec::new();

        let countries = match source.fetch(&config.country_endpoint) {
            Ok(fc) => CountryHighlights::Polygons(self.match_countries(visited, &fc.features)),
            Err(e) => {
                tracing::warn!(
                    endpoint = %config.country_endpoint,
                    error = %e,
                    "country polygons unavailable, falling back to circles"
                );
                failures.push(SourceFailure::new(&config.country_endpoint, e.to_string()));
                CountryHighlights::Circles(centroid_circles(
                    locations,
                    self.matcher.aliases(),
                    config.fallback_radius_km,
                ))
            }
        };

        let (regions, region_endpoint) = if visited.regions().is_empty() {
            (Vec::new(), None)
        } else {
            let walk = first_usable(config.region_endpoints.as_slice(), |endpoint| {
                let fc = source.fetch(endpoint)?;
                let matches = self.match_regions(visited, &fc.features);
                Ok((!matches.is_empty()).then_some(matches))
            });
            failures.extend(walk.failures);
            match walk.hit {
                Some((endpoint, matches)) => (matches, Some(endpoint)),
                None => (Vec::new(), None),
            }
        };

        tracing::debug!(
            countries = countries.len(),
            regions = regions.len(),
            failures = failures.len(),
            "highlight pass finished"
        );

        HighlightOutcome {
            countries,
            regions,
            region_endpoint,
            failures,
        }
    }
}
