// crates/globetrotter-core/src/model/visited.rs

use super::location::Location;
use crate::alias::AliasTable;
use serde::Serialize;
use std::collections::BTreeMap;

/// A visited `(region, country)` pair, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RegionKey {
    pub region: String,
    pub country: String,
}

impl RegionKey {
    pub fn new(region: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            country: country.into(),
        }
    }
}

/// Distinct visited countries and `(region, country)` pairs.
///
/// Built once per highlight cycle and then only read. Entries are
/// deduplicated by canonical name, so "UK" and "Britain" collapse into one;
/// the first spelling seen is kept for display and output is ordered by
/// canonical name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VisitedNameSet {
    countries: Vec<String>,
    regions: Vec<RegionKey>,
}

impl VisitedNameSet {
    pub fn from_locations(locations: &[Location]) -> Self {
        Self::from_locations_with(locations, AliasTable::builtin())
    }

    pub fn from_locations_with(locations: &[Location], aliases: &AliasTable) -> Self {
        let mut countries: BTreeMap<String, String> = BTreeMap::new();
        let mut regions: BTreeMap<(String, String), RegionKey> = BTreeMap::new();

        for loc in locations {
            let country_key = aliases.dedup_key(&loc.country);
            if country_key.is_empty() {
                continue;
            }
            countries
                .entry(country_key.clone())
                .or_insert_with(|| loc.country.trim().to_string());

            if let Some(region) = loc.region_str() {
                regions
                    .entry((aliases.dedup_key(region), country_key))
                    .or_insert_with(|| RegionKey::new(region.trim(), loc.country.trim()));
            }
        }

        Self {
            countries: countries.into_values().collect(),
            regions: regions.into_values().collect(),
        }
    }

    /// Build directly from names; blank names are dropped, no deduplication.
    pub fn from_names<C, R>(countries: C, regions: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = RegionKey>,
    {
        Self {
            countries: countries
                .into_iter()
                .map(Into::into)
                .filter(|c: &String| !c.trim().is_empty())
                .collect(),
            regions: regions
                .into_iter()
                .filter(|r| !r.region.trim().is_empty() && !r.country.trim().is_empty())
                .collect(),
        }
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn regions(&self) -> &[RegionKey] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;
    use chrono::NaiveDate;

    fn loc(country: &str, region: Option<&str>) -> Location {
        let d = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        let l = Location::new(country, Coordinates::new(0.0, 0.0), d);
        match region {
            Some(r) => l.with_region(r),
            None => l,
        }
    }

    #[test]
    fn deduplicates_by_canonical_name() {
        let v = VisitedNameSet::from_locations(&[
            loc("UK", None),
            loc("Britain", Some("Scotland")),
            loc(" united kingdom ", Some("scotland")),
            loc("France", None),
        ]);
        assert_eq!(v.countries().len(), 2);
        assert_eq!(v.regions(), &[RegionKey::new("Scotland", "Britain")]);
    }

    #[test]
    fn blank_entries_are_dropped() {
        let v = VisitedNameSet::from_locations(&[loc("  ", Some("Nowhere")), loc("Peru", Some(""))]);
        assert_eq!(v.countries(), &["Peru".to_string()]);
        assert!(v.regions().is_empty());
    }

    #[test]
    fn same_region_name_in_two_countries_is_kept_twice() {
        let v = VisitedNameSet::from_locations(&[
            loc("Australia", Some("Victoria")),
            loc("Canada", Some("Victoria")),
        ]);
        assert_eq!(v.regions().len(), 2);
    }
}
