// crates/globetrotter-core/src/common.rs

use crate::alias::AliasTable;
use crate::model::Location;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Simple aggregate statistics for a travel log.
///
/// Countries, regions and cities are counted by canonical name, so
/// "UK" and "Britain" count once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitStats {
    pub countries: usize,
    pub regions: usize,
    pub cities: usize,
    pub locations: usize,
}

impl VisitStats {
    pub fn from_locations(locations: &[Location], aliases: &AliasTable) -> Self {
        let mut countries = BTreeSet::new();
        let mut regions = BTreeSet::new();
        let mut cities = BTreeSet::new();

        for loc in locations {
            let country = aliases.dedup_key(&loc.country);
            if country.is_empty() {
                continue;
            }
            if let Some(region) = loc.region_str() {
                regions.insert((aliases.dedup_key(region), country.clone()));
            }
            if let Some(city) = loc.city_str() {
                cities.insert((aliases.dedup_key(city), country.clone()));
            }
            countries.insert(country);
        }

        Self {
            countries: countries.len(),
            regions: regions.len(),
            cities: cities.len(),
            locations: locations.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;
    use chrono::NaiveDate;

    #[test]
    fn counts_by_canonical_name() {
        let d = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
        let p = Coordinates::new(0.0, 0.0);
        let locs = vec![
            Location::new("UK", p, d).with_city("London"),
            Location::new("Britain", p, d).with_city(" london "),
            Location::new("Canada", p, d).with_city("London").with_region("Ontario"),
            Location::new("", p, d),
        ];
        let stats = VisitStats::from_locations(&locs, AliasTable::builtin());
        assert_eq!(
            stats,
            VisitStats {
                countries: 2,
                regions: 1,
                cities: 2,
                locations: 4,
            }
        );
    }
}
