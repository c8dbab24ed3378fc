// crates/globetrotter-core/src/circles.rs

//! Degraded country highlighting: one circle per visited country, centred
//! on the mean position of that country's logged locations. Used when the
//! country polygons could not be loaded.

use crate::alias::AliasTable;
use crate::model::{Coordinates, Location};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentroidCircle {
    /// Country as the user first typed it.
    pub country: String,
    pub center: Coordinates,
    pub radius_km: f64,
    /// Locations that contributed to `center`.
    pub locations: usize,
}

/// Circles for every country with at least one location that has valid
/// coordinates, ordered by canonical country name.
pub fn centroid_circles(
    locations: &[Location],
    aliases: &AliasTable,
    radius_km: f64,
) -> Vec<CentroidCircle> {
    // canonical -> (display, sum_lat, sum_lon, count)
    let mut acc: BTreeMap<String, (String, f64, f64, usize)> = BTreeMap::new();

    for loc in locations {
        let key = aliases.dedup_key(&loc.country);
        if key.is_empty() || !loc.coordinates.is_valid() {
            continue;
        }
        let entry = acc
            .entry(key)
            .or_insert_with(|| (loc.country.trim().to_string(), 0.0, 0.0, 0));
        entry.1 += loc.coordinates.lat;
        entry.2 += loc.coordinates.lon;
        entry.3 += 1;
    }

    acc.into_values()
        .map(|(country, lat, lon, n)| CentroidCircle {
            country,
            center: Coordinates::new(lat / n as f64, lon / n as f64),
            radius_km,
            locations: n,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(country: &str, lat: f64, lon: f64) -> Location {
        let d = NaiveDate::from_ymd_opt(2022, 8, 1).unwrap();
        Location::new(country, Coordinates::new(lat, lon), d)
    }

    #[test]
    fn averages_per_canonical_country() {
        let circles = centroid_circles(
            &[at("UK", 50.0, -2.0), at("Britain", 54.0, -4.0), at("Peru", -12.0, -77.0)],
            AliasTable::builtin(),
            100.0,
        );
        assert_eq!(circles.len(), 2);
        let peru = &circles[0];
        assert_eq!(peru.country, "Peru");
        let uk = &circles[1];
        assert_eq!(uk.country, "UK");
        assert_eq!(uk.locations, 2);
        assert!((uk.center.lat - 52.0).abs() < 1e-9);
        assert!((uk.center.lon + 3.0).abs() < 1e-9);
        assert_eq!(uk.radius_km, 100.0);
    }

    #[test]
    fn invalid_coordinates_are_ignored() {
        let circles = centroid_circles(&[at("Chile", 200.0, 0.0)], AliasTable::builtin(), 50.0);
        assert!(circles.is_empty());
    }
}
