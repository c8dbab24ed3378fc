//! Basic usage of globetrotter-core
//!
//! Matches a small travel log against an in-memory boundary dataset.
//! Run with `cargo run --example basic_usage`.

use chrono::NaiveDate;
use globetrotter_core::prelude::*;
use globetrotter_core::{Coordinates, FeatureCollection};

/// Stands in for the remote Natural Earth files.
struct Canned;

impl FeatureSource for Canned {
    fn fetch(&self, endpoint: &str) -> Result<FeatureCollection> {
        let features = match endpoint {
            "countries" => ["United States of America", "Czechia", "Romania", "Oman"]
                .into_iter()
                .map(|n| GeoFeature::with_properties([("ADMIN", n)]))
                .collect(),
            "regions" => vec![
                GeoFeature::with_properties([("name", "California"), ("admin", "United States of America")]),
                GeoFeature::with_properties([("name", "Nevada"), ("admin", "United States of America")]),
            ],
            other => return Err(GeoError::NotFound(other.to_string())),
        };
        Ok(FeatureCollection { features })
    }
}

fn main() -> Result<()> {
    println!("=== globetrotter basic usage ===\n");

    println!("--- Name matching ---");
    for (a, b) in [("USA", "United States of America"), ("Czechia", "Czech Republic"), ("Oman", "Romania")] {
        println!("  {a:>8} ~ {b:<26} -> {}", names_match(a, b));
    }
    println!();

    let date = NaiveDate::from_ymd_opt(2024, 6, 1)
        .ok_or_else(|| GeoError::InvalidData("invalid demo date".into()))?;
    let mut store = MemoryStore::new();
    store.add(Location::new("USA", Coordinates::new(36.7, -119.4), date).with_region("California"))?;
    store.add(Location::new("Oman", Coordinates::new(23.6, 58.4), date))?;

    let config = SourceConfig {
        country_endpoint: "countries".into(),
        region_endpoints: vec!["mirror-down".into(), "regions".into()],
        ..SourceConfig::default()
    };

    println!("--- Highlights ---");
    let outcome = Highlighter::builtin().run(&Canned, &config, &store.load_all()?);
    if let CountryHighlights::Polygons(countries) = &outcome.countries {
        for c in countries {
            println!("  country: {}", c.name);
        }
    }
    for r in &outcome.regions {
        println!("  region:  {}", r.name);
    }
    for f in &outcome.failures {
        println!("  skipped: {f}");
    }

    Ok(())
}
