//! globetrotter: command-line front end for globetrotter-core
//!
//! Usage examples
//! --------------
//!
//! - Canonical form of a name
//!   $ globetrotter normalize "Czech Republic"
//!
//! - Compare two names
//!   $ globetrotter match Oman Romania
//!
//! - Manage the travel log (default store: ./locations.json)
//!   $ globetrotter add Japan --region Hokkaido --lat 43.06 --lon 141.35 --date 2024-02-11
//!   $ globetrotter list
//!   $ globetrotter remove 3
//!
//! - Compute highlights against the configured boundary datasets
//!   $ globetrotter --config sources.json highlight --cache-dir .cache
//!
//! Without `--config`, Natural Earth GeoJSON files on GitHub are used.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use globetrotter_core::flag::flag_for_country;
use globetrotter_core::prelude::*;
use globetrotter_core::{Coordinates, VisitStats};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose {
        "globetrotter=info,globetrotter_core=info"
    } else {
        "globetrotter=warn,globetrotter_core=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => SourceConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SourceConfig::default(),
    };
    let mut store = JsonFileStore::new(&args.store);
    let matcher = NameMatcher::builtin();

    match args.command {
        Commands::Normalize { name } => {
            println!("{}", matcher.normalize(&name));
        }

        Commands::Match { a, b } => {
            let matched = matcher.matches(&a, &b);
            println!(
                "{a:?} ({}) vs {b:?} ({}): {}",
                matcher.normalize(&a),
                matcher.normalize(&b),
                if matched { "match" } else { "no match" }
            );
        }

        Commands::Flag { country } => {
            let source = build_source(&config, None)?;
            let features = source
                .fetch(&config.country_endpoint)
                .with_context(|| format!("fetching {}", config.country_endpoint))?;
            match flag_for_country(matcher, &country, &features.features) {
                Some(flag) => println!("{flag} {country}"),
                None => eprintln!("No country found for: {country}"),
            }
        }

        Commands::Add {
            country,
            region,
            city,
            lat,
            lon,
            date,
            notes,
            photo,
        } => {
            let coordinates = Coordinates::new(lat, lon);
            anyhow::ensure!(coordinates.is_valid(), "coordinates out of range: {lat}, {lon}");
            let mut location = Location::new(country, coordinates, date);
            if let Some(region) = region {
                location = location.with_region(region);
            }
            if let Some(city) = city {
                location = location.with_city(city);
            }
            if let Some(notes) = notes {
                location = location.with_notes(notes);
            }
            if let Some(photo) = photo {
                location = location.with_photo_uri(photo);
            }
            let stored = store.add(location)?;
            println!("Added #{} ({})", stored.id, stored.country);
        }

        Commands::List => {
            for l in store.load_all()? {
                let place = [l.city_str(), l.region_str(), Some(l.country.as_str())]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("#{:<4} {}  {}", l.id, l.visit_date, place);
            }
        }

        Commands::Remove { id } => {
            if store.delete(id)? {
                println!("Removed #{id}");
            } else {
                eprintln!("No location with id {id}");
            }
        }

        Commands::Stats => {
            let locations = store.load_all()?;
            let stats = VisitStats::from_locations(&locations, matcher.aliases());
            println!("Travel log statistics:");
            println!("  Locations: {}", stats.locations);
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Highlight {
            cache_dir,
            names_only,
        } => {
            let locations = store.load_all()?;
            let source = build_source(&config, cache_dir)?;
            let highlighter = Highlighter::new(*matcher).with_source_config(&config);

            let outcome = highlighter.run(&source, &config, &locations);
            for failure in &outcome.failures {
                tracing::info!(%failure, "source skipped");
            }

            let mut value = serde_json::to_value(&outcome)?;
            if names_only {
                strip_geometry(&mut value);
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

/// HTTP + file source, optionally behind an on-disk cache.
fn build_source(
    config: &SourceConfig,
    cache_dir: Option<std::path::PathBuf>,
) -> anyhow::Result<Box<dyn FeatureSource>> {
    #[cfg(feature = "fetch")]
    let base = {
        let timeout = config.timeout_secs.map(std::time::Duration::from_secs);
        globetrotter_core::loader::AutoSource::new(globetrotter_core::loader::HttpSource::new(
            timeout,
        )?)
    };
    #[cfg(not(feature = "fetch"))]
    let base = {
        let _ = config;
        globetrotter_core::loader::FileSource::new()
    };

    Ok(match cache_dir {
        Some(dir) => Box::new(globetrotter_core::loader::CachedSource::new(base, dir)),
        None => Box::new(base),
    })
}

fn strip_geometry(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.remove("geometry");
            map.values_mut().for_each(strip_geometry);
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(strip_geometry),
        _ => {}
    }
}
