use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for globetrotter-cli
#[derive(Debug, Parser)]
#[command(
    name = "globetrotter",
    version,
    about = "Resolve place names and compute visited-country highlights for a travel log"
)]
pub struct CliArgs {
    /// Path to a JSON source config (endpoints, fallback radius, extra property keys)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the JSON location store
    #[arg(short = 's', long = "store", global = true, default_value = "locations.json")]
    pub store: PathBuf,

    /// Log progress (info level) to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the canonical form of a place name
    Normalize {
        name: String,
    },

    /// Check whether two place names denote the same place
    Match {
        a: String,
        b: String,
    },

    /// Print the flag emoji for a country name
    Flag {
        country: String,
    },

    /// Add a visited location to the store
    Add {
        /// Country as you would write it (e.g. "UK", "Côte d'Ivoire")
        country: String,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Visit date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        photo: Option<String>,
    },

    /// List stored locations
    List,

    /// Delete a stored location by id
    Remove {
        id: u64,
    },

    /// Show distinct countries, regions and cities visited
    Stats,

    /// Fetch boundary data and print the highlight outcome as JSON
    Highlight {
        /// Cache fetched datasets in this directory
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Omit feature geometry from the output
        #[arg(long)]
        names_only: bool,
    },
}
