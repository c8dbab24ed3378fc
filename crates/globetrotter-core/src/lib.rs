// crates/globetrotter-core/src/lib.rs

//! # globetrotter-core
//!
//! Decides whether a place name typed into a travel log denotes the same
//! place as a record in a third-party boundary dataset, and selects the
//! polygons to highlight as visited.
//!
//! ```rust
//! use globetrotter_core::prelude::*;
//!
//! assert!(names_match("UK", "United Kingdom"));
//! assert!(!names_match("Oman", "Romania"));
//! ```

pub mod alias;
pub mod circles;
pub mod common;
pub mod config;
pub mod cycle;
pub mod denylist;
pub mod error;
pub mod flag;
pub mod highlight;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod region;
pub mod selector;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::alias::{normalize, AliasTable};
pub use crate::common::VisitStats;
pub use crate::config::{MatchConfig, SourceConfig};
pub use crate::denylist::Denylist;
pub use crate::error::{GeoError, Result};
pub use crate::highlight::{
    compute_highlight_set, HighlightSet, HighlightStyle, HighlightedFeature, Highlighter,
};
pub use crate::matcher::{names_match, NameMatcher};
pub use crate::model::{
    Coordinates, FeatureCollection, GeoFeature, Location, PropertyKeys, RegionKey,
    VisitedNameSet,
};
pub use crate::region::region_visited;
pub use crate::selector::{CountryHighlights, HighlightOutcome};
pub use crate::traits::{FeatureSource, LocationStore};

pub mod prelude {
    pub use crate::cycle::{CycleTicket, HighlightCycles};
    pub use crate::store::MemoryStore;
    #[cfg(feature = "json")]
    pub use crate::store::JsonFileStore;
    pub use crate::{
        compute_highlight_set, names_match, normalize, AliasTable, CountryHighlights, Denylist,
        FeatureSource, GeoError, GeoFeature, HighlightOutcome, HighlightSet, Highlighter,
        Location, LocationStore, NameMatcher, Result, SourceConfig, VisitedNameSet,
    };
}
