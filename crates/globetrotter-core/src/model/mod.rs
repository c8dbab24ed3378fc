// crates/globetrotter-core/src/model/mod.rs

//! # Data Model
//!
//! - [`feature`]: boundary dataset records and the property-key lists used
//!   to pull names out of them.
//! - [`location`]: travel-log entries as supplied by the store.
//! - [`visited`]: the deduplicated name sets derived from those entries.

pub mod feature;
pub mod location;
pub mod visited;

pub use feature::{FeatureCollection, GeoFeature, PropertyKeys};
pub use location::{Coordinates, Location};
pub use visited::{RegionKey, VisitedNameSet};
