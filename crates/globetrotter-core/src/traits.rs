// crates/globetrotter-core/src/traits.rs

//! The two seams to the outside world: where boundary datasets come from,
//! and where travel-log entries are kept.

use crate::error::Result;
use crate::model::{FeatureCollection, Location};

/// Fetches a feature collection from an endpoint (URL, path, ...).
///
/// Implementations block until the whole collection is available; callers
/// walk endpoints strictly one after another.
pub trait FeatureSource {
    fn fetch(&self, endpoint: &str) -> Result<FeatureCollection>;
}

impl<S: FeatureSource + ?Sized> FeatureSource for &S {
    fn fetch(&self, endpoint: &str) -> Result<FeatureCollection> {
        (**self).fetch(endpoint)
    }
}

impl<S: FeatureSource + ?Sized> FeatureSource for Box<S> {
    fn fetch(&self, endpoint: &str) -> Result<FeatureCollection> {
        (**self).fetch(endpoint)
    }
}

/// Persistence for travel-log entries.
pub trait LocationStore {
    fn load_all(&self) -> Result<Vec<Location>>;

    /// Store a new entry, assigning it the next free id. Returns the stored copy.
    fn add(&mut self, location: Location) -> Result<Location>;

    /// Replace the entry with `location.id`. Fails with `NotFound` if absent.
    fn update(&mut self, location: Location) -> Result<()>;

    /// Remove by id; `false` if there was nothing to remove.
    fn delete(&mut self, id: u64) -> Result<bool>;
}
