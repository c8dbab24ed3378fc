// crates/globetrotter-core/src/loader/cache.rs

use super::common_io;
use crate::error::Result;
use crate::model::FeatureCollection;
use crate::traits::FeatureSource;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

#[cfg(feature = "compact")]
const CACHE_SUFFIX: &str = "json.gz";
#[cfg(not(feature = "compact"))]
const CACHE_SUFFIX: &str = "json";

/// Keeps a copy of every successful fetch under `dir` and serves it while fresh.
///
/// Cache write failures are logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    inner: S,
    dir: PathBuf,
    max_age: Option<Duration>,
}

impl<S: FeatureSource> CachedSource<S> {
    pub fn new(inner: S, dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            dir: dir.into(),
            max_age: None,
        }
    }

    /// Entries older than `max_age` are refetched.
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    pub fn cache_path(&self, endpoint: &str) -> PathBuf {
        let stem: String = endpoint
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{stem}.{CACHE_SUFFIX}"))
    }

    fn is_cache_fresh(&self, path: &Path) -> bool {
        let modified = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(m) => m,
            Err(_) => return false,
        };
        match self.max_age {
            Some(max) => SystemTime::now()
                .duration_since(modified)
                .map(|age| age <= max)
                .unwrap_or(true),
            None => true,
        }
    }
}

impl<S: FeatureSource> FeatureSource for CachedSource<S> {
    fn fetch(&self, endpoint: &str) -> Result<FeatureCollection> {
        let path = self.cache_path(endpoint);

        if self.is_cache_fresh(&path) {
            match common_io::open_stream(&path).and_then(FeatureCollection::from_reader) {
                Ok(fc) => return Ok(fc),
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "ignoring unreadable cache entry"),
            }
        }

        let fc = self.inner.fetch(endpoint)?;
        if let Err(e) = common_io::write_json(&path, &fc) {
            tracing::warn!(path = %path.display(), error = %e, "could not write cache entry");
        }
        Ok(fc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use crate::model::GeoFeature;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
        fail: bool,
    }

    impl FeatureSource for Counting {
        fn fetch(&self, _endpoint: &str) -> Result<FeatureCollection> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(GeoError::Http("offline".into()));
            }
            Ok(vec![GeoFeature::with_properties([("ADMIN", "Malta")])].into())
        }
    }

    #[test]
    fn second_fetch_is_served_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let src = CachedSource::new(Counting { calls: Cell::new(0), fail: false }, dir.path());

        let a = src.fetch("https://example.org/a.geojson").unwrap();
        let b = src.fetch("https://example.org/a.geojson").unwrap();
        assert_eq!(a, b);
        assert_eq!(src.inner.calls.get(), 1);
        assert!(src.cache_path("https://example.org/a.geojson").exists());
    }

    #[test]
    fn failures_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let src = CachedSource::new(Counting { calls: Cell::new(0), fail: true }, dir.path());
        assert!(src.fetch("x").is_err());
        assert!(src.fetch("x").is_err());
        assert_eq!(src.inner.calls.get(), 2);
    }

    #[test]
    fn zero_max_age_always_refetches() {
        let dir = tempfile::tempdir().unwrap();
        let src = CachedSource::new(Counting { calls: Cell::new(0), fail: false }, dir.path())
            .with_max_age(Duration::ZERO);
        src.fetch("y").unwrap();
        std::thread::sleep(Duration::from_millis(20));
        src.fetch("y").unwrap();
        assert_eq!(src.inner.calls.get(), 2);
    }
}
