// crates/globetrotter-core/src/loader/file.rs

use super::common_io;
use crate::error::Result;
use crate::model::FeatureCollection;
use crate::traits::FeatureSource;
use std::path::{Path, PathBuf};

/// Reads GeoJSON from disk. Relative endpoints resolve against `base`.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    base: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, endpoint: &str) -> PathBuf {
        let path = Path::new(endpoint.strip_prefix("file://").unwrap_or(endpoint));
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl FeatureSource for FileSource {
    fn fetch(&self, endpoint: &str) -> Result<FeatureCollection> {
        let path = self.resolve(endpoint);
        let reader = common_io::open_stream(&path)?;
        let fc = FeatureCollection::from_reader(reader)?;
        tracing::debug!(path = %path.display(), features = fc.len(), "loaded feature file");
        Ok(fc)
    }
}
