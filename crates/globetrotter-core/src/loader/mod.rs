// crates/globetrotter-core/src/loader/mod.rs

//! # Data Loader
//!
//! Physical access to boundary datasets: local files (optionally gzipped),
//! HTTP endpoints, and an on-disk cache in front of either. Walking an
//! ordered endpoint list is done by [`first_usable`].

pub mod common_io;
mod fallback;

#[cfg(feature = "json")]
mod file;

#[cfg(feature = "json")]
mod cache;

#[cfg(feature = "fetch")]
mod http;

pub use fallback::{first_usable, Fallback, SourceFailure};

#[cfg(feature = "fetch")]
use crate::{error::Result, model::FeatureCollection, traits::FeatureSource};

#[cfg(feature = "json")]
pub use file::FileSource;

#[cfg(feature = "json")]
pub use cache::CachedSource;

#[cfg(feature = "fetch")]
pub use http::HttpSource;

/// Routes `http(s)://` endpoints to HTTP and everything else to the file
/// system. Endpoint lists can therefore mix mirrors and local copies.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct AutoSource {
    http: HttpSource,
    file: FileSource,
}

#[cfg(feature = "fetch")]
impl AutoSource {
    pub fn new(http: HttpSource) -> Self {
        Self {
            http,
            file: FileSource::new(),
        }
    }
}

#[cfg(feature = "fetch")]
impl FeatureSource for AutoSource {
    fn fetch(&self, endpoint: &str) -> Result<FeatureCollection> {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            self.http.fetch(endpoint)
        } else {
            self.file.fetch(endpoint)
        }
    }
}
