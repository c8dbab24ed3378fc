// crates/globetrotter-core/src/loader/http.rs

use crate::error::{GeoError, Result};
use crate::model::FeatureCollection;
use crate::traits::FeatureSource;
use std::time::Duration;

/// Blocking HTTP source. Any non-success status counts as a failure.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("globetrotter/", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl FeatureSource for HttpSource {
    fn fetch(&self, endpoint: &str) -> Result<FeatureCollection> {
        tracing::debug!(endpoint, "fetching features");
        let resp = self.client.get(endpoint).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GeoError::Http(format!("{endpoint} returned {status}")));
        }
        let bytes = resp.bytes()?;
        FeatureCollection::from_slice(&bytes)
    }
}
