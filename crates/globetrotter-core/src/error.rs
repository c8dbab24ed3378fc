// crates/globetrotter-core/src/error.rs

use thiserror::Error;

/// Errors raised by the I/O edges of the crate: dataset sources, the
/// location store and configuration files.
///
/// The matching functions themselves are total and never produce one.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self {
        GeoError::Http(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
