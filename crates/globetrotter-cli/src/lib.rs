//! globetrotter-cli
//! ================
//!
//! Command-line interface for the `globetrotter-core` name resolution and
//! highlight engine.
//!
//! This crate primarily provides a binary (`globetrotter`). The library
//! target exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! globetrotter match "USA" "United States of America"
//! globetrotter add "UK" --region Scotland --lat 55.95 --lon -3.19 --date 2024-05-01
//! globetrotter stats
//! globetrotter highlight --cache-dir .cache --names-only
//! ```
//!
//! For programmatic access, use the `globetrotter-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
