// crates/globetrotter-core/src/loader/fallback.rs

use crate::error::Result;
use serde::Serialize;

/// Why an endpoint was passed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    pub endpoint: String,
    pub reason: String,
}

impl SourceFailure {
    pub fn new(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.endpoint, self.reason)
    }
}

/// Outcome of walking an endpoint list.
#[derive(Debug, Clone)]
pub struct Fallback<T> {
    /// The first endpoint that produced something usable, and what it produced.
    pub hit: Option<(String, T)>,
    /// Every endpoint tried before (and without) a hit, in order.
    pub failures: Vec<SourceFailure>,
}

impl<T> Fallback<T> {
    pub fn value(&self) -> Option<&T> {
        self.hit.as_ref().map(|(_, v)| v)
    }

    pub fn into_value(self) -> Option<T> {
        self.hit.map(|(_, v)| v)
    }
}

/// Tries `endpoints` strictly in order, one at a time.
///
/// `attempt` returns `Ok(Some(v))` for a usable result, `Ok(None)` when the
/// endpoint answered but its data is not usable, and `Err` when it failed.
/// The walk stops at the first usable result. Failures are collected and
/// logged, never returned as an error.
///
/// ```rust
/// use globetrotter_core::loader::first_usable;
/// use globetrotter_core::GeoError;
///
/// let endpoints = ["down", "empty", "good", "never"];
/// let out = first_usable(&endpoints, |e| match e {
///     "down" => Err(GeoError::Http("503".into())),
///     "empty" => Ok(None),
///     other => Ok(Some(other.len())),
/// });
/// assert_eq!(out.value(), Some(&4));
/// assert_eq!(out.failures.len(), 2);
/// ```
pub fn first_usable<E, T, F>(endpoints: &[E], mut attempt: F) -> Fallback<T>
where
    E: AsRef<str>,
    F: FnMut(&str) -> Result<Option<T>>,
{
    let mut failures = Vec::new();

    for endpoint in endpoints.iter().map(AsRef::as_ref) {
        tracing::debug!(endpoint, "trying endpoint");
        match attempt(endpoint) {
            Ok(Some(value)) => {
                return Fallback {
                    hit: Some((endpoint.to_string(), value)),
                    failures,
                };
            }
            Ok(None) => failures.push(SourceFailure::new(endpoint, "no usable data")),
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "endpoint failed");
                failures.push(SourceFailure::new(endpoint, e.to_string()));
            }
        }
    }

    if !endpoints.is_empty() {
        tracing::warn!(
            attempts = failures.len(),
            "no endpoint produced usable data"
        );
    }
    Fallback {
        hit: None,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use std::cell::RefCell;

    #[test]
    fn stops_at_first_usable() {
        let calls = RefCell::new(Vec::new());
        let out = first_usable(&["a", "b", "c"], |e| {
            calls.borrow_mut().push(e.to_string());
            Ok(if e == "b" { Some(e.to_uppercase()) } else { None })
        });
        assert_eq!(out.hit, Some(("b".to_string(), "B".to_string())));
        assert_eq!(calls.into_inner(), vec!["a", "b"]);
        assert_eq!(out.failures, vec![SourceFailure::new("a", "no usable data")]);
    }

    #[test]
    fn exhausting_the_list_is_not_an_error() {
        let out: Fallback<()> =
            first_usable(&["x", "y"], |_| Err(GeoError::Http("timeout".into())));
        assert!(out.hit.is_none());
        assert_eq!(out.failures.len(), 2);
        assert!(out.failures[0].reason.contains("timeout"));
    }

    #[test]
    fn empty_list_yields_nothing() {
        let endpoints: [&str; 0] = [];
        let out: Fallback<u8> = first_usable(&endpoints, |_| Ok(Some(1)));
        assert!(out.into_value().is_none());
    }
}
