// crates/globetrotter-core/src/cycle.rs

//! Guards the published highlight state against late results.
//!
//! Each highlight pass starts with [`HighlightCycles::begin`]. A pass that
//! finishes after a newer one has begun is dropped on commit, so a slow
//! fetch for old data can never overwrite fresher highlights.

use crate::selector::HighlightOutcome;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Identifies one highlight pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleTicket(u64);

impl CycleTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct HighlightCycles {
    latest: AtomicU64,
    committed: Mutex<Option<(CycleTicket, Arc<HighlightOutcome>)>>,
}

impl HighlightCycles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass; every earlier ticket becomes stale.
    pub fn begin(&self) -> CycleTicket {
        CycleTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: CycleTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Publish `outcome` if `ticket` is still the newest pass.
    /// Returns `false` (and discards the outcome) otherwise.
    pub fn commit(&self, ticket: CycleTicket, outcome: HighlightOutcome) -> bool {
        let mut slot = self.committed.lock().unwrap_or_else(PoisonError::into_inner);
        // Checked under the lock so a concurrent newer commit cannot be overwritten.
        if !self.is_current(ticket) || slot.as_ref().is_some_and(|(t, _)| *t > ticket) {
            tracing::debug!(ticket = ticket.0, "discarding stale highlight result");
            return false;
        }
        tracing::info!(ticket = ticket.0, "highlight state updated");
        *slot = Some((ticket, Arc::new(outcome)));
        true
    }

    /// The most recently committed outcome.
    pub fn current(&self) -> Option<Arc<HighlightOutcome>> {
        self.committed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(_, o)| Arc::clone(o))
    }
}
