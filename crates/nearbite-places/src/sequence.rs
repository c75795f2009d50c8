//! Last-writer-wins discarding of superseded searches.
//!
//! Callers that may start a new search before the previous one resolves take
//! a [`SearchTicket`] from [`SearchSequencer::begin`] and hand the result back
//! through [`SearchSequencer::accept`], which drops it if a newer search has
//! begun in the meantime. In-flight requests are never cancelled; late
//! results are simply ignored.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies one search. Tickets from the same sequencer are strictly
/// increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing [`SearchTicket`]s. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct SearchSequencer {
    latest: Arc<AtomicU64>,
}

impl SearchSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new search, superseding every earlier ticket.
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Returns `true` if no search has begun since `ticket` was issued.
    #[must_use]
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Passes `value` through only if `ticket` is still the latest search.
    pub fn accept<T>(&self, ticket: SearchTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest.load(Ordering::Acquire),
                "discarding superseded search result"
            );
            None
        }
    }
}
