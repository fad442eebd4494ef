//! Latest-wins sequencing for list requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page that re-runs a search while the previous one is still in flight
//! must not let the older response overwrite the newer one. Each request
//! takes a [`Ticket`] when it starts and commits its result only while that
//! ticket is still the latest.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle to one started request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared generation counter. Clones observe the same sequence.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Run `commit` only if `ticket` has not been superseded.
    pub fn commit_if_latest(&self, ticket: Ticket, commit: impl FnOnce()) -> bool {
        let latest = self.is_latest(ticket);
        if latest {
            commit();
        } else {
            log::debug!("dropping superseded response {ticket:?}");
        }
        latest
    }
}
