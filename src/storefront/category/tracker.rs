//! Active-Category Tracker
//!
//! An observable integer cell holding the catalog section currently "in
//! view". Section observers write it, the navigation bar reads it. Built on
//! a tokio watch channel so last-writer-wins holds under the single-threaded
//! frame loop and stays correct if a writer ever lives on another thread.
//! Handles are cloned into writers and readers; lifetime is the UI session,
//! not a process-wide static.

use tokio::sync::watch;

use crate::storefront::catalog::DEFAULT_CATEGORY_ID;

/// Shared handle to the active category id.
#[derive(Debug, Clone)]
pub struct CategoryTracker {
    tx: watch::Sender<i64>,
}

impl Default for CategoryTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_ID)
    }
}

impl CategoryTracker {
    pub fn new(initial: i64) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Record a new active category. No validation; callers pass known ids.
    pub fn set(&self, id: i64) {
        self.tx.send_replace(id);
    }

    /// Current active category id.
    pub fn get(&self) -> i64 {
        *self.tx.borrow()
    }

    /// A receiver that observes every change.
    pub fn subscribe(&self) -> watch::Receiver<i64> {
        self.tx.subscribe()
    }
}
