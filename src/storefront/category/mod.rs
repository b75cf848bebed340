//! Category Tracking Module
//!
//! Scroll-synced navigation highlighting: the shared active-category cell
//! (`tracker`) and the per-section threshold detectors that write it
//! (`observer`).

/// Observable active-category cell
pub mod tracker;

/// Per-section visibility threshold detector
pub mod observer;

pub use observer::{SectionObserver, VISIBILITY_THRESHOLD};
pub use tracker::CategoryTracker;
