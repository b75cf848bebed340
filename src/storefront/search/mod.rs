//! Search Module
//!
//! The debounced search box: timer (`timer`) and the state machine driving
//! requests and the dropdown (`controller`).

/// Cancellable debounce timer
pub mod timer;

/// Search box state machine
pub mod controller;

pub use controller::{SearchController, SearchRequest, SEARCH_DEBOUNCE};
pub use timer::Debounce;
