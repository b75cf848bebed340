//! Search Box Controller
//!
//! State machine behind the search box: query text, the dropdown result
//! list, and the focus flag. Keystrokes update the text immediately and
//! re-arm a 250 ms debounce; when it fires, [`SearchController::poll`]
//! hands the caller a [`SearchRequest`] carrying a fresh sequence number.
//! Responses come back through [`SearchController::apply`], which discards
//! anything whose sequence is no longer the latest issued, so a slow old
//! response can never overwrite a newer one or repopulate a dropdown the
//! user already left.
//!
//! The controller never touches the network itself; the app layer runs the
//! request on a worker and feeds the result back.

use std::time::{Duration, Instant};

use crate::shared::Product;
use crate::storefront::api::ApiError;
use crate::storefront::search::timer::Debounce;

/// Quiet period after the last keystroke before a search fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// A search the caller should now perform. `seq` must be handed back to
/// [`SearchController::apply`] with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// Transient search box state. One per search box; dropped with the UI.
#[derive(Debug)]
pub struct SearchController {
    query: String,
    results: Vec<Product>,
    focused: bool,
    debounce: Debounce,
    /// Latest issued request sequence; responses with any other value
    /// are stale.
    seq: u64,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            focused: false,
            debounce: Debounce::new(SEARCH_DEBOUNCE),
            seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// The dropdown shows only when the box is focused and there is
    /// something to show.
    pub fn dropdown_visible(&self) -> bool {
        self.focused && !self.results.is_empty()
    }

    /// Replace the query text and re-arm the debounce. A call with
    /// unchanged text is not a query-altering event and leaves the timer
    /// alone.
    pub fn input(&mut self, text: &str, now: Instant) {
        if text == self.query {
            return;
        }
        self.query = text.to_string();
        self.debounce.schedule(now);
    }

    /// The box gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// A click landed outside the component: hide the dropdown, keep the
    /// query text.
    pub fn click_away(&mut self) {
        self.focused = false;
    }

    /// A result was chosen: clear text, results, and focus, and invalidate
    /// both the pending timer and any in-flight response.
    pub fn select(&mut self) {
        self.query.clear();
        self.results.clear();
        self.focused = false;
        self.debounce.cancel();
        self.seq += 1;
    }

    /// Advance the debounce clock. Returns the request to issue when the
    /// quiet period has elapsed, at most one per settled burst.
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        if !self.debounce.poll(now) {
            return None;
        }
        self.seq += 1;
        Some(SearchRequest {
            seq: self.seq,
            query: self.query.clone(),
        })
    }

    /// Feed back the outcome of a previously issued request. Stale
    /// sequences are dropped; failures keep the previous result list so
    /// the dropdown degrades instead of flickering empty.
    pub fn apply(&mut self, seq: u64, outcome: Result<Vec<Product>, ApiError>) {
        if seq != self.seq {
            tracing::debug!(seq, latest = self.seq, "discarding stale search response");
            return;
        }
        match outcome {
            Ok(products) => self.results = products,
            Err(err) => {
                tracing::warn!("search failed, keeping previous results: {err}");
            }
        }
    }
}
