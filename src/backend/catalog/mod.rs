//! Catalog Module
//!
//! Product and ingredient reads: the queries (`db`) and the HTTP handlers
//! over them (`handlers`).

/// sqlx queries against the catalog tables
pub mod db;

/// axum request handlers
pub mod handlers;

pub use db::MAX_SEARCH_RESULTS;
