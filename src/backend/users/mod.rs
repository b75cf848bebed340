//! Users Module
//!
//! User storage (`db`) and the HTTP handlers over it (`handlers`).

/// sqlx queries against the users table
pub mod db;

/// axum request handlers
pub mod handlers;
