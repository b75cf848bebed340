//! Backend Module
//!
//! Server-side code for the pizzetta storefront: an axum HTTP server over a
//! SQLite catalog database.
//!
//! - **`server`** - configuration, database bootstrap, state, app assembly
//! - **`routes`** - router and route table
//! - **`catalog`** - product and ingredient queries plus their handlers
//! - **`users`** - user storage plus its handlers
//! - **`error`** - handler error types and response mapping
//!
//! Handlers are stateless; the connection pool in [`server::AppState`] is
//! the only shared resource, and axum/tokio own request concurrency.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Catalog queries and handlers
pub mod catalog;

/// User storage and handlers
pub mod users;

/// Backend error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppState};
