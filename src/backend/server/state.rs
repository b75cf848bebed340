//! Application State
//!
//! The shared state handed to every handler. The only resource the catalog
//! endpoints need is the connection pool; `FromRef` lets handlers extract
//! `State<SqlitePool>` directly instead of the whole struct, which is the
//! axum-recommended substate pattern.

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Central application state for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog and user storage
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
