//! Server Initialization
//!
//! Builds the axum application from an already-opened pool. Pool opening
//! and seeding stay in `main` so tests can hand in-memory databases to
//! `create_app` directly.

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;

/// Create the axum application serving the storefront API.
pub fn create_app(db: SqlitePool) -> Router {
    let state = AppState::new(db);
    create_router(state)
}
