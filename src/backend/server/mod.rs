//! Server Module
//!
//! Configuration, state, database bootstrap, and application assembly.

/// Environment configuration and SQLite bootstrap
pub mod config;

/// Axum application assembly
pub mod init;

/// Demo catalog seeding
pub mod seed;

/// Shared application state
pub mod state;

pub use config::{ensure_schema, load_database, Config};
pub use init::create_app;
pub use state::AppState;
