//! Server Configuration
//!
//! Loads server settings from the environment (a `.env` file is honored by
//! `main`) and owns the SQLite bootstrap: connection pool, pragmas, and
//! schema creation.
//!
//! # Variables
//!
//! - `SERVER_PORT` - TCP port to bind (default 3000)
//! - `DATABASE_URL` - sqlx SQLite URL (default `sqlite:pizzetta.db`; the
//!   file is created if missing)

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default TCP port when `SERVER_PORT` is unset or unparsable.
const DEFAULT_PORT: u16 = 3000;

/// Default database location next to the binary.
const DEFAULT_DATABASE_URL: &str = "sqlite:pizzetta.db";

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP listener binds to
    pub port: u16,
    /// sqlx connection URL for the catalog database
    pub database_url: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self { port, database_url }
    }
}

/// Open the SQLite pool and make sure the schema exists.
///
/// WAL journaling and enforced foreign keys are set through the connect
/// options so every pooled connection gets them. The schema script is
/// idempotent, so calling this on an already-populated database is a no-op.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("connecting to {database_url}");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    Ok(pool)
}

/// Apply the schema script to a pool.
///
/// Split out of [`load_database`] so tests can run it against in-memory
/// pools they build themselves.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("schema.sql")).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn schema_applies_cleanly() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn schema_is_idempotent() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();
    }
}
