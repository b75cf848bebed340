//! User Database Operations
//!
//! Insert and list for the users table. The create path persists the payload
//! verbatim; the unique email index is the only validation, surfaced to the
//! handler as a sqlx database error.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::{CreateUser, User};

/// Fetch every user, in storage order.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, full_name, email, password, role, verified, created_at, updated_at
         FROM users",
    )
    .fetch_all(pool)
    .await
}

/// Insert a user and return the stored row, generated id and timestamps
/// included.
pub async fn create_user(pool: &SqlitePool, payload: &CreateUser) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let inserted = sqlx::query(
        "INSERT INTO users (full_name, email, password, role, created_at, updated_at)
         VALUES (?, ?, ?, 'USER', ?, ?)",
    )
    .bind(&payload.full_name)
    .bind(&payload.email)
    .bind(&payload.password)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    let id = inserted.last_insert_rowid();

    sqlx::query_as::<_, User>(
        "SELECT id, full_name, email, password, role, verified, created_at, updated_at
         FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_one(pool)
    .await
}
