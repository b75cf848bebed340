//! User HTTP Handlers
//!
//! List and create over the users table. Malformed JSON never reaches the
//! create handler; the `Json` extractor rejects it with a client error. A
//! duplicate email surfaces as 409 through [`ApiError::EmailTaken`].

use axum::extract::State;
use axum::Json;
use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::users::db;
use crate::shared::{CreateUser, User};

/// `GET /api/users` - every user, storage order.
pub async fn list_users(State(db): State<SqlitePool>) -> Result<Json<Vec<User>>, ApiError> {
    let users = db::list_users(&db).await?;
    Ok(Json(users))
}

/// `POST /api/users` - persist the payload verbatim, return the stored
/// record with its generated id and timestamps.
pub async fn create_user(
    State(db): State<SqlitePool>,
    Json(payload): Json<CreateUser>,
) -> Result<Json<User>, ApiError> {
    tracing::info!(email = %payload.email, "creating user");
    let user = db::create_user(&db, &payload).await?;
    Ok(Json(user))
}
