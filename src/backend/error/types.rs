//! Backend Error Types
//!
//! Failure taxonomy for the HTTP handlers. Malformed request bodies never
//! reach these types — axum's `Json` extractor rejects them with a client
//! error before the handler runs. What is left is the storage layer:
//! constraint violations map to a conflict, everything else to a server
//! error. No retries happen here.

use thiserror::Error;

/// Errors a catalog or user handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unique email constraint violated on user creation.
    #[error("email is already registered")]
    EmailTaken,

    /// Any other storage failure (connection, syntax, corruption).
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for ApiError {
    /// Classify a sqlx error. A unique-constraint violation on the users
    /// table is the one storage failure the client can act on, so it gets
    /// its own variant; the rest stays opaque.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ApiError::EmailTaken;
            }
        }
        ApiError::Database(err)
    }
}
