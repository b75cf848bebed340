//! User Data Structures
//!
//! The user record and its creation payload. The create endpoint persists
//! the payload verbatim; the storage layer's unique email constraint is the
//! only validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user id, generated by the database
    pub id: i64,
    /// Full display name
    pub full_name: String,
    /// Email address (unique)
    pub email: String,
    /// Stored as supplied; hashing is out of scope for this storefront
    pub password: String,
    /// Role tag, defaults to `USER`
    pub role: String,
    /// When the email was verified, if ever
    pub verified: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Payload accepted by `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
}
