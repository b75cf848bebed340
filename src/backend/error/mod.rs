//! Backend Error Module
//!
//! Error types for the HTTP handlers and their conversion to responses.
//!
//! - `types` - the [`ApiError`] enum and sqlx classification
//! - `conversion` - axum `IntoResponse` implementation

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
