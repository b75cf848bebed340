//! Routes Module
//!
//! Router assembly (`router`) and the API route table (`api_routes`).

/// API route table
pub mod api_routes;

/// Router assembly with middleware layers
pub mod router;

pub use router::create_router;
