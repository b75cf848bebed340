//! Shared Module
//!
//! Types shared between the storefront client and the backend. Everything
//! here is a plain serde-serializable value that travels over the JSON API.

/// Catalog types: products, variants, ingredients
pub mod catalog;

/// User record and creation payload
pub mod user;

pub use catalog::{Ingredient, Product, ProductVariant};
pub use user::{CreateUser, User};
