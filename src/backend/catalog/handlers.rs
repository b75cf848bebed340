//! Catalog HTTP Handlers
//!
//! Stateless axum handlers over the catalog tables. Each one is a straight
//! translation of the request into a query from [`super::db`]; failures
//! bubble out as [`ApiError`] and become JSON error responses.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::backend::catalog::db;
use crate::backend::error::ApiError;
use crate::shared::{Ingredient, Product};

/// Query string for `GET /api/products/search`. A missing `query` means
/// "match everything" (still capped at the search limit).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// `GET /api/ingredients` - every ingredient, storage order.
pub async fn list_ingredients(
    State(db): State<SqlitePool>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let ingredients = db::list_ingredients(&db).await?;
    Ok(Json(ingredients))
}

/// `GET /api/products` - the whole catalog with variants, storage order.
pub async fn list_products(
    State(db): State<SqlitePool>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = db::list_products(&db).await?;
    Ok(Json(products))
}

/// `GET /api/products/search?query=` - case-insensitive name search,
/// at most [`db::MAX_SEARCH_RESULTS`] hits.
pub async fn search_products(
    State(db): State<SqlitePool>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    tracing::debug!(query = %params.query, "product search");
    let products = db::search_products(&db, &params.query).await?;
    Ok(Json(products))
}
