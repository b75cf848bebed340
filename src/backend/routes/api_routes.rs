//! API Route Handlers
//!
//! The storefront API surface:
//!
//! - `GET  /api/ingredients` - all ingredients
//! - `GET  /api/products` - the catalog with variants
//! - `GET  /api/products/search?query=` - name search, capped at 5
//! - `GET  /api/users` - all users
//! - `POST /api/users` - create a user

use axum::routing::get;
use axum::Router;

use crate::backend::catalog::handlers::{list_ingredients, list_products, search_products};
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{create_user, list_users};

/// Add the API routes to a router.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/ingredients", get(list_ingredients))
        .route("/api/products", get(list_products))
        .route("/api/products/search", get(search_products))
        .route("/api/users", get(list_users).post(create_user))
}
