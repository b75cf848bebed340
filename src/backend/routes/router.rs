//! Router Configuration
//!
//! Assembles the axum router: API routes, a CORS layer wide enough for a
//! browser storefront, request tracing, and a plain 404 fallback.

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let router = configure_api_routes(Router::new());

    router
        .fallback(|| async { "404 Not Found" })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
