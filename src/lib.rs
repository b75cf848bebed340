//! Pizzetta - Pizza Storefront
//!
//! A small pizza-ordering storefront split into three modules:
//!
//! - **`shared`** - serde wire types travelling over the JSON API
//! - **`backend`** - axum HTTP server over a SQLite catalog
//!   (binary `pizzetta-server`)
//! - **`storefront`** - egui/eframe desktop client: catalog browsing with
//!   scroll-synced category highlighting and a debounced product search
//!   (binary `storefront`)
//!
//! The backend exposes a handful of stateless endpoints (list ingredients,
//! list/create users, list products, search products). The client's only
//! interesting state is the search box controller and the active-category
//! tracker; everything else is straight rendering.

/// Shared wire types
pub mod shared;

/// Backend server-side code
pub mod backend;

/// egui desktop storefront client
pub mod storefront;
