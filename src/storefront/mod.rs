//! Storefront Client Module
//!
//! The egui/eframe desktop storefront:
//!
//! - **`config`** - backend URL from the environment
//! - **`api`** - reqwest client for the catalog endpoints
//! - **`catalog`** - static category table
//! - **`search`** - debounce timer and search box controller
//! - **`category`** - active-category tracker and section observers
//! - **`ui`** - immediate-mode rendering
//! - **`app`** - the eframe application tying it together

pub mod api;
pub mod app;
pub mod catalog;
pub mod category;
pub mod config;
pub mod search;
pub mod ui;

pub use api::{ApiClient, ApiError};
pub use app::{StorefrontApp, View};
pub use category::{CategoryTracker, SectionObserver};
pub use config::Config;
pub use search::{SearchController, SearchRequest};
