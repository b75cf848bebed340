//! Storefront API Client
//!
//! Async reqwest client for the backend's catalog endpoints. Callers run it
//! from a worker thread (the egui frame loop never blocks on the network);
//! failures come back as [`ApiError`] and the UI decides what to keep.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::{Ingredient, Product};
use crate::storefront::config::Config;

/// Errors a catalog call can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Http { status: u16 },

    /// Connection, timeout, or response decoding failure.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client-side failure before the request could be made.
    #[error("internal client error: {0}")]
    Internal(String),
}

/// Client for the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Name search, at most 5 results. An empty query is still sent; the
    /// server treats it as "match everything".
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products/search", &[("query", query)])
            .await
    }

    /// The whole catalog with variants.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products", &[]).await
    }

    /// Every ingredient, for the filters panel.
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        self.get_json("/api/ingredients", &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.config.api_url(path);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}
