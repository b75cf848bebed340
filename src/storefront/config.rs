//! Storefront Configuration
//!
//! Client-side settings read from the environment. The only knob is the
//! backend base URL.

/// Default backend URL matching the server's default port.
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let api_url =
            std::env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a specific backend, bypassing the environment.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Base URL of the backend.
    pub fn server_url(&self) -> &str {
        &self.api_url
    }

    /// Full URL for an API path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}
