//! # Store Configuration
//!
//! Runtime configuration for the store layer, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIENDA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no locking is needed.

use serde::{Deserialize, Serialize};

/// Store layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Origin serving the storefront assets, including the catalog JSON.
    pub base_url: String,

    /// Path of the catalog document under `base_url`.
    pub catalog_path: String,

    /// Per-request timeout for catalog fetches, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Base URL: the local storefront dev server
    /// - Catalog path: `/data/catalogo.json`
    /// - Timeout: 10 seconds
    fn default() -> Self {
        StoreConfig {
            base_url: "http://localhost:5173".to_string(),
            catalog_path: "/data/catalogo.json".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TIENDA_BASE_URL`: Override the storefront origin
    /// - `TIENDA_CATALOG_PATH`: Override the catalog document path
    /// - `TIENDA_REQUEST_TIMEOUT_SECS`: Override the fetch timeout
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(base_url) = std::env::var("TIENDA_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(catalog_path) = std::env::var("TIENDA_CATALOG_PATH") {
            config.catalog_path = catalog_path;
        }

        if let Ok(timeout_str) = std::env::var("TIENDA_REQUEST_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                config.request_timeout_secs = timeout;
            }
        }

        config
    }

    /// Full URL of the catalog document.
    pub fn catalog_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.catalog_path
        )
    }
}
