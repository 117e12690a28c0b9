//! # Catalog Client
//!
//! HTTP boundary to the catalog collaborator.
//!
//! ## Boundary Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Fetch Flow                                   │
//! │                                                                         │
//! │  GET {base_url}/data/catalogo.json                                      │
//! │       │                                                                 │
//! │       ├── 2xx + JSON array ──► Vec<Product>                            │
//! │       │                                                                 │
//! │       ├── non-2xx ──────────► CatalogError::Status                     │
//! │       │                                                                 │
//! │       └── transport/decode ─► CatalogError::Request                    │
//! │                                                                         │
//! │  load_or_empty(): any error is logged and becomes an EMPTY list.       │
//! │  Consumers never see a catalog failure, only an empty catalog.         │
//! │  No retry.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::{debug, error};

use crate::config::StoreConfig;
use crate::error::{CatalogError, CatalogResult};
use tienda_core::Product;

/// Client for the catalog document.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    catalog_url: String,
}

impl CatalogClient {
    /// Creates a client from store configuration.
    pub fn new(config: &StoreConfig) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(CatalogClient {
            http,
            catalog_url: config.catalog_url(),
        })
    }

    /// The URL this client fetches.
    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// Fetches and decodes the catalog.
    ///
    /// ## Errors
    /// - `CatalogError::Status` on a non-2xx response
    /// - `CatalogError::Request` on transport or decode failure
    pub async fn fetch(&self) -> CatalogResult<Vec<Product>> {
        debug!(url = %self.catalog_url, "fetching catalog");

        let response = self.http.get(&self.catalog_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status });
        }

        let products = response.json::<Vec<Product>>().await?;
        debug!(count = products.len(), "catalog fetched");
        Ok(products)
    }

    /// Fetches the catalog, falling back to an empty list on any error.
    ///
    /// This is the page-load behavior: the error is logged and swallowed
    /// here; the storefront renders an empty catalog rather than failing.
    pub async fn load_or_empty(&self) -> Vec<Product> {
        match self.fetch().await {
            Ok(products) => products,
            Err(e) => {
                error!(url = %self.catalog_url, error = %e, "failed to load catalog, serving empty list");
                Vec::new()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
