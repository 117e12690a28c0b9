//! Catalog boundary error types.
//!
//! The catalog is the only external collaborator, so this is the only error
//! type in the store layer. Cart errors come from `tienda-core`.

use thiserror::Error;

/// Errors from the catalog HTTP boundary.
///
/// These never reach storefront consumers: `CatalogClient::load_or_empty`
/// logs them and falls back to an empty product list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport or decode failure (connection refused, malformed JSON, ...).
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The collaborator answered with a non-2xx status.
    #[error("catalog responded with status {status}")]
    Status { status: reqwest::StatusCode },
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
