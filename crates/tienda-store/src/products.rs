//! # Products Store
//!
//! Watch-backed catalog list: one fetch-and-assign, independent of the cart.

use tokio::sync::watch;
use tracing::debug;

use crate::catalog::CatalogClient;
use tienda_core::Product;

/// Reactive container for the loaded catalog.
///
/// Subscribers get the current product list immediately and every replacement
/// afterwards. The list is only ever replaced wholesale; there are no partial
/// updates.
#[derive(Debug)]
pub struct ProductsStore {
    products_tx: watch::Sender<Vec<Product>>,
}

impl ProductsStore {
    /// Creates an empty products store.
    pub fn new() -> Self {
        let (products_tx, _) = watch::channel(Vec::new());
        ProductsStore { products_tx }
    }

    /// Loads the catalog through the client and assigns the result.
    ///
    /// Fetch errors were already swallowed at the catalog boundary; a failed
    /// load assigns the empty list.
    pub async fn load(&self, client: &CatalogClient) {
        let products = client.load_or_empty().await;
        debug!(count = products.len(), "products loaded");
        self.set(products);
    }

    /// Replaces the product list and notifies subscribers.
    pub fn set(&self, products: Vec<Product>) {
        self.products_tx.send_replace(products);
    }

    /// Current product list (owned snapshot).
    pub fn products(&self) -> Vec<Product> {
        self.products_tx.borrow().clone()
    }

    /// Subscribes to product list changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.products_tx.subscribe()
    }
}

impl Default for ProductsStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
