//! # Catalog Check
//!
//! Operational smoke check for the catalog boundary: fetches the catalog the
//! way the storefront's page load does (empty-list fallback, no retry) and
//! reports what came back.
//!
//! ## Usage
//! ```bash
//! # Check the default dev origin
//! cargo run -p tienda-store --bin catalog-check
//!
//! # Check a deployed origin, show 10 sample entries
//! TIENDA_BASE_URL=https://tienda.example.mx \
//!     cargo run -p tienda-store --bin catalog-check -- --limit 10
//! ```

use std::env;
use std::process;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tienda_core::format_price;
use tienda_store::{CatalogClient, ProductsStore, StoreConfig};

#[tokio::main]
async fn main() {
    init_tracing();

    let limit = parse_limit();
    let config = StoreConfig::from_env();
    info!(url = %config.catalog_url(), "catalog check starting");

    let client = match CatalogClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build catalog client");
            process::exit(1);
        }
    };

    let products = ProductsStore::new();
    products.load(&client).await;

    let list = products.products();
    if list.is_empty() {
        warn!("catalog is empty (fetch failed or no entries)");
    } else {
        info!(count = list.len(), "catalog loaded");
    }

    for product in list.iter().take(limit) {
        info!(
            sku = %product.sku,
            name = %product.name,
            brand = product.brand.as_deref().unwrap_or("-"),
            price = %format_price(product.price_sale),
            "sample entry"
        );
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default: INFO level, override with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tienda_store=debug,tienda_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Parses `--limit N` from the command line (default: 5 sample entries).
fn parse_limit() -> usize {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--limit") {
        if let Some(limit) = args.get(pos + 1).and_then(|v| v.parse().ok()) {
            return limit;
        }
    }
    5
}
