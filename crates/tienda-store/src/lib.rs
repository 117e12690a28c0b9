//! # tienda-store: Reactive Stores for the Tienda Storefront
//!
//! The stateful layer of the storefront: explicitly owned state containers
//! with a watch-channel subscription surface, plus the catalog HTTP boundary.
//!
//! ## Module Organization
//! ```text
//! tienda_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── cart.rs         ◄─── CartStore: reactive cart + derived views
//! ├── filters.rs      ◄─── FiltersStore: brand/category/query axes
//! ├── products.rs     ◄─── ProductsStore: loaded catalog list
//! ├── catalog.rs      ◄─── CatalogClient: GET catalogo.json
//! ├── config.rs       ◄─── StoreConfig: defaults + TIENDA_* env overrides
//! ├── error.rs        ◄─── CatalogError
//! └── bin/
//!     └── catalog-check.rs ◄─── operational smoke check
//! ```
//!
//! ## Subscription Surface
//! Every store hands out `tokio::sync::watch` receivers: the current value is
//! available immediately through `borrow`, and `changed().await` wakes for
//! every subsequent publication until the receiver is dropped. Published
//! values are owned snapshots; mutating the store never touches a value a
//! subscriber already holds.
//!
//! ## Independence
//! The three stores share no state. In particular the catalog fetch has no
//! ordering interaction with the cart: a cart mutation during a slow fetch
//! is observed exactly as if the fetch did not exist.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod products;

pub use cart::CartStore;
pub use catalog::CatalogClient;
pub use config::StoreConfig;
pub use error::{CatalogError, CatalogResult};
pub use filters::{Filters, FiltersStore, Selection};
pub use products::ProductsStore;
