//! # tienda-core: Pure Business Logic for the Tienda Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tienda Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront Frontend                          │   │
//! │  │    Catálogo UI ──► Filtros UI ──► Carrito UI                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ store subscriptions                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tienda-store                                 │   │
//! │  │    CartStore, FiltersStore, ProductsStore, CatalogClient       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tienda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  LineItem │  │  formato  │  │  reducer  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart reducer: merge-by-SKU mutations and derived aggregates
//! - [`error`] - Domain error types
//! - [`validation`] - Cart input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tienda_core::cart::Cart;
//! use tienda_core::money::{format_price, Money};
//! use tienda_core::types::Product;
//!
//! let product = Product {
//!     sku: "93559".to_string(),
//!     name: "Perfume Kaiak Clásico".to_string(),
//!     brand: Some("Natura".to_string()),
//!     category: None,
//!     points: Some(30),
//!     price_purchase: None,
//!     price_sale: Some(Money::from_centavos(29900)),
//!     image_url: None,
//!     cycle: None,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_product(&product, 2).unwrap();
//!
//! assert_eq!(cart.count(), 2);
//! assert_eq!(format_price(Some(cart.total())), "$598.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tienda_core::Money` instead of
// `use tienda_core::money::Money`

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_price, Money};
pub use types::{LineItem, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum entries allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts; a reseller order sheet never approaches this.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single entry in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
