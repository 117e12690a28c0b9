//! # Cart Store
//!
//! Reactive container around the pure cart reducer.
//!
//! ## Thread Safety
//! The cart is wrapped in a `Mutex` because the storefront runtime may drive
//! store calls from more than one task; one mutation at a time, publication
//! inside the lock, so notifications observe states in mutation order.
//!
//! ## Reactive Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Data Flow                                 │
//! │                                                                         │
//! │  mutation (add/increase/decrease/remove/clear)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Mutex<Cart> ── reducer runs ──► eager recomputation                    │
//! │       │                                                                 │
//! │       ├── items_tx ──► watch::Receiver<Vec<LineItem>>  (snapshot)      │
//! │       ├── total_tx ──► watch::Receiver<Money>          (Σ qty×price)   │
//! │       └── count_tx ──► watch::Receiver<i64>            (Σ qty)         │
//! │                                                                         │
//! │  Subscribers read the CURRENT value immediately (`borrow`) and are     │
//! │  woken for every subsequent publication (`changed`).                   │
//! │                                                                         │
//! │  Every published items value is a fresh clone: snapshots handed out    │
//! │  earlier are owned values that later mutations cannot touch.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use tokio::sync::watch;
use tracing::debug;

use tienda_core::{Cart, CoreResult, LineItem, Money, Product};

/// Reactive shopping cart store.
///
/// Owns the cart state; consumers receive it injected (or behind an `Arc`),
/// never through a global.
#[derive(Debug)]
pub struct CartStore {
    cart: Mutex<Cart>,
    items_tx: watch::Sender<Vec<LineItem>>,
    total_tx: watch::Sender<Money>,
    count_tx: watch::Sender<i64>,
}

impl CartStore {
    /// Creates a store over an empty cart.
    pub fn new() -> Self {
        let (items_tx, _) = watch::channel(Vec::new());
        let (total_tx, _) = watch::channel(Money::zero());
        let (count_tx, _) = watch::channel(0);
        CartStore {
            cart: Mutex::new(Cart::new()),
            items_tx,
            total_tx,
            count_tx,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of a product (the storefront's "Agregar" button).
    pub fn add(&self, product: &Product) -> CoreResult<()> {
        self.add_qty(product, 1)
    }

    /// Adds `qty` units of a product, merging by SKU.
    ///
    /// On a validation error the cart is untouched and nothing is published.
    pub fn add_qty(&self, product: &Product, qty: i64) -> CoreResult<()> {
        debug!(sku = %product.sku, qty, "cart add");
        let mut cart = self.lock();
        cart.add_product(product, qty)?;
        self.publish(&cart);
        Ok(())
    }

    /// Increments the quantity for `sku` by 1. No-op on an unknown SKU.
    pub fn increase_qty(&self, sku: &str) -> bool {
        debug!(sku, "cart increase");
        let mut cart = self.lock();
        let changed = cart.increase_qty(sku);
        self.publish(&cart);
        changed
    }

    /// Decrements the quantity for `sku` by 1, floor-clamped at 1.
    /// No-op on an unknown SKU.
    pub fn decrease_qty(&self, sku: &str) -> bool {
        debug!(sku, "cart decrease");
        let mut cart = self.lock();
        let changed = cart.decrease_qty(sku);
        self.publish(&cart);
        changed
    }

    /// Removes the entry for `sku`. No-op on an unknown SKU.
    pub fn remove(&self, sku: &str) -> bool {
        debug!(sku, "cart remove");
        let mut cart = self.lock();
        let removed = cart.remove(sku);
        self.publish(&cart);
        removed
    }

    /// Empties the cart unconditionally. Idempotent.
    pub fn clear(&self) {
        debug!("cart clear");
        let mut cart = self.lock();
        cart.clear();
        self.publish(&cart);
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current line items (owned snapshot, first-add order).
    pub fn items(&self) -> Vec<LineItem> {
        self.items_tx.borrow().clone()
    }

    /// Current total price: Σ `qty × (price_sale or 0)`.
    pub fn total(&self) -> Money {
        *self.total_tx.borrow()
    }

    /// Current total quantity: Σ `qty`.
    pub fn count(&self) -> i64 {
        *self.count_tx.borrow()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Subscribes to the line item sequence.
    pub fn subscribe_items(&self) -> watch::Receiver<Vec<LineItem>> {
        self.items_tx.subscribe()
    }

    /// Subscribes to the derived total price.
    pub fn subscribe_total(&self) -> watch::Receiver<Money> {
        self.total_tx.subscribe()
    }

    /// Subscribes to the derived item count.
    pub fn subscribe_count(&self) -> watch::Receiver<i64> {
        self.count_tx.subscribe()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock(&self) -> std::sync::MutexGuard<'_, Cart> {
        self.cart.lock().expect("Cart mutex poisoned")
    }

    /// Eagerly recomputes both derived views and publishes a fresh items
    /// snapshot. Runs on every mutation, inside the lock.
    fn publish(&self, cart: &Cart) {
        self.items_tx.send_replace(cart.items().to_vec());
        self.total_tx.send_replace(cart.total());
        self.count_tx.send_replace(cart.count());
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
