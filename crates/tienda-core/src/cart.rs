//! # Cart Reducer
//!
//! Pure cart state and mutation logic. No I/O, no locking, no notification;
//! the reactive container in `tienda-store` wraps this type.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Storefront Action         Operation                State Change        │
//! │  ─────────────────         ─────────                ────────────        │
//! │                                                                         │
//! │  Click "Agregar" ────────► add_product() ─────────► merge by SKU or    │
//! │                                                     append line item    │
//! │  Click "+" ──────────────► increase_qty() ────────► qty + 1            │
//! │                                                                         │
//! │  Click "−" ──────────────► decrease_qty() ────────► max(1, qty − 1)    │
//! │                                                                         │
//! │  Click trash icon ───────► remove() ──────────────► entry deleted      │
//! │                                                                         │
//! │  Click "Vaciar" ─────────► clear() ───────────────► items = []         │
//! │                                                                         │
//! │  NOTE: qty never reaches 0 by decrement. Removal is the only exit.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{LineItem, Product};
use crate::validation::{validate_quantity, validate_sku};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by `sku` (adding the same product merges quantities)
/// - Insertion order is preserved; updating an entry never moves it
/// - Every `qty` is between 1 and `MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` entries
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Line items, first-add order.
    items: Vec<LineItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, merging by SKU.
    ///
    /// ## Behavior
    /// - Product already in cart: its entry gains `qty`; every other stored
    ///   field stays frozen as it was at first add. The incoming product's
    ///   non-quantity fields are NOT used to overwrite the entry.
    /// - Product not in cart: appended as a new frozen line item.
    ///
    /// ## Errors
    /// - Empty/blank SKU (merge identity must never be undefined)
    /// - Non-positive quantity, or merged quantity above `MAX_ITEM_QUANTITY`
    /// - Cart already holds `MAX_CART_ITEMS` entries
    pub fn add_product(&mut self, product: &Product, qty: i64) -> CoreResult<()> {
        validate_sku(&product.sku)?;
        validate_quantity(qty)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.sku == product.sku) {
            let new_qty = item.qty + qty;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 1,
                    max: MAX_ITEM_QUANTITY,
                }
                .into());
            }
            item.qty = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(LineItem::from_product(product, qty));
        Ok(())
    }

    /// Increments the quantity of the entry with `sku` by 1, saturating at
    /// `MAX_ITEM_QUANTITY`.
    ///
    /// Returns `false` (sequence unchanged) if no entry matches.
    pub fn increase_qty(&mut self, sku: &str) -> bool {
        match self.items.iter_mut().find(|i| i.sku == sku) {
            Some(item) => {
                item.qty = (item.qty + 1).min(MAX_ITEM_QUANTITY);
                true
            }
            None => false,
        }
    }

    /// Decrements the quantity of the entry with `sku` by 1, clamped so qty
    /// never goes below 1.
    ///
    /// Returns `false` (sequence unchanged) if no entry matches.
    pub fn decrease_qty(&mut self, sku: &str) -> bool {
        match self.items.iter_mut().find(|i| i.sku == sku) {
            Some(item) => {
                item.qty = (item.qty - 1).max(1);
                true
            }
            None => false,
        }
    }

    /// Removes the entry with `sku`, preserving the order of the rest.
    ///
    /// Returns `false` if no entry matches.
    pub fn remove(&mut self, sku: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.sku != sku);
        self.items.len() < initial_len
    }

    /// Clears all items, unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    // =========================================================================
    // Reads & Derived Aggregates
    // =========================================================================

    /// Line items in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total price: Σ `qty × (price_sale or 0)`.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total quantity across all entries: Σ `qty`.
    pub fn count(&self) -> i64 {
        self.items.iter().map(|i| i.qty).sum()
    }

    /// Number of unique entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(sku: &str, price_centavos: i64) -> Product {
        Product {
            sku: sku.to_string(),
            name: format!("Producto {}", sku),
            brand: Some("Natura".to_string()),
            category: None,
            points: Some(10),
            price_purchase: None,
            price_sale: Some(Money::from_centavos(price_centavos)),
            image_url: None,
            cycle: None,
        }
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 1000), 1).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].sku, "A");
        assert_eq!(cart.items()[0].qty, 1);
        assert_eq!(cart.total(), Money::from_centavos(1000));
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_add_same_sku_merges() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 1000), 1).unwrap();
        cart.add_product(&test_product("A", 1000), 2).unwrap();

        assert_eq!(cart.len(), 1); // still one entry, not two
        assert_eq!(cart.items()[0].qty, 3);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_merge_keeps_stored_fields() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 1000), 1).unwrap();

        // Same SKU arrives again with a different price and name; the stored
        // entry keeps its frozen fields and only gains quantity.
        let mut changed = test_product("A", 9999);
        changed.name = "Renamed".to_string();
        cart.add_product(&changed, 1).unwrap();

        let item = &cart.items()[0];
        assert_eq!(item.qty, 2);
        assert_eq!(item.name, "Producto A");
        assert_eq!(item.price_sale, Some(Money::from_centavos(1000)));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 100), 1).unwrap();
        cart.add_product(&test_product("B", 200), 1).unwrap();
        cart.add_product(&test_product("C", 300), 1).unwrap();
        // Updating A must not move it
        cart.add_product(&test_product("A", 100), 1).unwrap();

        let order: Vec<&str> = cart.items().iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_rejects_blank_sku() {
        let mut cart = Cart::new();
        let err = cart.add_product(&test_product("  ", 100), 1).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_qty() {
        let mut cart = Cart::new();
        assert!(cart.add_product(&test_product("A", 100), 0).is_err());
        assert!(cart.add_product(&test_product("A", 100), -3).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_merge_above_cap() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 100), MAX_ITEM_QUANTITY)
            .unwrap();
        assert!(cart.add_product(&test_product("A", 100), 1).is_err());
        assert_eq!(cart.items()[0].qty, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_increase_qty() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 100), 1).unwrap();

        assert!(cart.increase_qty("A"));
        assert_eq!(cart.items()[0].qty, 2);
    }

    #[test]
    fn test_increase_qty_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 100), 1).unwrap();
        let before = cart.items().to_vec();

        assert!(!cart.increase_qty("NOPE"));
        assert_eq!(cart.items(), &before[..]);
    }

    #[test]
    fn test_decrease_qty_clamps_at_one() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 100), 1).unwrap();

        assert!(cart.decrease_qty("A"));
        assert_eq!(cart.items()[0].qty, 1); // clamped, never 0 or negative

        cart.increase_qty("A");
        cart.decrease_qty("A");
        assert_eq!(cart.items()[0].qty, 1);
    }

    #[test]
    fn test_decrease_qty_absent_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.decrease_qty("NOPE"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_exact_entry_keeps_order() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 100), 1).unwrap();
        cart.add_product(&test_product("B", 200), 1).unwrap();
        cart.add_product(&test_product("C", 300), 1).unwrap();

        assert!(cart.remove("B"));

        let order: Vec<&str> = cart.items().iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(order, vec!["A", "C"]);
        assert!(!cart.remove("B")); // already gone
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 100), 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.count(), 0);

        cart.clear(); // second clear changes nothing observable
        assert!(cart.is_empty());
    }

    #[test]
    fn test_missing_price_counts_as_zero_in_total() {
        let mut cart = Cart::new();
        let mut unpriced = test_product("T1", 0);
        unpriced.price_sale = None;

        cart.add_product(&unpriced, 4).unwrap();
        cart.add_product(&test_product("A", 250), 2).unwrap();

        assert_eq!(cart.total(), Money::from_centavos(500));
        assert_eq!(cart.count(), 6);
    }

    /// Derived aggregates must always equal a fresh recomputation from the
    /// current items, whatever sequence of operations ran before.
    #[test]
    fn test_aggregates_never_drift() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("A", 1000), 1).unwrap();
        cart.add_product(&test_product("B", 550), 3).unwrap();
        cart.increase_qty("A");
        cart.decrease_qty("B");
        cart.add_product(&test_product("A", 1000), 2).unwrap();
        cart.remove("B");
        cart.increase_qty("ZZZ"); // no-op
        cart.add_product(&test_product("C", 75), 2).unwrap();

        let expected_total: Money = cart.items().iter().map(LineItem::line_total).sum();
        let expected_count: i64 = cart.items().iter().map(|i| i.qty).sum();
        assert_eq!(cart.total(), expected_total);
        assert_eq!(cart.count(), expected_count);
    }
}
