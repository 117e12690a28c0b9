//! # Domain Types
//!
//! Core domain types for the Tienda storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                      │
//! │  │    Product      │          │    LineItem     │                      │
//! │  │  ─────────────  │  add to  │  ─────────────  │                      │
//! │  │  sku (key)      │──cart───►│  sku (key)      │                      │
//! │  │  name           │          │  product fields │                      │
//! │  │  brand          │          │  (frozen copy)  │                      │
//! │  │  price_sale     │          │  qty            │                      │
//! │  │  image_url ...  │          │  added_at       │                      │
//! │  └─────────────────┘          └─────────────────┘                      │
//! │                                                                         │
//! │  Identity is the business key: SKU. There is no second, synthetic id.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! `Product` deserializes rows of `catalogo.json` as produced by the catalog
//! pipeline. Prices arrive as peso numbers and are converted to integer
//! centavos at this boundary (see [`crate::money::pesos_opt`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{self, Money};

// =============================================================================
// Product
// =============================================================================

/// A catalog entry available for sale.
///
/// Every field except `sku` and `name` is optional on the wire: tone lists and
/// promo pages produce sparse rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - business identifier and merge key.
    pub sku: String,

    /// Display name shown in the storefront.
    pub name: String,

    /// Brand line: "Natura", "Avon", "Casa & Estilo".
    #[serde(default)]
    pub brand: Option<String>,

    /// Category, assigned by pipeline rules after scraping.
    #[serde(default)]
    pub category: Option<String>,

    /// Reseller points awarded on sale.
    #[serde(default)]
    pub points: Option<i64>,

    /// Reseller purchase price (what the consultant pays).
    #[serde(default, with = "money::pesos_opt")]
    #[ts(as = "Option<Money>")]
    pub price_purchase: Option<Money>,

    /// Public sale price. Missing prices count as zero in cart math.
    #[serde(default, with = "money::pesos_opt")]
    #[ts(as = "Option<Money>")]
    pub price_sale: Option<Money>,

    /// Product image URL.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Catalog cycle this entry was scraped from (e.g. "2025-13").
    #[serde(default)]
    pub cycle: Option<String>,
}

// =============================================================================
// Line Item
// =============================================================================

/// An entry in the shopping cart.
///
/// ## Design Notes
/// - Every product field is copied by name at add time (frozen snapshot).
///   The cart displays consistent data even if the catalog reloads with new
///   prices after the item was added.
/// - `qty` invariant: always >= 1. Decrement clamps at 1; the only way out of
///   the cart is removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// SKU at time of adding (frozen, merge key).
    pub sku: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Brand at time of adding (frozen).
    pub brand: Option<String>,

    /// Category at time of adding (frozen).
    pub category: Option<String>,

    /// Reseller points at time of adding (frozen).
    pub points: Option<i64>,

    /// Reseller purchase price at time of adding (frozen).
    #[serde(default, with = "money::pesos_opt")]
    #[ts(as = "Option<Money>")]
    pub price_purchase: Option<Money>,

    /// Sale price at time of adding (frozen).
    /// Missing prices count as zero in line totals.
    #[serde(default, with = "money::pesos_opt")]
    #[ts(as = "Option<Money>")]
    pub price_sale: Option<Money>,

    /// Image URL at time of adding (frozen).
    pub image_url: Option<String>,

    /// Quantity in cart (>= 1).
    pub qty: i64,

    /// When this item was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a cart entry from a product and quantity.
    ///
    /// Explicit field-by-field copy: the set of fields a cart entry carries is
    /// defined here, not by whatever the incoming product happens to contain.
    pub fn from_product(product: &Product, qty: i64) -> Self {
        LineItem {
            sku: product.sku.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            points: product.points,
            price_purchase: product.price_purchase,
            price_sale: product.price_sale,
            image_url: product.image_url.clone(),
            qty,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total: `qty × (price_sale or zero)`.
    pub fn line_total(&self) -> Money {
        self.price_sale
            .unwrap_or_else(Money::zero)
            .multiply_quantity(self.qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            sku: "93559".to_string(),
            name: "Perfume Kaiak Clásico".to_string(),
            brand: Some("Natura".to_string()),
            category: Some("Perfumería".to_string()),
            points: Some(30),
            price_purchase: Some(Money::from_centavos(22400)),
            price_sale: Some(Money::from_centavos(29900)),
            image_url: Some("https://example.com/kaiak.jpg".to_string()),
            cycle: Some("2025-13".to_string()),
        }
    }

    #[test]
    fn test_product_wire_parse() {
        let json = r#"{
            "brand": "Natura",
            "sku": "93559",
            "name": "Perfume Kaiak Clásico",
            "points": 30,
            "price_purchase": 224.0,
            "price_sale": 299.0,
            "image_url": "https://example.com/kaiak.jpg",
            "cycle": "2025-13",
            "category": null
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sku, "93559");
        assert_eq!(product.price_sale, Some(Money::from_centavos(29900)));
        assert_eq!(product.category, None);
    }

    #[test]
    fn test_product_sparse_row() {
        // Tone-list rows carry only sku and name
        let product: Product =
            serde_json::from_str(r#"{"sku": "11920", "name": "Tono Rojo Intenso"}"#).unwrap();
        assert_eq!(product.price_sale, None);
        assert_eq!(product.brand, None);
    }

    #[test]
    fn test_line_item_freezes_product_fields() {
        let product = sample_product();
        let item = LineItem::from_product(&product, 2);

        assert_eq!(item.sku, product.sku);
        assert_eq!(item.name, product.name);
        assert_eq!(item.brand, product.brand);
        assert_eq!(item.price_sale, product.price_sale);
        assert_eq!(item.qty, 2);
    }

    #[test]
    fn test_line_total() {
        let product = sample_product();
        let item = LineItem::from_product(&product, 3);
        assert_eq!(item.line_total(), Money::from_centavos(89700));
    }

    #[test]
    fn test_line_total_missing_price_counts_as_zero() {
        let mut product = sample_product();
        product.price_sale = None;
        let item = LineItem::from_product(&product, 5);
        assert!(item.line_total().is_zero());
    }
}
