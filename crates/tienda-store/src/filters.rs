//! # Filters Store
//!
//! Catalog browsing state: brand, category, and free-text search.
//!
//! Three independent pieces of state, each its own watch cell. A typed
//! [`Selection`] replaces the stringly "all" sentinel: `All` matches every
//! product, `Only(value)` matches an exact brand/category.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use tienda_core::Product;

// =============================================================================
// Selection
// =============================================================================

/// A single-axis filter choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    /// No restriction on this axis.
    #[default]
    All,
    /// Restrict to one exact value (e.g. brand "Natura").
    Only(String),
}

impl Selection {
    /// Checks a product field against this selection.
    ///
    /// A product missing the field (`None`) only matches `All`.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

// =============================================================================
// Filters Snapshot
// =============================================================================

/// An immutable snapshot of all three filter axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub brand: Selection,
    pub category: Selection,
    pub query: String,
}

impl Filters {
    /// Checks whether a product passes every axis.
    ///
    /// The query is a case-insensitive substring match over name and SKU;
    /// a blank query matches everything.
    pub fn matches(&self, product: &Product) -> bool {
        self.brand.matches(product.brand.as_deref())
            && self.category.matches(product.category.as_deref())
            && self.query_matches(product)
    }

    /// Filters a product slice, preserving catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    fn query_matches(&self, product: &Product) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&query)
            || product.sku.to_lowercase().contains(&query)
    }
}

// =============================================================================
// Filters Store
// =============================================================================

/// Reactive container for the three filter axes.
#[derive(Debug)]
pub struct FiltersStore {
    brand_tx: watch::Sender<Selection>,
    category_tx: watch::Sender<Selection>,
    query_tx: watch::Sender<String>,
}

impl FiltersStore {
    /// Creates a store with no restrictions and a blank query.
    pub fn new() -> Self {
        let (brand_tx, _) = watch::channel(Selection::All);
        let (category_tx, _) = watch::channel(Selection::All);
        let (query_tx, _) = watch::channel(String::new());
        FiltersStore {
            brand_tx,
            category_tx,
            query_tx,
        }
    }

    /// Sets the brand axis.
    pub fn set_brand(&self, brand: Selection) {
        self.brand_tx.send_replace(brand);
    }

    /// Sets the category axis.
    pub fn set_category(&self, category: Selection) {
        self.category_tx.send_replace(category);
    }

    /// Sets the free-text query.
    pub fn set_query(&self, query: impl Into<String>) {
        self.query_tx.send_replace(query.into());
    }

    /// Resets all three axes to their defaults.
    pub fn reset(&self) {
        self.set_brand(Selection::All);
        self.set_category(Selection::All);
        self.set_query(String::new());
    }

    /// Current brand selection.
    pub fn brand(&self) -> Selection {
        self.brand_tx.borrow().clone()
    }

    /// Current category selection.
    pub fn category(&self) -> Selection {
        self.category_tx.borrow().clone()
    }

    /// Current query text.
    pub fn query(&self) -> String {
        self.query_tx.borrow().clone()
    }

    /// Immutable snapshot of all three axes.
    pub fn snapshot(&self) -> Filters {
        Filters {
            brand: self.brand(),
            category: self.category(),
            query: self.query(),
        }
    }

    /// Subscribes to brand changes.
    pub fn subscribe_brand(&self) -> watch::Receiver<Selection> {
        self.brand_tx.subscribe()
    }

    /// Subscribes to category changes.
    pub fn subscribe_category(&self) -> watch::Receiver<Selection> {
        self.category_tx.subscribe()
    }

    /// Subscribes to query changes.
    pub fn subscribe_query(&self) -> watch::Receiver<String> {
        self.query_tx.subscribe()
    }
}

impl Default for FiltersStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str, name: &str, brand: Option<&str>, category: Option<&str>) -> Product {
        Product {
            sku: sku.to_string(),
            name: name.to_string(),
            brand: brand.map(str::to_string),
            category: category.map(str::to_string),
            points: None,
            price_purchase: None,
            price_sale: None,
            image_url: None,
            cycle: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("93559", "Perfume Kaiak Clásico", Some("Natura"), Some("Perfumería")),
            product("11920", "Labial Rojo Intenso", Some("Avon"), Some("Maquillaje")),
            product("70001", "Difusor de Aromas", Some("Casa & Estilo"), None),
        ]
    }

    #[test]
    fn test_defaults_match_everything() {
        let filters = Filters::default();
        let catalog = catalog();
        assert_eq!(filters.apply(&catalog).len(), 3);
    }

    #[test]
    fn test_brand_selection() {
        let filters = Filters {
            brand: Selection::Only("Natura".to_string()),
            ..Filters::default()
        };
        let catalog = catalog();
        let matched = filters.apply(&catalog);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].sku, "93559");
    }

    #[test]
    fn test_missing_field_only_matches_all() {
        let filters = Filters {
            category: Selection::Only("Perfumería".to_string()),
            ..Filters::default()
        };
        let catalog = catalog();
        // The Difusor has no category, so it drops out
        let matched = filters.apply(&catalog);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].sku, "93559");
    }

    #[test]
    fn test_query_is_case_insensitive_over_name_and_sku() {
        let catalog = catalog();

        let by_name = Filters {
            query: "  kaiak ".to_string(),
            ..Filters::default()
        };
        assert_eq!(by_name.apply(&catalog)[0].sku, "93559");

        let by_sku = Filters {
            query: "1192".to_string(),
            ..Filters::default()
        };
        assert_eq!(by_sku.apply(&catalog)[0].sku, "11920");
    }

    #[test]
    fn test_axes_combine() {
        let filters = Filters {
            brand: Selection::Only("Avon".to_string()),
            query: "perfume".to_string(),
            ..Filters::default()
        };
        assert!(filters.apply(&catalog()).is_empty());
    }

    #[tokio::test]
    async fn test_store_notifies_per_axis() {
        let store = FiltersStore::new();
        let mut brand_rx = store.subscribe_brand();
        let query_rx = store.subscribe_query();

        store.set_brand(Selection::Only("Natura".to_string()));
        brand_rx.changed().await.unwrap();
        assert_eq!(*brand_rx.borrow(), Selection::Only("Natura".to_string()));

        // The query axis is independent: untouched by the brand change
        assert!(!query_rx.has_changed().unwrap());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = FiltersStore::new();
        store.set_brand(Selection::Only("Avon".to_string()));
        store.set_category(Selection::Only("Maquillaje".to_string()));
        store.set_query("labial");

        store.reset();

        assert_eq!(store.snapshot(), Filters::default());
    }
}
