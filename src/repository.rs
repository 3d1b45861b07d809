//! In-memory product collection and chart selection.
//!
//! An explicit object owned by whatever holds the session context, not a
//! global. Server-side use creates one repository per session or tenant.
//! There is no interior locking: the intended usage is a single writer with
//! reads between mutations.

use crate::model::Product;
use std::collections::HashSet;

/// Holds the normalized products from the latest ingest plus the set of
/// product ids currently selected for aggregation.
#[derive(Debug, Clone, Default)]
pub struct ProductRepository {
    products: Vec<Product>,
    selection: HashSet<String>,
}

impl ProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection. A fresh normalization pass supersedes
    /// prior data; there are no merge semantics. The selection is left as-is:
    /// ids that no longer resolve to a product become inert.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Replaces the selection wholesale. Ids are not checked against the
    /// collection; unknown ids contribute nothing during aggregation.
    pub fn set_selection(&mut self, ids: HashSet<String>) {
        self.selection = ids;
    }

    /// Selects every product currently in the collection.
    pub fn select_all(&mut self) {
        self.selection = self
            .products
            .iter()
            .map(|product| product.id().to_string())
            .collect();
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selection(&self) -> &HashSet<String> {
        &self.selection
    }

    /// The selected products, in the collection's insertion order.
    pub fn selected_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| self.selection.contains(product.id()))
            .cloned()
            .collect()
    }
}
