//! Query results.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// The derived product list for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    /// Matching products, in display order.
    pub items: Vec<Product>,
    /// Size of the catalog the query ran against.
    pub total: usize,
}

impl CatalogView {
    pub fn new(items: Vec<Product>, total: usize) -> Self {
        Self { items, total }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Results line shown above the grid.
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.items.len(), self.total)
    }

    pub fn empty_title() -> &'static str {
        "No products found"
    }

    pub fn empty_hint() -> &'static str {
        "Try adjusting your search or filter criteria"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let view = CatalogView::new(Vec::new(), 8);
        assert!(view.is_empty());
        assert_eq!(view.summary(), "Showing 0 of 8 products");
    }
}
