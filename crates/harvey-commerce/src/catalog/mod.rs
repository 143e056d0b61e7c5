//! Product catalog module.
//!
//! The catalog is a fixed, ordered sequence of products seeded at start-up.
//! There is no create, update or delete.

mod category;
mod product;
mod seed;

pub use category::Category;
pub use product::Product;

use crate::error::CommerceError;
use crate::ids::ProductId;

/// An immutable, ordered product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The full products-page catalog.
    pub fn full() -> Self {
        Self::new(seed::full_catalog())
    }

    /// The home-page featured selection.
    pub fn featured() -> Self {
        Self::new(seed::featured_catalog())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by ID, failing if it is not in the catalog.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Products listed under a category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_catalog_shape() {
        let catalog = Catalog::full();
        assert_eq!(catalog.len(), 8);

        let ids: HashSet<ProductId> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 8, "ids must be unique");

        for product in &catalog {
            assert!(product.price.amount_minor > 0);
            assert!((0.0..=5.0).contains(&product.rating));
        }
    }

    #[test]
    fn test_only_two_piece_set_is_out_of_stock() {
        let catalog = Catalog::full();
        let out: Vec<&str> = catalog
            .iter()
            .filter(|p| !p.in_stock)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(out, vec!["Designer Two-Piece Set"]);
    }

    #[test]
    fn test_featured_is_prefix_with_slide_images() {
        let featured = Catalog::featured();
        let full = Catalog::full();
        assert_eq!(featured.len(), 6);
        for (f, p) in featured.iter().zip(full.iter()) {
            assert_eq!(f.id, p.id);
            assert_eq!(f.price, p.price);
        }
        assert_eq!(featured.products()[0].image, "/s1.jpg");
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::full();
        assert_eq!(catalog.get(ProductId::new(4)).unwrap().name, "Luxury Handbag");
        assert_eq!(
            catalog.require(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(ProductId::new(99)))
        );
        assert_eq!(catalog.in_category(Category::Bags).count(), 1);
    }
}
