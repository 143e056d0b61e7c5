//! Product records.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;

/// A product in the catalog.
///
/// Records are seeded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category the product is listed under.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Image reference.
    pub image: String,
    /// Average rating in [0, 5].
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Listing description.
    pub description: String,
    /// Whether the product can currently be ordered.
    pub in_stock: bool,
}

impl Product {
    /// Create an in-stock product with no image, rating or description.
    pub fn new(id: u32, name: impl Into<String>, category: Category, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category,
            price,
            image: "/placeholder.svg".to_string(),
            rating: 0.0,
            review_count: 0,
            description: String::new(),
            in_stock: true,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.review_count = review_count;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Whether an order hand-off may be offered.
    pub fn is_orderable(&self) -> bool {
        self.in_stock
    }

    /// Price as printed on cards ("₵125.5").
    pub fn price_label(&self) -> String {
        self.price.display_compact()
    }

    /// Rating with one decimal ("4.8").
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Review count as printed on list rows ("124 reviews").
    pub fn reviews_label(&self) -> String {
        match self.review_count {
            1 => "1 review".to_string(),
            n => format!("{} reviews", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new(9, "Linen Wrap", Category::Fabrics, Money::cedis(8000))
            .with_rating(4.24, 1)
            .out_of_stock();

        assert_eq!(product.id, ProductId::new(9));
        assert!(!product.is_orderable());
        assert_eq!(product.price_label(), "\u{20b5}80");
        assert_eq!(product.rating_label(), "4.2");
        assert_eq!(product.reviews_label(), "1 review");
    }

    #[test]
    fn test_rating_is_clamped() {
        let product =
            Product::new(1, "Too Good", Category::Tops, Money::cedis(100)).with_rating(7.5, 3);
        assert_eq!(product.rating, 5.0);
    }
}
