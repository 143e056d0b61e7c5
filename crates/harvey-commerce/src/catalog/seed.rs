//! Hardcoded catalog seeds.

use crate::catalog::{Category, Product};
use crate::money::Money;

/// The complete products-page catalog.
pub fn full_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Elegant Evening Dress", Category::Dresses, Money::cedis(45000))
            .with_image(placeholder("Elegant+Evening+Dress"))
            .with_rating(4.8, 124)
            .with_description(
                "Stunning evening dress perfect for special occasions. Made with premium fabric and elegant design.",
            ),
        Product::new(2, "Premium Cotton Fabric", Category::Fabrics, Money::cedis(12550))
            .with_image(placeholder("Premium+Cotton+Fabric"))
            .with_rating(4.6, 89)
            .with_description(
                "High-quality cotton fabric perfect for custom tailoring. Soft, durable, and available in multiple colors.",
            ),
        Product::new(3, "Designer Two-Piece Set", Category::TwoPieces, Money::cedis(65000))
            .with_image(placeholder("Designer+Two+Piece+Set"))
            .with_rating(4.9, 156)
            .with_description(
                "Stylish two-piece set featuring a crop top and matching skirt. Perfect for modern fashion enthusiasts.",
            )
            .out_of_stock(),
        Product::new(4, "Luxury Handbag", Category::Bags, Money::cedis(99999))
            .with_image(placeholder("Luxury+Handbag"))
            .with_rating(4.7, 203)
            .with_description(
                "Premium leather handbag with spacious compartments and elegant design. Perfect for daily use.",
            ),
        Product::new(5, "Comfortable Nightwear", Category::Nightwears, Money::cedis(23000))
            .with_image(placeholder("Comfortable+Nightwear"))
            .with_rating(4.5, 78)
            .with_description(
                "Soft and comfortable nightwear made from breathable fabric. Perfect for a good night's sleep.",
            ),
        Product::new(6, "Stylish Sneakers", Category::Shoes, Money::cedis(40000))
            .with_image(placeholder("Stylish+Sneakers"))
            .with_rating(4.8, 167)
            .with_description(
                "Modern sneakers with superior comfort and style. Perfect for casual and athletic wear.",
            ),
        Product::new(7, "Silk Blouse", Category::Tops, Money::cedis(18000))
            .with_image(placeholder("Silk+Blouse"))
            .with_rating(4.7, 92)
            .with_description(
                "Luxurious silk blouse with elegant draping. Perfect for professional and casual wear.",
            ),
        Product::new(8, "Formal Shirt", Category::Shirts, Money::cedis(12000))
            .with_image(placeholder("Formal+Shirt"))
            .with_rating(4.4, 65)
            .with_description(
                "Classic formal shirt with modern fit. Essential for professional wardrobe.",
            ),
    ]
}

/// The home-page selection: the first six products with slide photography.
pub fn featured_catalog() -> Vec<Product> {
    full_catalog()
        .into_iter()
        .take(6)
        .enumerate()
        .map(|(i, product)| product.with_image(format!("/s{}.jpg", i + 1)))
        .collect()
}

fn placeholder(text: &str) -> String {
    format!("/placeholder.svg?height=300&width=250&text={}", text)
}
