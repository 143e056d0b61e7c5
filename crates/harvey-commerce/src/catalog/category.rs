//! The fixed set of shop categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// A product category.
///
/// The set is closed. Icons, counts and descriptions are presentational and
/// are not checked against the products actually in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Fabrics,
    Dresses,
    #[serde(rename = "Two Pieces")]
    TwoPieces,
    Lingerie,
    Nightwears,
    Shirts,
    Tops,
    Bags,
    Shoes,
    #[serde(rename = "Shower Gel")]
    ShowerGel,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 10] = [
        Category::Fabrics,
        Category::Dresses,
        Category::TwoPieces,
        Category::Lingerie,
        Category::Nightwears,
        Category::Shirts,
        Category::Tops,
        Category::Bags,
        Category::Shoes,
        Category::ShowerGel,
    ];

    /// Display name, also used as the `category` query value.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Fabrics => "Fabrics",
            Category::Dresses => "Dresses",
            Category::TwoPieces => "Two Pieces",
            Category::Lingerie => "Lingerie",
            Category::Nightwears => "Nightwears",
            Category::Shirts => "Shirts",
            Category::Tops => "Tops",
            Category::Bags => "Bags",
            Category::Shoes => "Shoes",
            Category::ShowerGel => "Shower Gel",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Fabrics => "\u{1f9f5}",
            Category::Dresses => "\u{1f457}",
            Category::TwoPieces => "\u{1f454}",
            Category::Lingerie => "\u{1fa71}",
            Category::Nightwears => "\u{1f319}",
            Category::Shirts => "\u{1f455}",
            Category::Tops => "\u{1f45a}",
            Category::Bags => "\u{1f45c}",
            Category::Shoes => "\u{1f460}",
            Category::ShowerGel => "\u{1f9f4}",
        }
    }

    /// Advertised item count shown on category cards.
    pub fn nominal_count(&self) -> u32 {
        match self {
            Category::Fabrics => 45,
            Category::Dresses => 32,
            Category::TwoPieces => 28,
            Category::Lingerie => 24,
            Category::Nightwears => 18,
            Category::Shirts => 35,
            Category::Tops => 42,
            Category::Bags => 26,
            Category::Shoes => 38,
            Category::ShowerGel => 15,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Fabrics => "Premium quality fabrics for all your tailoring needs",
            Category::Dresses => "Elegant dresses for every occasion and style",
            Category::TwoPieces => "Coordinated sets for a polished, put-together look",
            Category::Lingerie => "Comfortable and stylish intimate wear",
            Category::Nightwears => "Comfortable sleepwear for a good night's rest",
            Category::Shirts => "Classic and modern shirts for every wardrobe",
            Category::Tops => "Trendy tops to complete your outfit",
            Category::Bags => "Stylish bags for every occasion and need",
            Category::Shoes => "Comfortable and fashionable footwear",
            Category::ShowerGel => "Luxurious body care products for daily use",
        }
    }

    /// Card image reference.
    pub fn image(&self) -> String {
        let position = Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default();
        format!("/s{}.jpg", position + 1)
    }

    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            Category::Fabrics => &["Cotton", "Silk", "Linen", "Wool", "Synthetic"],
            Category::Dresses => &["Evening", "Casual", "Formal", "Party", "Maxi"],
            Category::TwoPieces => &["Crop Top Sets", "Blazer Sets", "Skirt Sets", "Pant Sets"],
            Category::Lingerie => &["Bras", "Panties", "Sets", "Shapewear", "Sleepwear"],
            Category::Nightwears => &["Pajamas", "Nightgowns", "Robes", "Sleep Sets"],
            Category::Shirts => &["Casual", "Formal", "T-Shirts", "Polo", "Button-up"],
            Category::Tops => &["Blouses", "Tank Tops", "Crop Tops", "Sweaters"],
            Category::Bags => &["Handbags", "Backpacks", "Clutches", "Totes", "Crossbody"],
            Category::Shoes => &["Heels", "Flats", "Sneakers", "Boots", "Sandals"],
            Category::ShowerGel => &["Moisturizing", "Exfoliating", "Fragrant", "Organic"],
        }
    }

    /// Products page link pre-filtered to this category.
    pub fn products_href(&self) -> String {
        format!("/products?category={}", urlencoding::encode(self.name()))
    }

    /// Look up a category by its exact display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_set_of_ten() {
        assert_eq!(Category::ALL.len(), 10);
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert!(names.contains(&"Two Pieces"));
        assert!(names.contains(&"Shower Gel"));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Category::from_name("Bags"), Some(Category::Bags));
        assert_eq!(Category::from_name("Two Pieces"), Some(Category::TwoPieces));
        assert_eq!(Category::from_name("bags"), None);
        assert_eq!(Category::from_name(" Bags"), None);
        assert_eq!(Category::from_name("Hats"), None);
        assert!(matches!(
            "Hats".parse::<Category>(),
            Err(CommerceError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_products_href_encodes_spaces() {
        assert_eq!(
            Category::ShowerGel.products_href(),
            "/products?category=Shower%20Gel"
        );
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::TwoPieces).unwrap();
        assert_eq!(json, r#""Two Pieces""#);
        let back: Category = serde_json::from_str(r#""Shower Gel""#).unwrap();
        assert_eq!(back, Category::ShowerGel);
    }

    #[test]
    fn test_presentational_metadata() {
        assert_eq!(Category::Fabrics.nominal_count(), 45);
        assert_eq!(Category::Fabrics.image(), "/s1.jpg");
        assert_eq!(Category::ShowerGel.image(), "/s10.jpg");
        assert_eq!(Category::Bags.subcategories().len(), 5);
    }
}
