//! Order intent.
//!
//! Orders are not placed here. A product selection is turned into a
//! prefilled chat message and a deep link to the shop's WhatsApp number.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Where order messages are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChannel {
    /// Chat service base URL, without trailing slash.
    pub base_url: String,
    /// Recipient number, digits only.
    pub phone: String,
}

impl OrderChannel {
    pub fn new(base_url: impl Into<String>, phone: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            phone: phone.into(),
        }
    }

    /// Deep link carrying `message` as the prefilled text.
    pub fn link(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url,
            self.phone,
            urlencoding::encode(message)
        )
    }
}

impl Default for OrderChannel {
    fn default() -> Self {
        Self::new("https://wa.me", "233592006905")
    }
}

/// The prefilled message for ordering `product`.
pub fn order_message(product: &Product) -> String {
    format!(
        "Hi! I'm interested in ordering the {} ({}) for {}. Please let me know about availability and delivery details.",
        product.name,
        product.category,
        product.price.display_compact()
    )
}

/// A ready-to-open order hand-off for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub product_id: ProductId,
    /// Plain-text message.
    pub message: String,
    /// Deep link with the message URL-encoded.
    pub url: String,
}

impl OrderIntent {
    /// Build the hand-off. Out-of-stock products cannot be ordered.
    pub fn for_product(product: &Product, channel: &OrderChannel) -> Result<Self, CommerceError> {
        if !product.is_orderable() {
            return Err(CommerceError::OutOfStock(product.name.clone()));
        }

        let message = order_message(product);
        let url = channel.link(&message);
        Ok(Self {
            product_id: product.id,
            message,
            url,
        })
    }
}

/// Feature bullets shown in the product detail view.
pub const PRODUCT_FEATURES: [&str; 3] = [
    "Premium quality materials",
    "Fast and secure delivery",
    "30-day return policy",
];

/// Help line under the order button.
pub const ORDER_HELP: &str =
    "Contact our customer service team for size guidance, product questions, or order assistance.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_order_message() {
        let catalog = Catalog::full();
        let fabric = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(
            order_message(fabric),
            "Hi! I'm interested in ordering the Premium Cotton Fabric (Fabrics) for \u{20b5}125.5. Please let me know about availability and delivery details."
        );
    }

    #[test]
    fn test_order_link() {
        let catalog = Catalog::full();
        let dress = catalog.get(ProductId::new(1)).unwrap();
        let intent = OrderIntent::for_product(dress, &OrderChannel::default()).unwrap();

        assert_eq!(intent.product_id, dress.id);
        assert!(intent
            .url
            .starts_with("https://wa.me/233592006905?text=Hi%21%20I%27m%20interested"));
        assert!(intent.url.contains("Elegant%20Evening%20Dress%20%28Dresses%29"));
        assert!(intent.url.contains("%E2%82%B5450."));
        assert!(!intent.url.contains(' '));
    }

    #[test]
    fn test_out_of_stock_has_no_link() {
        let catalog = Catalog::full();
        let set = catalog.get(ProductId::new(3)).unwrap();
        assert_eq!(
            OrderIntent::for_product(set, &OrderChannel::default()),
            Err(CommerceError::OutOfStock("Designer Two-Piece Set".to_string()))
        );
    }

    #[test]
    fn test_channel_trims_trailing_slash() {
        let channel = OrderChannel::new("https://wa.me/", "233200000000");
        assert_eq!(channel.link("hi"), "https://wa.me/233200000000?text=hi");
    }
}
