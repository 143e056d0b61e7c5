//! Storefront configuration.
//!
//! Defaults reproduce the live storefront, so an empty config file (or no
//! file at all) is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::order::OrderChannel;

/// Top-level storefront configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Shop identity.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Order hand-off settings.
    #[serde(default)]
    pub order: OrderConfig,

    /// Hero carousel settings.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Published contact details.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl StorefrontConfig {
    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.carousel.interval_ms == 0 {
            return Err(CommerceError::InvalidConfig(
                "carousel.interval_ms must be greater than zero".to_string(),
            ));
        }

        if self.order.phone.is_empty() || !self.order.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::InvalidConfig(format!(
                "order.phone must be digits only in international format, got {:?}",
                self.order.phone
            )));
        }

        if !self.order.base_url.starts_with("https://") {
            return Err(CommerceError::InvalidConfig(format!(
                "order.base_url must be an https URL, got {:?}",
                self.order.base_url
            )));
        }

        Ok(())
    }

    /// Channel used to build order deep links.
    pub fn order_channel(&self) -> OrderChannel {
        OrderChannel::new(self.order.base_url.clone(), self.order.phone.clone())
    }

    /// Auto-advance period for the hero carousel.
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel.interval_ms)
    }
}

/// Shop identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Display name.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// Hero tagline.
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            tagline: default_tagline(),
        }
    }
}

fn default_shop_name() -> String {
    "Shop with Harvey".to_string()
}

fn default_tagline() -> String {
    "Discover premium fashion, fabrics, and lifestyle products in our futuristic online store"
        .to_string()
}

/// Order hand-off settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Chat service base URL.
    #[serde(default = "default_order_base_url")]
    pub base_url: String,

    /// Number that receives order messages, digits only.
    #[serde(default = "default_order_phone")]
    pub phone: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            base_url: default_order_base_url(),
            phone: default_order_phone(),
        }
    }
}

fn default_order_base_url() -> String {
    "https://wa.me".to_string()
}

fn default_order_phone() -> String {
    "233592006905".to_string()
}

/// Hero carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Milliseconds between automatic slide changes.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Whether the carousel starts in auto-play.
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            autoplay: true,
        }
    }
}

fn default_interval_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

/// Published contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_email")]
    pub email: String,

    #[serde(default = "default_contact_phone")]
    pub phone: String,

    #[serde(default = "default_contact_address")]
    pub address: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_contact_email(),
            phone: default_contact_phone(),
            address: default_contact_address(),
        }
    }
}

fn default_contact_email() -> String {
    "hello@shopwithharvey.com".to_string()
}

fn default_contact_phone() -> String {
    "+233 24 123 4567".to_string()
}

fn default_contact_address() -> String {
    "123 Fashion Street, Accra, Ghana".to_string()
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level ("trace" through "error").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "json" or "human".
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.carousel_interval(), Duration::from_secs(5));
        assert_eq!(config.order.phone, "233592006905");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"carousel": {"interval_ms": 8000}}"#).unwrap();
        assert_eq!(config.carousel.interval_ms, 8000);
        assert!(config.carousel.autoplay);
        assert_eq!(config.shop.name, "Shop with Harvey");
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = StorefrontConfig::default();
        config.carousel.interval_ms = 0;
        assert!(matches!(config.validate(), Err(CommerceError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_formatted_phone() {
        let mut config = StorefrontConfig::default();
        config.order.phone = "+233 59 200 6905".to_string();
        assert!(matches!(config.validate(), Err(CommerceError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"shop": {"name": "Harvey", "currency": "USD"}}"#).unwrap();
        assert_eq!(config.shop.name, "Harvey");
        assert!(config.validate().is_ok());
    }
}
