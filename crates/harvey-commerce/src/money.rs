//! Money type for representing prices.
//!
//! Amounts are held in the currency's minor unit (pesewas for the cedi) so
//! that price comparisons and sorting never see floating-point noise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price currency. The shop only trades in cedis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Ghanaian cedi.
    #[default]
    GHS,
}

impl Currency {
    /// Get the currency code (e.g., "GHS").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GHS => "GHS",
        }
    }

    /// Get the currency symbol (e.g., "₵").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GHS => "\u{20b5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::GHS => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a cedi amount from pesewas.
    pub const fn cedis(pesewas: i64) -> Self {
        Self::new(pesewas, Currency::GHS)
    }

    /// Format the amount the way shoppers see it on the storefront:
    /// no trailing zeros after the decimal point ("₵450", "₵125.5").
    pub fn display_compact(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.compact_amount())
    }

    /// Compact amount without symbol (e.g., "999.99").
    pub fn compact_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let major = abs / divisor as u64;
        let minor = abs % divisor as u64;

        if minor == 0 {
            return format!("{}{}", sign, major);
        }

        let digits = format!("{:0width$}", minor, width = places as usize);
        format!("{}{}.{}", sign, major, digits.trim_end_matches('0'))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_compact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_compact() {
        assert_eq!(Money::cedis(45000).display_compact(), "\u{20b5}450");
        assert_eq!(Money::cedis(12550).display_compact(), "\u{20b5}125.5");
        assert_eq!(Money::cedis(99999).display_compact(), "\u{20b5}999.99");
        assert_eq!(Money::cedis(5).compact_amount(), "0.05");
        assert_eq!(Money::cedis(-250).compact_amount(), "-2.5");
    }

    #[test]
    fn test_cedi_metadata() {
        assert_eq!(Money::cedis(100).currency, Currency::GHS);
        assert_eq!(Currency::GHS.to_string(), "GHS");
        assert_eq!(Money::cedis(45000).to_string(), "\u{20b5}450");
    }
}
