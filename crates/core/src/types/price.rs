//! Type-safe price representation using decimal arithmetic.
//!
//! Prices in the catalog are currency-agnostic amounts in rupees. Decimal
//! arithmetic avoids the rounding drift a float total would accumulate over
//! a large cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error constructing a [`Price`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The amount was negative.
    #[error("price must be non-negative, got {0}")]
    Negative(Decimal),
}

/// A non-negative, currency-agnostic price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a quantity, producing a line subtotal.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rs. {:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            Price::new(dec!(-1)),
            Err(PriceError::Negative(dec!(-1)))
        );
    }

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::new(dec!(50)).expect("valid price");
        assert_eq!(price.to_string(), "Rs. 50.00");
    }

    #[test]
    fn test_times_quantity() {
        let price = Price::new(dec!(10.50)).expect("valid price");
        assert_eq!(price.times(3), dec!(31.50));
    }
}
