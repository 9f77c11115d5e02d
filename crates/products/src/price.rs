//! Price points.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ValueObject};

/// Price points of a product, keyed by currency code (e.g. `"USD"`).
pub type Prices = BTreeMap<String, Price>;

/// A monetary amount stored as an integer quotient to avoid rounding errors.
///
/// The real amount is `value / multiplier`. The multiplier is usually a small
/// power of ten, e.g. `1.99` is `Price { value: 199, multiplier: 100 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub value: i64,
    pub multiplier: i64,
}

impl ValueObject for Price {}

impl Price {
    pub fn new(value: i64, multiplier: i64) -> Self {
        Self { value, multiplier }
    }

    /// Checks `value >= 0` and `multiplier >= 1`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.value < 0 {
            return Err(DomainError::validation("Price Value must be non-negative!"));
        }
        if self.multiplier < 1 {
            return Err(DomainError::validation("Price Multiplier must be positive!"));
        }
        Ok(())
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.value, self.multiplier)
    }
}

/// Validate every price of a price mapping, reporting the first failure.
pub fn validate_all(prices: &Prices) -> DomainResult<()> {
    prices.values().try_for_each(Price::validate)
}
