//! Exchange rates between two currencies.

use serde::Serialize;
use std::fmt;

use super::Decimal;

/// Units of the target currency obtained for one unit of the source currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    /// The rate between a currency and itself.
    pub const IDENTITY: ExchangeRate = ExchangeRate(Decimal::ONE);

    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn as_decimal(&self) -> &Decimal {
        &self.0
    }
}

impl From<Decimal> for ExchangeRate {
    fn from(rate: Decimal) -> Self {
        Self(rate)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
