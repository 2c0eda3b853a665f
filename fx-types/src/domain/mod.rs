//! Domain models for currency conversion.

pub mod amount;
pub mod currency;
pub mod decimal;
pub mod rate;

#[cfg(test)]
mod props;

pub use amount::Amount;
pub use currency::Currency;
pub use decimal::{Decimal, MAX_INTEGER_DIGITS, pow10};
pub use rate::ExchangeRate;
