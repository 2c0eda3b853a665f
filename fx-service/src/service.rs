//! Conversion Application Service
//!
//! Orchestrates a conversion through the rate provider port.
//! Contains NO infrastructure logic - fetch a rate, apply it, return.

use fx_types::{Amount, Currency, ExchangeError, MoneyError, RateProvider};

/// Errors surfaced by a conversion.
///
/// The underlying kind stays matchable: a missing rate is still
/// `ConvertError::Rate(ExchangeError::MissingSourceRate(..))`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Rate(#[from] ExchangeError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the rate source is injected at compile time.
pub struct ConversionService<P: RateProvider> {
    rates: P,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a new conversion service with the given rate provider.
    pub fn new(rates: P) -> Self {
        Self { rates }
    }

    /// Returns a reference to the underlying rate provider.
    pub fn rates(&self) -> &P {
        &self.rates
    }

    /// Converts `amount` into `target` at today's rate.
    ///
    /// The result carries exactly `target`'s minor-unit precision; digits
    /// beyond it are truncated toward zero. Rate errors are returned as-is,
    /// with no retry.
    pub async fn convert(
        &self,
        amount: &Amount,
        target: &Currency,
    ) -> Result<Amount, ConvertError> {
        let rate = self.rates.fetch_rate(amount.currency(), target).await?;
        let converted = amount.apply_rate(&rate, target)?;

        tracing::info!(
            from = %amount,
            to = %converted,
            rate = %rate,
            "converted amount"
        );

        Ok(converted)
    }
}
