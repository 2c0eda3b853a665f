//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate sources.
//! Implementations can be HTTP clients, in-memory tables, test doubles, etc.

use crate::domain::{Currency, ExchangeRate};
use crate::error::MoneyError;

/// Error type for exchange rate operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("Exchange rate not found for source currency {0}")]
    MissingSourceRate(String),

    #[error("Exchange rate not found for target currency {0}")]
    MissingTargetRate(String),

    #[error("Response body was not in the expected format: {0}")]
    UnexpectedFormat(String),

    #[error("Error calling server: {0}")]
    CallingServer(String),

    #[error("Client-side error occurred, {0}")]
    ClientSide(u16),

    #[error("Server-side error occurred, {0}")]
    ServerSide(u16),

    #[error("Unknown status code, {0}")]
    UnknownStatusCode(u16),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Returns how many units of `target` one unit of `source` buys.
    async fn fetch_rate(
        &self,
        source: &Currency,
        target: &Currency,
    ) -> Result<ExchangeRate, ExchangeError>;
}
