//! Rate snapshots anchored at a single base currency.

use std::collections::HashMap;

use chrono::NaiveDate;
use fx_types::{Currency, Decimal, ExchangeError, ExchangeRate, RateProvider};

/// Fractional digits kept when dividing two base-relative rates.
pub const CROSS_RATE_SCALE: u8 = 10;

/// A snapshot of exchange rates, all quoted against one base currency.
///
/// Each entry is the number of units of that currency one unit of the base
/// buys. The base currency itself is always present with rate `1`, so any
/// pair of listed currencies can be crossed through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    base: String,
    date: Option<NaiveDate>,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Builds a table from `(code, rate)` entries quoted against `base`.
    ///
    /// The base's own identity entry is injected regardless of the input.
    pub fn new<I, S>(base: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut rates: HashMap<String, Decimal> = entries
            .into_iter()
            .map(|(code, rate)| (code.into(), rate))
            .collect();
        rates.insert(base.to_string(), Decimal::ONE);

        Self {
            base: base.to_string(),
            date: None,
            rates,
        }
    }

    /// Records the day the snapshot was published.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns the base-relative rate for `code`, if listed.
    pub fn rate(&self, code: &str) -> Option<&Decimal> {
        self.rates.get(code)
    }

    /// Number of listed currencies, base included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Units of `target` bought by one unit of `source`.
    ///
    /// Converting a currency into itself needs no lookup and yields exactly
    /// one, even for currencies the table does not list.
    pub fn cross_rate(
        &self,
        source: &Currency,
        target: &Currency,
    ) -> Result<ExchangeRate, ExchangeError> {
        if source == target {
            return Ok(ExchangeRate::IDENTITY);
        }

        let source_factor = self
            .rate(source.code())
            .ok_or_else(|| ExchangeError::MissingSourceRate(source.code().to_string()))?;

        let target_factor = self
            .rate(target.code())
            .ok_or_else(|| ExchangeError::MissingTargetRate(target.code().to_string()))?;

        // (BASE -> target) / (BASE -> source) == source -> target
        let rate = target_factor.divide(source_factor, CROSS_RATE_SCALE)?;
        Ok(ExchangeRate::new(rate))
    }
}

#[async_trait::async_trait]
impl RateProvider for RateTable {
    async fn fetch_rate(
        &self,
        source: &Currency,
        target: &Currency,
    ) -> Result<ExchangeRate, ExchangeError> {
        self.cross_rate(source, target)
    }
}
