//! # FX Client
//!
//! HTTP adapter for the daily reference-rate feed. Implements the
//! [`RateProvider`] port by downloading the feed, classifying the response
//! status and crossing the requested pair through the parsed table.

use std::time::Duration;

use exchange_rates::{RateTable, parse_feed};
use fx_types::{Currency, ExchangeError, ExchangeRate, RateProvider};
use reqwest::Client;

/// Daily euro reference rates published by the European Central Bank.
pub const DEFAULT_RATES_URL: &str =
    "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";

// Errors like 400 or 404.
const CLIENT_ERROR_CLASS: u16 = 4;
// Errors like 500.
const SERVER_ERROR_CLASS: u16 = 5;

/// Reference-rate feed client.
pub struct EcbClient {
    url: String,
    http: Client,
}

impl EcbClient {
    /// Creates a new client reading the feed at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    /// Sets an overall deadline for each feed request.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ExchangeError> {
        self.http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExchangeError::CallingServer(e.to_string()))?;
        Ok(self)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads and parses today's rate table.
    pub async fn fetch_table(&self) -> Result<RateTable, ExchangeError> {
        tracing::debug!(url = %self.url, "fetching reference rates");

        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ExchangeError::CallingServer(e.to_string()))?;

        let status = resp.status().as_u16();
        if let Err(e) = check_status(status) {
            tracing::debug!(status, "reference-rate feed request failed");
            return Err(e);
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ExchangeError::CallingServer(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "received reference rates");
        parse_feed(&body)
    }
}

impl Default for EcbClient {
    fn default() -> Self {
        Self::new(DEFAULT_RATES_URL)
    }
}

#[async_trait::async_trait]
impl RateProvider for EcbClient {
    async fn fetch_rate(
        &self,
        source: &Currency,
        target: &Currency,
    ) -> Result<ExchangeRate, ExchangeError> {
        self.fetch_table().await?.cross_rate(source, target)
    }
}

/// Classifies an HTTP status by its class rather than by individual code.
pub fn check_status(status: u16) -> Result<(), ExchangeError> {
    match status {
        200 => Ok(()),
        s if s / 100 == CLIENT_ERROR_CLASS => Err(ExchangeError::ClientSide(s)),
        s if s / 100 == SERVER_ERROR_CLASS => Err(ExchangeError::ServerSide(s)),
        s => Err(ExchangeError::UnknownStatusCode(s)),
    }
}
