//! Decoding of the daily reference-rate feed.
//!
//! The feed is an XML envelope whose nested `Cube` elements carry one entry
//! per currency:
//!
//! ```xml
//! <gesmes:Envelope>
//!   <Cube>
//!     <Cube time="2024-01-05">
//!       <Cube currency="USD" rate="1.0921"/>
//!       <Cube currency="JPY" rate="158.08"/>
//!     </Cube>
//!   </Cube>
//! </gesmes:Envelope>
//! ```
//!
//! Every rate is quoted against the euro.

use chrono::NaiveDate;
use fx_types::{Decimal, ExchangeError};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

use crate::RateTable;

/// The currency every feed rate is quoted against.
pub const BASE_CURRENCY: &str = "EUR";

const ROOT_ELEMENT: &str = "Envelope";

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(rename = "Cube", default)]
    cube: OuterCube,
}

#[derive(Debug, Default, Deserialize)]
struct OuterCube {
    #[serde(rename = "Cube", default)]
    days: Vec<DailyCube>,
}

#[derive(Debug, Deserialize)]
struct DailyCube {
    #[serde(rename = "@time")]
    time: Option<String>,
    #[serde(rename = "Cube", default)]
    rates: Vec<CurrencyRate>,
}

#[derive(Debug, Deserialize)]
struct CurrencyRate {
    #[serde(rename = "@currency")]
    currency: String,
    #[serde(rename = "@rate")]
    rate: String,
}

impl CurrencyRate {
    fn into_entry(self) -> Result<(String, Decimal), ExchangeError> {
        let rate = Decimal::parse(&self.rate).map_err(|e| {
            ExchangeError::UnexpectedFormat(format!("rate for {}: {e}", self.currency))
        })?;

        if rate.is_zero() || rate.is_negative() {
            return Err(ExchangeError::UnexpectedFormat(format!(
                "rate for {} must be positive, got {rate}",
                self.currency
            )));
        }

        Ok((self.currency, rate))
    }
}

/// Local name of the document's first element, namespace prefix dropped.
fn root_element(body: &str) -> Result<String, ExchangeError> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(ExchangeError::UnexpectedFormat(
                    "document has no root element".into(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(ExchangeError::UnexpectedFormat(e.to_string())),
        }
    }
}

/// Parses a feed document into a [`RateTable`] anchored at [`BASE_CURRENCY`].
///
/// Only the first daily block is used when the document holds several.
/// A document without any entries is valid and yields a table holding only
/// the base currency, but the root element must still be an `Envelope`.
pub fn parse_feed(body: &str) -> Result<RateTable, ExchangeError> {
    let root = root_element(body)?;
    if root != ROOT_ELEMENT {
        return Err(ExchangeError::UnexpectedFormat(format!(
            "expected <{ROOT_ELEMENT}> root element, found <{root}>"
        )));
    }

    let envelope: Envelope = quick_xml::de::from_str(body)
        .map_err(|e| ExchangeError::UnexpectedFormat(e.to_string()))?;

    let Some(day) = envelope.cube.days.into_iter().next() else {
        tracing::debug!("feed holds no daily rates");
        return Ok(RateTable::new(BASE_CURRENCY, Vec::<(String, Decimal)>::new()));
    };

    let entries = day
        .rates
        .into_iter()
        .map(CurrencyRate::into_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = RateTable::new(BASE_CURRENCY, entries);

    match day.time.as_deref().map(|t| NaiveDate::parse_from_str(t, "%Y-%m-%d")) {
        Some(Ok(date)) => table = table.with_date(date),
        Some(Err(e)) => tracing::warn!("ignoring unreadable feed date: {}", e),
        None => {}
    }

    tracing::debug!(
        currencies = table.len(),
        date = ?table.date(),
        "parsed reference-rate feed"
    );

    Ok(table)
}
