//! # Exchange Rates
//!
//! Rate tables quoted against a single base currency, and decoding of the
//! daily reference-rate feed that fills them.
//!
//! A [`RateTable`] answers any pairwise query by crossing through its base:
//! with rates `BASE -> USD` and `BASE -> CAD`, the `USD -> CAD` rate is
//! `(BASE -> CAD) / (BASE -> USD)`. No pair table is ever stored.
//!
//! # Example
//! ```
//! use exchange_rates::parse_feed;
//! use fx_types::Currency;
//!
//! let feed = r#"<Envelope><Cube><Cube>
//!     <Cube currency="USD" rate="2"/>
//!     <Cube currency="GBP" rate="0.5"/>
//! </Cube></Cube></Envelope>"#;
//!
//! let table = parse_feed(feed).unwrap();
//! let usd = Currency::parse("USD").unwrap();
//! let gbp = Currency::parse("GBP").unwrap();
//! assert_eq!(table.cross_rate(&usd, &gbp).unwrap().to_string(), "0.25");
//! ```

pub mod feed;
pub mod table;

pub use feed::{BASE_CURRENCY, parse_feed};
pub use table::{CROSS_RATE_SCALE, RateTable};
