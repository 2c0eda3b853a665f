//! Port traits (interfaces for adapters).
//!
//! The conversion service depends on these traits, not on concrete
//! rate sources.

mod exchange;

pub use exchange::{ExchangeError, RateProvider};
