//! # FX Types
//!
//! Money types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! arithmetic rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Exact money types (Decimal, Currency, Amount, ExchangeRate)
//! - `ports/` - Trait definitions that rate sources must implement
//! - `dto/` - Output shapes for the command line
//! - `error/` - Arithmetic and validation error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Amount, Currency, Decimal, ExchangeRate};
pub use dto::ConversionResponse;
pub use error::MoneyError;
pub use ports::{ExchangeError, RateProvider};
