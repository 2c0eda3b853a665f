//! # FX Service
//!
//! Application service for currency conversion.
//!
//! The service is generic over `P: RateProvider`, allowing the HTTP feed
//! adapter, an in-memory table, or a test double to be injected.

pub mod service;


pub use service::{ConversionService, ConvertError};
