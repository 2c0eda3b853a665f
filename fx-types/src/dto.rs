//! Data Transfer Objects (DTOs) for conversion output.

use serde::Serialize;

use crate::domain::Amount;

/// Result of a single conversion, as printed by `fx --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResponse {
    pub source: Amount,
    pub target: Amount,
}

impl ConversionResponse {
    pub fn new(source: Amount, target: Amount) -> Self {
        Self { source, target }
    }
}
