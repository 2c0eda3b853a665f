//! ISO 4217 currency codes and their minor-unit scale.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::MoneyError;

/// Currencies quoted in whole units only.
const ZERO_DECIMAL_CODES: &[&str] = &["IRR"];

/// Currencies quoted to one decimal place.
const ONE_DECIMAL_CODES: &[&str] = &["CNY", "VND"];

/// Currencies quoted to three decimal places.
const THREE_DECIMAL_CODES: &[&str] = &["BHD", "IQD", "KWD", "LYD", "OMR", "TND"];

/// Scale used by every currency not listed above.
const DEFAULT_SCALE: u8 = 2;

/// A currency identified by its three-letter ISO 4217 code.
///
/// The scale (number of minor-unit digits) is derived from the code when the
/// currency is parsed and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    code: String,
    scale: u8,
}

impl Currency {
    /// Parses a code made of exactly three uppercase ASCII letters.
    pub fn parse(code: &str) -> Result<Self, MoneyError> {
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(MoneyError::InvalidCurrencyCode(code.to_string()));
        }

        Ok(Self {
            code: code.to_string(),
            scale: scale_for(code),
        })
    }

    /// Returns the ISO code, e.g. `"USD"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the number of decimal places for this currency.
    pub fn scale(&self) -> u8 {
        self.scale
    }
}

fn scale_for(code: &str) -> u8 {
    if ZERO_DECIMAL_CODES.contains(&code) {
        0
    } else if ONE_DECIMAL_CODES.contains(&code) {
        1
    } else if THREE_DECIMAL_CODES.contains(&code) {
        3
    } else {
        DEFAULT_SCALE
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}
