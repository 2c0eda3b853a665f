//! Error types for money values.

/// Errors raised while building or combining money values.
///
/// Every kind is a value; none of them are used for normal control flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("Invalid currency code: {0:?} is not 3 uppercase letters")]
    InvalidCurrencyCode(String),

    #[error("Unable to convert the decimal: {0}")]
    InvalidDecimal(String),

    #[error("Quantity over 10^12 is too large: {0}")]
    TooLarge(String),

    #[error("Value {value} is too precise for {currency}")]
    TooPrecise { value: String, currency: String },

    #[error("Cannot decrease the precision of a decimal from {from} to {to}")]
    PrecisionDecrease { from: u8, to: u8 },

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Division by zero")]
    DivisionByZero,
}
