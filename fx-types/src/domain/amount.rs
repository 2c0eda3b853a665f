//! A quantity of money bound to its currency.

use serde::Serialize;
use std::fmt;

use super::{Currency, Decimal, ExchangeRate};
use crate::error::MoneyError;

/// Monetary value with embedded currency.
///
/// The value always carries exactly as many fractional digits as the
/// currency's minor unit: `12 USD` is held as `12.00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amount {
    value: Decimal,
    currency: Currency,
}

impl Amount {
    /// Creates a new Amount, padding `value` up to the currency's scale.
    ///
    /// A value with more fractional digits than the currency supports is
    /// rejected rather than truncated.
    pub fn new(value: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if value.scale() > currency.scale() {
            return Err(MoneyError::TooPrecise {
                value: value.to_string(),
                currency: currency.code().to_string(),
            });
        }

        let value = value.raise_scale(currency.scale())?;
        Ok(Self { value, currency })
    }

    pub fn value(&self) -> &Decimal {
        &self.value
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Converts this amount into `target` at the given rate.
    ///
    /// The product is exact; it is then truncated toward zero (or padded) to
    /// the target currency's scale. Truncation here is the only place a
    /// conversion gives up precision.
    pub fn apply_rate(&self, rate: &ExchangeRate, target: &Currency) -> Result<Self, MoneyError> {
        let converted = self
            .value
            .multiply(rate.as_decimal())?
            .fit_scale(target.scale())?;

        Ok(Self {
            value: converted,
            currency: target.clone(),
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(code: &str) -> Currency {
        Currency::parse(code).unwrap()
    }

    fn dec(text: &str) -> Decimal {
        Decimal::parse(text).unwrap()
    }

    #[test]
    fn test_equal_precision() {
        let amount = Amount::new(dec("123.45"), currency("USD")).unwrap();
        assert_eq!(amount.value().mantissa(), 12345);
        assert_eq!(amount.value().scale(), 2);
        assert_eq!(amount.currency().code(), "USD");
    }

    #[test]
    fn test_smaller_precision_is_padded() {
        let amount = Amount::new(dec("123"), currency("USD")).unwrap();
        assert_eq!(amount.value().mantissa(), 12300);
        assert_eq!(amount.value().scale(), 2);
        assert_eq!(amount.to_string(), "123.00 USD");
    }

    #[test]
    fn test_greater_precision_fails() {
        let result = Amount::new(dec("123.45"), currency("IRR"));
        assert!(matches!(result, Err(MoneyError::TooPrecise { .. })));

        let result = Amount::new(dec("1.005"), currency("USD"));
        assert!(matches!(result, Err(MoneyError::TooPrecise { .. })));
    }

    #[test]
    fn test_three_decimal_currency() {
        let amount = Amount::new(dec("1.5"), currency("KWD")).unwrap();
        assert_eq!(amount.to_string(), "1.500 KWD");
    }

    #[test]
    fn test_apply_identity_rate() {
        let amount = Amount::new(dec("123"), currency("USD")).unwrap();
        let converted = amount
            .apply_rate(&ExchangeRate::IDENTITY, &currency("TST"))
            .unwrap();
        assert_eq!(converted.value().mantissa(), 12300);
        assert_eq!(converted.to_string(), "123.00 TST");
    }

    #[test]
    fn test_apply_rate_truncates_to_target_scale() {
        let amount = Amount::new(dec("123.45"), currency("USD")).unwrap();
        let rate = ExchangeRate::new(dec("1.1111"));

        // 12345 × 11111 = 137165295 at scale 6, truncated to scale 2.
        let converted = amount.apply_rate(&rate, &currency("TST")).unwrap();
        assert_eq!(converted.value().mantissa(), 13716);
        assert_eq!(converted.value().scale(), 2);
        assert_eq!(converted.to_string(), "137.16 TST");

        let amount = Amount::new(dec("123"), currency("USD")).unwrap();
        let converted = amount.apply_rate(&rate, &currency("TST")).unwrap();
        assert_eq!(converted.to_string(), "136.66 TST");
    }

    #[test]
    fn test_apply_rate_pads_to_larger_target_scale() {
        let amount = Amount::new(dec("10"), currency("IRR")).unwrap();
        let converted = amount
            .apply_rate(&ExchangeRate::new(dec("0.5")), &currency("KWD"))
            .unwrap();
        assert_eq!(converted.to_string(), "5.000 KWD");
    }

    #[test]
    fn test_apply_rate_into_whole_unit_currency() {
        let amount = Amount::new(dec("99.99"), currency("USD")).unwrap();
        let converted = amount
            .apply_rate(&ExchangeRate::new(dec("2")), &currency("IRR"))
            .unwrap();
        assert_eq!(converted.to_string(), "199 IRR");
    }
}
