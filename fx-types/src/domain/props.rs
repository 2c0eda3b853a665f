//! Property-based tests for decimal and amount invariants.

use proptest::prelude::*;

use super::{Amount, Currency, Decimal, pow10};
use crate::error::MoneyError;

/// Strategy to generate decimal text with up to 12 integer digits and
/// up to 6 fractional digits, optionally signed (`-0.5` included).
fn decimal_text() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "-", "+"]),
        0u64..=999_999_999_999u64,
        0u32..1_000_000,
        0usize..=6,
    )
        .prop_map(|(sign, whole, frac, places)| {
            if places == 0 {
                format!("{sign}{whole}")
            } else {
                let frac = frac % 10u32.pow(places as u32);
                format!("{sign}{whole}.{frac:0places$}")
            }
        })
}

/// Strategy to pick a currency from each scale class.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec!["IRR", "CNY", "USD", "EUR", "KWD", "TND"])
        .prop_map(|code| Currency::parse(code).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rendering a parsed decimal and parsing it again yields the same value.
    #[test]
    fn prop_parse_render_round_trip(text in decimal_text()) {
        let parsed = Decimal::parse(&text).unwrap();
        let reparsed = Decimal::parse(&parsed.to_string()).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }

    /// A negative sign survives rendering whenever the value is non-zero.
    #[test]
    fn prop_sign_survives_render(text in decimal_text()) {
        let parsed = Decimal::parse(&text).unwrap();
        prop_assert_eq!(parsed.is_negative(), parsed.to_string().starts_with('-'));
        prop_assert_eq!(parsed.is_negative(), text.starts_with('-') && !parsed.is_zero());
    }

    /// Parsed and constructed decimals are always in canonical form.
    #[test]
    fn prop_canonical_form(
        text in decimal_text(),
        mantissa in any::<i64>(),
        scale in 0u8..=18,
    ) {
        for d in [Decimal::parse(&text).unwrap(), Decimal::new(mantissa, scale)] {
            prop_assert!(d.scale() == 0 || d.mantissa() % 10 != 0, "{:?} is not simplified", d);
        }
    }

    /// Raising the scale never changes the value.
    #[test]
    fn prop_raise_scale_is_lossless(text in decimal_text(), extra in 0u8..=10) {
        let d = Decimal::parse(&text).unwrap();
        let target = d.scale() + extra;
        let raised = d.raise_scale(target).unwrap();
        let factor = pow10(extra).unwrap();

        prop_assert_eq!(raised.scale(), target);
        prop_assert_eq!(raised.mantissa() % factor, 0);
        prop_assert_eq!(raised.mantissa() / factor, d.mantissa());
        prop_assert_eq!(raised.to_string().parse::<Decimal>().unwrap(), d);
    }

    /// Lowering the scale through the raise primitive always fails.
    #[test]
    fn prop_raise_scale_refuses_lower(text in decimal_text(), drop in 1u8..=6) {
        let d = Decimal::parse(&text).unwrap();
        prop_assume!(d.scale() >= drop);
        let result = d.raise_scale(d.scale() - drop);
        prop_assert!(
            matches!(result, Err(MoneyError::PrecisionDecrease { .. })),
            "unexpected result: {:?}",
            result
        );
    }

    /// Amount construction succeeds exactly when no digits would be lost.
    #[test]
    fn prop_amount_never_decreases_precision(text in decimal_text(), currency in currency()) {
        let d = Decimal::parse(&text).unwrap();
        let result = Amount::new(d, currency.clone());

        if d.scale() <= currency.scale() {
            let amount = result.unwrap();
            prop_assert_eq!(amount.value().scale(), currency.scale());
            prop_assert_eq!(amount.value().to_string().parse::<Decimal>().unwrap(), d);
        } else {
            prop_assert!(
                matches!(result, Err(MoneyError::TooPrecise { .. })),
                "unexpected result: {:?}",
                result
            );
        }
    }
}
