//! Exact fixed-point decimal numbers.
//!
//! A [`Decimal`] is an integer mantissa scaled by a negative power of ten:
//! `123.45` is stored as `{ mantissa: 12345, scale: 2 }`. No floating point
//! is involved anywhere, so every operation is either exact or fails.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::MoneyError;

/// Maximum number of digits accepted in the integer part of parsed text.
///
/// Parsed mantissas are also bounded to the `i64` range, so the product of
/// any two parsed values always fits the `i128` mantissa.
pub const MAX_INTEGER_DIGITS: usize = 12;

/// Exact decimal number: `mantissa × 10^-scale`.
///
/// Values produced by [`Decimal::parse`], [`Decimal::new`],
/// [`Decimal::multiply`] and [`Decimal::divide`] are simplified: when
/// `scale > 0` the mantissa is not divisible by ten. Equal values built that
/// way compare equal structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: i128,
    scale: u8,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal {
        mantissa: 0,
        scale: 0,
    };

    pub const ONE: Decimal = Decimal {
        mantissa: 1,
        scale: 0,
    };

    /// Creates a simplified decimal from a mantissa and scale.
    pub fn new(mantissa: i64, scale: u8) -> Self {
        Self::simplified(i128::from(mantissa), scale)
    }

    fn simplified(mantissa: i128, scale: u8) -> Self {
        let mut decimal = Self { mantissa, scale };
        decimal.simplify();
        decimal
    }

    /// Parses text of the form `[+-]123.45`.
    ///
    /// The decimal point is optional and either side of it may be empty
    /// (`"123."`, `".5"`), but not both.
    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text, ""));
        let int_digits = int_part.strip_prefix(['+', '-']).unwrap_or(int_part);

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_digits)
            || !all_digits(frac_part)
            || (int_digits.is_empty() && frac_part.is_empty())
        {
            return Err(MoneyError::InvalidDecimal(format!("{text:?}")));
        }

        if int_digits.len() > MAX_INTEGER_DIGITS {
            return Err(MoneyError::TooLarge(text.to_string()));
        }

        // Trailing fractional zeros carry no value.
        let frac_part = frac_part.trim_end_matches('0');
        let scale = u8::try_from(frac_part.len())
            .map_err(|_| MoneyError::InvalidDecimal(format!("{text:?}: too many decimal places")))?;

        let digits = if int_digits.is_empty() && frac_part.is_empty() {
            format!("{int_part}0")
        } else {
            format!("{int_part}{frac_part}")
        };
        let mantissa: i64 = digits
            .parse()
            .map_err(|e| MoneyError::InvalidDecimal(format!("{text:?}: {e}")))?;

        Ok(Self::simplified(i128::from(mantissa), scale))
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Number of fractional digits.
    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    /// Strips trailing zero digits from the fractional part.
    fn simplify(&mut self) {
        while self.scale > 0 && self.mantissa % 10 == 0 {
            self.mantissa /= 10;
            self.scale -= 1;
        }
    }

    /// Returns the same value expressed with `scale` fractional digits.
    ///
    /// Raising is lossless. Asking for fewer digits than the value already
    /// has fails with [`MoneyError::PrecisionDecrease`].
    pub fn raise_scale(&self, scale: u8) -> Result<Self, MoneyError> {
        if scale < self.scale {
            return Err(MoneyError::PrecisionDecrease {
                from: self.scale,
                to: scale,
            });
        }
        if scale == self.scale {
            return Ok(*self);
        }

        let mantissa = self
            .mantissa
            .checked_mul(pow10(scale - self.scale)?)
            .ok_or_else(|| MoneyError::Overflow(format!("{} at scale {}", self, scale)))?;

        Ok(Self { mantissa, scale })
    }

    /// Exact product of two decimals.
    pub fn multiply(&self, other: &Decimal) -> Result<Self, MoneyError> {
        let overflow = || MoneyError::Overflow(format!("{} × {}", self, other));

        let mantissa = self.mantissa.checked_mul(other.mantissa).ok_or_else(overflow)?;
        let scale = self.scale.checked_add(other.scale).ok_or_else(overflow)?;

        Ok(Self::simplified(mantissa, scale))
    }

    /// Quotient of `self / divisor` truncated toward zero at `scale`
    /// fractional digits.
    pub fn divide(&self, divisor: &Decimal, scale: u8) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }

        let overflow = || MoneyError::Overflow(format!("{} ÷ {}", self, divisor));

        // self / divisor = (a / b) × 10^(sb - sa); shift so the quotient lands at `scale`.
        let shift = i32::from(scale) + i32::from(divisor.scale) - i32::from(self.scale);
        let magnitude = u8::try_from(shift.unsigned_abs()).map_err(|_| overflow())?;
        let factor = pow10(magnitude)?;

        let quotient = if shift >= 0 {
            self.mantissa.checked_mul(factor).ok_or_else(overflow)? / divisor.mantissa
        } else {
            self.mantissa / divisor.mantissa.checked_mul(factor).ok_or_else(overflow)?
        };

        Ok(Self::simplified(quotient, scale))
    }

    /// Expresses the value with exactly `scale` fractional digits.
    ///
    /// Extra digits are truncated toward zero; missing digits are added
    /// losslessly. The result is not simplified.
    pub fn fit_scale(&self, scale: u8) -> Result<Self, MoneyError> {
        if scale >= self.scale {
            return self.raise_scale(scale);
        }

        let mantissa = match pow10(self.scale - scale) {
            Ok(divisor) => self.mantissa / divisor,
            // Dropping more digits than any mantissa holds leaves nothing.
            Err(_) => 0,
        };

        Ok(Self { mantissa, scale })
    }
}

/// Exact `10^power`.
///
/// Fails with [`MoneyError::Overflow`] once the power no longer fits the
/// mantissa width (`power > 38`).
pub fn pow10(power: u8) -> Result<i128, MoneyError> {
    10i128
        .checked_pow(u32::from(power))
        .ok_or_else(|| MoneyError::Overflow(format!("10^{power}")))
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();

        if self.scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let scale = usize::from(self.scale);
        let width = scale + 1;
        let padded = format!("{digits:0>width$}");
        let (whole, frac) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{whole}.{frac}")
    }
}

impl FromStr for Decimal {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
