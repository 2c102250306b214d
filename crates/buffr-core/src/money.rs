//! # Money
//!
//! Namibian dollar amounts held as a signed count of cents.
//!
//! ## Representation
//!
//! All arithmetic is integer arithmetic on cents. Percentage charges and
//! divisions round half-up to the nearest cent. Floats are accepted only
//! at the untyped boundary through [`Money::from_f64`], which rejects NaN
//! and infinities.
//!
//! ## Wire Format
//!
//! Serializes as a fixed-point decimal string with two places (`"6015.00"`).
//! Deserializes from either a decimal string or a JSON number, since HTTP
//! clients send both.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LoanCalculationError, MoneyParseError, Quantity};
use crate::policy::CURRENCY_SYMBOL;

/// Largest magnitude, in cents, accepted from a float.
const MAX_ABS_CENTS_F64: f64 = 9.0e18;

/// A Namibian dollar amount in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// N$0.
    pub const ZERO: Money = Money(0);

    /// Build from a count of cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Build from whole Namibian dollars.
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Convert an untyped float (HTTP body, UI input) into cents.
    ///
    /// Rounds to the nearest cent. `quantity` names the input in the error.
    pub fn from_f64(value: f64, quantity: Quantity) -> Result<Self, LoanCalculationError> {
        if !value.is_finite() {
            return Err(LoanCalculationError::NonFiniteValue(quantity));
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_ABS_CENTS_F64 {
            return Err(LoanCalculationError::OutOfRange(quantity));
        }
        Ok(Self(cents as i64))
    }

    /// The amount in cents.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated toward zero.
    pub const fn whole_units(self) -> i64 {
        self.0 / 100
    }

    /// The amount as a float, for ratios and display-only callers.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// True when strictly below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// True when strictly above zero.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `rate` percent of this amount, rounded half-up to the cent.
    pub fn percent(self, rate: i64) -> Self {
        let scaled = i128::from(self.0) * i128::from(rate);
        Self(div_half_up(scaled, 100) as i64)
    }

    /// Split evenly into `parts`, rounded half-up to the cent.
    ///
    /// Returns `None` when `parts` is zero.
    pub fn div_half_up(self, parts: u32) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        Some(Self(div_half_up(i128::from(self.0), i128::from(parts)) as i64))
    }

    /// Divide by `parts`, rounding toward negative infinity.
    ///
    /// Returns `None` when `parts` is zero.
    pub fn div_floor(self, parts: u32) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        Some(Self(self.0.div_euclid(i64::from(parts))))
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction; `None` on overflow.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication by an integer factor; `None` on overflow.
    pub fn checked_mul(self, factor: i64) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }

    /// This amount as a percentage of `whole`. `whole` must be non-zero.
    pub fn ratio_percent(self, whole: Self) -> f64 {
        self.0 as f64 / whole.0 as f64 * 100.0
    }

    /// Fixed-point decimal with exactly two places, no symbol, no grouping.
    pub fn to_decimal_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// `floor((2n + d) / 2d)` for `d > 0`: nearest integer, halves rounded up.
fn div_half_up(numerator: i128, denominator: i128) -> i128 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

/// Insert `,` every three digits from the right of a run of ASCII digits.
pub fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `N$12,345.67`; trailing fractional zeros are dropped (`N$1,000`, `N$2.5`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let frac = abs % 100;
        write!(f, "{CURRENCY_SYMBOL}{sign}{}", group_thousands(&(abs / 100).to_string()))?;
        if frac == 0 {
            Ok(())
        } else if frac % 10 == 0 {
            write!(f, ".{}", frac / 10)
        } else {
            write!(f, ".{frac:02}")
        }
    }
}

/// Parses `5000`, `5000.5`, `12,345.67`, `N$1,000` and negatives.
///
/// Grouping commas in the integer part are ignored, not validated.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let body = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
        let (negative, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        let digits: String = int_part.chars().filter(|c| *c != ',').collect();

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if digits.is_empty() || !all_digits(&digits) || !all_digits(frac_part) {
            return Err(MoneyParseError::Invalid(trimmed.to_string()));
        }
        if frac_part.len() > 2 {
            return Err(MoneyParseError::TooPrecise(trimmed.to_string()));
        }

        let overflow = || MoneyParseError::Overflow(trimmed.to_string());
        let units: i64 = digits.parse().map_err(|_| overflow())?;
        let frac_cents: i64 = match frac_part.len() {
            0 => 0,
            1 => frac_part.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => frac_part.parse::<i64>().map_err(|_| overflow())?,
        };
        let cents = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(frac_cents))
            .ok_or_else(overflow)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(MoneyParseError::Overflow(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money)
            .ok_or_else(|| E::custom(MoneyParseError::Overflow(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        // Same two-decimal limit as the string form; tolerance covers binary error.
        let scaled = v * 100.0;
        let tolerance = (scaled.abs() * f64::EPSILON * 4.0).max(1e-6);
        if v.is_finite() && (scaled - scaled.round()).abs() > tolerance {
            return Err(E::custom(MoneyParseError::TooPrecise(v.to_string())));
        }
        Money::from_f64(v, Quantity::LoanAmount)
            .map_err(|_| E::custom(MoneyParseError::Invalid(v.to_string())))
    }
}
