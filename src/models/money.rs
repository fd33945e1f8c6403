//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. In the ledger document amounts are plain JSON numbers in major
//! units (`-30.5`), so serialization converts at the boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest magnitude accepted, in cents
///
/// Fifteen significant digits is the most an `f64` carries through a
/// decimal round trip exactly, so every accepted amount reads back from the
/// document unchanged. It also leaves room to sum thousands of them in `i64`.
pub const MAX_CENTS: i64 = 999_999_999_999_999;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use tally::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Amount in major units as a float, as written to the ledger document
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a float in major units
    ///
    /// Reads the shortest decimal form of `value`, so `10.07` is 1007 cents.
    pub fn from_f64(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Self::parse(&value.to_string())
    }

    /// Parse a money amount typed by the user
    ///
    /// Accepts an optional sign (`+100`, `-50`), an optional currency prefix
    /// (`R$`, `$`) and either `.` or `,` as the decimal separator. More than
    /// two fractional digits are rounded half away from zero. Magnitudes
    /// above [`MAX_CENTS`] are rejected as out of range.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = s.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, s)
        };

        let s = s
            .strip_prefix("R$")
            .or_else(|| s.strip_prefix('$'))
            .unwrap_or(s)
            .trim_start();

        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());
        let out_of_range = || MoneyParseError::OutOfRange(original.trim().to_string());

        let (whole, fraction) = match s.find(|c: char| c == '.' || c == ',') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let digit = |i: usize| -> i64 {
            fraction
                .as_bytes()
                .get(i)
                .map(|b| i64::from(b - b'0'))
                .unwrap_or(0)
        };
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .filter(|v| *v <= MAX_CENTS)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{} {}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{} {}.{:02}", symbol, self.units(), self.cents_part())
        }
    }

    /// Format with an explicit sign, used for history rows
    pub fn format_signed(&self, symbol: &str) -> String {
        if self.is_positive() {
            format!("+{}", self.format_with_symbol(symbol))
        } else {
            self.format_with_symbol(symbol)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(6950).format_with_symbol("R$"), "R$ 69.50");
        assert_eq!(Money::from_cents(-3050).format_with_symbol("R$"), "-R$ 30.50");
        assert_eq!(Money::from_cents(10000).format_signed("R$"), "+R$ 100.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("+100").unwrap().cents(), 10000);
        assert_eq!(Money::parse("-50").unwrap().cents(), -5000);
        assert_eq!(Money::parse("R$ 10,5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-$0.05").unwrap().cents(), -5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse(" 0 ").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "-", ".", "10.5.0", "1e3", "10.é", "12a"] {
            assert!(Money::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            Money::parse("9999999999999.99").unwrap(),
            Money::from_cents(MAX_CENTS)
        );
        assert_eq!(
            Money::parse("-9999999999999.99").unwrap(),
            Money::from_cents(-MAX_CENTS)
        );
        for input in ["10000000000000", "9999999999999.995", "99999999999999999999"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::OutOfRange(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!((max + max).cents(), i64::MAX);
        assert_eq!((-max - max).cents(), i64::MIN);
        assert_eq!(Money::from_cents(i64::MIN).abs().cents(), i64::MAX);

        let total: Money = vec![max, max, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(-300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::zero());
    }

    #[test]
    fn test_serialization_as_major_units() {
        let m = Money::from_cents(-3050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "-30.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let from_int: Money = serde_json::from_str("100").unwrap();
        assert_eq!(from_int.cents(), 10000);

        let cents_only: Money = serde_json::from_str("10.07").unwrap();
        assert_eq!(cents_only.cents(), 1007);
    }

    #[test]
    fn test_largest_amount_survives_serialization() {
        for cents in [MAX_CENTS, -MAX_CENTS, 123_456_789_012_345, 1] {
            let m = Money::from_cents(cents);
            let json = serde_json::to_string(&m).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, m, "{} changed through {}", cents, json);
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("10000000000000").is_err());
        assert!(serde_json::from_str::<Money>("-92233720368547758.08").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
    }
}
