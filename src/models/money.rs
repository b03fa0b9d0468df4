//! Money type for representing amounts
//!
//! Internally stores amounts in hundredths (i64) so that totals compared
//! against limits never drift the way repeated floating-point sums do.
//! Parsed amounts are capped at [`Money::MAX`]; arithmetic saturates at the
//! ends of the i64 range instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A currency-agnostic amount stored as hundredths of the unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single spending or limit may carry: 999,999,999,999.99
    pub const MAX: Money = Money(99_999_999_999_999);

    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use spendlimit::models::Money;
    /// let amount = Money::from_cents(350); // 3.50
    /// assert_eq!(amount.to_string(), "3.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Exact sum, or `None` if it does not fit
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Parse an amount written with a `.` decimal point
    ///
    /// Accepts an optional leading `-`, ASCII digits, and at most two
    /// fractional digits: "3.50", "10", "0.5", "-5", ".25". Currency
    /// symbols, digit grouping, `,` separators and exponents are rejected.
    /// Well-formed amounts beyond [`Money::MAX`] are `OutOfRange`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(invalid());
        }

        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());
        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let frac_value: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_value))
            .filter(|c| *c <= Self::MAX.0)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol placed after the amount
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, symbol)
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

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount out of range: {} (at most {})", s, Money::MAX)
            }
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
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(350).format_with_symbol("zł"), "3.50 zł");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("3.50").unwrap().cents(), 350);
        assert_eq!(Money::parse(" 10 ").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".25").unwrap().cents(), 25);
        assert_eq!(Money::parse("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse("-5").unwrap().cents(), -500);
        assert_eq!(Money::parse("-0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejects_other_conventions() {
        for text in [
            "", " ", "-", ".", "abc", "3,50", "$3.50", "1e3", "NaN", "inf", "1.234", "--5", "+5",
            "1 000", "1.2.3",
        ] {
            assert!(Money::parse(text).is_err(), "{:?} should not parse", text);
        }
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(Money::parse("999999999999.99").unwrap(), Money::MAX);
        for text in ["1000000000000", "92233720368547758.07", "99999999999999999999"] {
            assert_eq!(
                Money::parse(text),
                Err(MoneyParseError::OutOfRange(text.to_string()))
            );
        }
    }

    #[test]
    fn test_arithmetic_saturates() {
        let top = Money::from_cents(i64::MAX);
        assert_eq!(top + Money::from_cents(1), top);
        assert_eq!(top.checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::MAX.checked_add(Money::MAX),
            Some(Money::from_cents(199_999_999_999_998))
        );

        let total: Money = [top, top].into_iter().sum();
        assert_eq!(total, top);
        assert_eq!(Money::zero() - top - top, Money::from_cents(i64::MIN));
    }

    #[test]
    fn test_exact_sum() {
        // 0.10 added a thousand times stays exact
        let total: Money = std::iter::repeat(Money::from_cents(10)).take(1000).sum();
        assert_eq!(total, Money::from_cents(10_000));
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert!(a > b);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
