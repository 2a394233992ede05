//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is a plain JSON number in currency units
//! (`5000`, `12.5`), matching how the ledger has always been stored.
//!
//! Amounts from user input are limited to [`Money::MAX`] in magnitude. Up to
//! that size the units value written as an `f64` reads back to the same cent.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Neg;

/// Currency symbol used when no settings are available
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest accepted magnitude: 10 trillion units
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a floating point number of units,
    /// rounding to the nearest cent. Returns `None` for NaN or infinity.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents > i64::MAX as f64 || cents < i64::MIN as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

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

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Whether the magnitude is above [`Money::MAX`]
    pub const fn exceeds_limit(&self) -> bool {
        self.0.unsigned_abs() > Self::MAX.0.unsigned_abs()
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// The amount as a floating point number of units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Plain decimal text that [`Money::parse`] reads back exactly:
    /// `2000`, `12.5`, `-0.05`
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().unsigned_abs();
        match self.cents_part() {
            0 => format!("{}{}", sign, units),
            cents if cents % 10 == 0 => format!("{}{}.{}", sign, units, cents / 10),
            cents => format!("{}{}.{:02}", sign, units, cents),
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10.50", "₹10.50", "$10.50",
    /// "1,234.5", "10". Anything else is rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        if original.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, rest) = match original.chars().next() {
            Some('-') => (true, &original[1..]),
            Some('+') => (false, &original[1..]),
            _ => (false, original),
        };

        let rest = rest
            .strip_prefix(DEFAULT_CURRENCY_SYMBOL)
            .or_else(|| rest.strip_prefix('$'))
            .unwrap_or(rest);
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        let (units_str, frac_str) = match digits.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (digits.as_str(), ""),
        };

        if units_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        if !units_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };

        // Round half up on the third decimal
        let mut frac = frac_str.chars().chain(std::iter::repeat('0'));
        let tens = frac.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let ones = frac.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let round = frac.next().and_then(|c| c.to_digit(10)).unwrap_or(0) >= 5;

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(tens * 10 + ones + i64::from(round)))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format the magnitude with a currency symbol and thousands separators,
    /// prefixed with `-` only when negative: `₹1,234.50`, `-₹12.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.grouped_magnitude())
    }

    /// Format with an explicit sign, zero counting as positive:
    /// `+₹5,000.00`, `-₹1,200.00`, `+₹0.00`
    pub fn format_signed(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { '-' } else { '+' };
        format!("{}{}{}", sign, symbol, self.grouped_magnitude())
    }

    fn grouped_magnitude(&self) -> String {
        let magnitude = self.0.unsigned_abs();
        let units = (magnitude / 100).to_string();
        let cents = magnitude % 100;

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        format!("{}.{:02}", grouped, cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number of currency units")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .map_err(|_| E::custom("amount out of range"))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_f64(v).ok_or_else(|| E::custom("amount is not a finite number"))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
