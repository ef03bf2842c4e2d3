//! Amount type for representing expense values
//!
//! Amounts are whole currency units stored as i64. Decimal input is never
//! rounded: parsing keeps the leading integer and drops everything after it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A whole-unit currency amount
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Amount;
    /// let amount = Amount::new(50_000);
    /// assert_eq!(amount.units(), 50_000);
    /// ```
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse the leading integer of a string, truncating any fraction
    ///
    /// Leading whitespace and one sign character are accepted, then the
    /// longest run of ASCII digits is taken and the rest of the input is
    /// ignored: `"1500.75"` is 1500, `"12abc"` is 12, `"1e5"` is 1.
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Amount;
    /// assert_eq!(Amount::parse_truncating("1500.75").unwrap().units(), 1500);
    /// assert!(Amount::parse_truncating("abc").is_err());
    /// ```
    pub fn parse_truncating(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim_start();

        let sign_len = usize::from(trimmed.starts_with(['-', '+']));
        let end = trimmed[sign_len..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(trimmed.len(), |i| sign_len + i);

        if end == sign_len {
            return Err(AmountParseError::NotANumber(s.to_string()));
        }

        // The signed slice is parsed whole so i64::MIN stays in range
        trimmed[..end]
            .parse()
            .map(Self)
            .map_err(|_| AmountParseError::OutOfRange(s.to_string()))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, group_thousands(self.0.unsigned_abs()))
        } else {
            format!("{}{}", symbol, group_thousands(self.0.unsigned_abs()))
        }
    }
}

/// Insert a comma every three digits from the right
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(""))
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

/// Addition saturates at the i64 bounds instead of overflowing
impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    /// No digits at the start of the input
    #[error("not a number: {0}")]
    NotANumber(String),

    /// Digits present but the value does not fit in i64
    #[error("amount out of range: {0}")]
    OutOfRange(String),
}
