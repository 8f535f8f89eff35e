//! Milliunits type for YNAB currency amounts
//!
//! YNAB encodes every amount as an integer number of thousandths of the
//! currency unit: `123456` is `$123.456`. Formatting rounds to cents with
//! integer arithmetic so no floating-point error leaks into messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Number of milliunits in one currency unit
const MILLIUNITS_PER_UNIT: i64 = 1000;

/// A monetary amount in YNAB milliunits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliunits(i64);

impl Milliunits {
    /// Create an amount from raw milliunits
    ///
    /// # Examples
    /// ```
    /// use ynab_sms::models::Milliunits;
    /// let amount = Milliunits::new(50_000); // $50.00
    /// ```
    pub const fn new(milliunits: i64) -> Self {
        Self(milliunits)
    }

    /// Get the raw milliunit value
    pub const fn milliunits(&self) -> i64 {
        self.0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Convert to a decimal currency value (`amount / 1000`)
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / MILLIUNITS_PER_UNIT as f64
    }

    /// Whole cents, rounded half away from zero
    fn rounded_cents(&self) -> u64 {
        (self.0.unsigned_abs() + 5) / 10
    }

    /// Format as US dollars: `$1,234.57`, negatives as `-$1,234.57`
    pub fn to_currency_string(&self) -> String {
        let cents = self.rounded_cents();
        // Amounts that round to zero print unsigned: -4 is "$0.00", not "-$0.00"
        let sign = if self.is_negative() && cents != 0 { "-" } else { "" };
        format!(
            "{}${}.{:02}",
            sign,
            group_thousands(cents / 100),
            cents % 100
        )
    }
}

/// Insert `,` between every group of three digits
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Convert raw milliunits to a decimal currency value
pub fn to_decimal(amount: i64) -> f64 {
    Milliunits::new(amount).to_decimal()
}

/// Format raw milliunits as a US dollar string
pub fn to_currency_string(amount: i64) -> String {
    Milliunits::new(amount).to_currency_string()
}

impl fmt::Display for Milliunits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_currency_string())
    }
}

impl From<i64> for Milliunits {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Add for Milliunits {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Milliunits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Milliunits::default(), |acc, m| acc + m)
    }
}
