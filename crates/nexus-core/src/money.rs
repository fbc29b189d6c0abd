//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A client's lifetime spend is a running float sum in many retail       │
//! │  systems - every sale adds a little more drift.                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price, cost, subtotal and accumulator is an i64 of cents.     │
//! │    Addition is exact; only display code ever sees a decimal point.     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nexus_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // $21.98
//! let total = price + Money::from_cents(500);   // $15.99
//!
//! // Parse user-supplied decimal text (CSV import)
//! let parsed = Money::parse_decimal("10,99").unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use nexus_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use nexus_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Parses a decimal amount from user-supplied text.
    ///
    /// ## Accepted Input
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  "1200"    → 120000 cents   (whole amount)                          │
    /// │  "10.5"    →   1050 cents   (dot decimal separator)                 │
    /// │  "10,50"   →   1050 cents   (comma separator - regional             │
    /// │                              spreadsheet exports)                   │
    /// │  "-3.25"   →   -325 cents   (signed)                                │
    /// │  "10.999"  →   1100 cents   (3rd fraction digit rounds half-up)     │
    /// │                                                                     │
    /// │  ""  "x"  "10.5.1"  "10,5x" → ParseMoneyError                       │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Why Not parse::<f64>()?
    /// Going through a float reintroduces the representation error this
    /// type exists to avoid. The conversion here is pure integer math.
    pub fn parse_decimal(input: &str) -> Result<Money, ParseMoneyError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ParseMoneyError::invalid(input));
        }

        // Comma is the decimal separator in most regional exports
        let normalized = raw.replace(',', ".");

        let (sign, body) = match normalized.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, normalized.strip_prefix('+').unwrap_or(&normalized)),
        };
        if body.is_empty() {
            return Err(ParseMoneyError::invalid(input));
        }

        let mut parts = body.splitn(2, '.');
        let whole = parts.next().unwrap_or("");
        let frac = parts.next().unwrap_or("");
        if frac.contains('.') {
            return Err(ParseMoneyError::invalid(input));
        }
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseMoneyError::invalid(input));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError::invalid(input));
        }

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError::invalid(input))?
        };

        // First two fraction digits are cents; the third decides rounding.
        let mut digits = frac.chars();
        let d1 = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let d2 = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let d3 = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let round_up = if d3 >= 5 { 1 } else { 0 };

        let cents = whole_units
            .checked_mul(100)
            .and_then(|c| c.checked_add(d1 * 10 + d2 + round_up))
            .ok_or_else(|| ParseMoneyError::invalid(input))?;

        Ok(Money(sign * cents))
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// Error returned when decimal text cannot be converted to [`Money`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    /// Input is empty, non-numeric, or malformed.
    #[error("not a valid amount: {input:?}")]
    Invalid { input: String },
}

impl ParseMoneyError {
    fn invalid(input: &str) -> Self {
        ParseMoneyError::Invalid {
            input: input.to_string(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log output. Use frontend formatting for
/// actual UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }

    #[test]
    fn test_parse_whole_amounts() {
        assert_eq!(Money::parse_decimal("1200").unwrap().cents(), 120_000);
        assert_eq!(Money::parse_decimal("0").unwrap().cents(), 0);
        assert_eq!(Money::parse_decimal(" 45 ").unwrap().cents(), 4500);
    }

    #[test]
    fn test_parse_dot_decimals() {
        assert_eq!(Money::parse_decimal("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse_decimal("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse_decimal("0.99").unwrap().cents(), 99);
        assert_eq!(Money::parse_decimal(".5").unwrap().cents(), 50);
    }

    #[test]
    fn test_parse_comma_decimals() {
        // Regional spreadsheet exports write "10,5" for $10.50
        assert_eq!(Money::parse_decimal("10,5").unwrap().cents(), 1050);
        assert_eq!(Money::parse_decimal("220,00").unwrap().cents(), 22_000);
    }

    #[test]
    fn test_parse_rounds_third_fraction_digit() {
        assert_eq!(Money::parse_decimal("10.994").unwrap().cents(), 1099);
        assert_eq!(Money::parse_decimal("10.995").unwrap().cents(), 1100);
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(Money::parse_decimal("-3.25").unwrap().cents(), -325);
        assert_eq!(Money::parse_decimal("+3.25").unwrap().cents(), 325);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", "x", "10.5.1", "10,5x", "-", "+", "1e3"] {
            assert!(
                Money::parse_decimal(bad).is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
