//! Money types with precise decimal arithmetic
//!
//! All monetary values in an act are expressed in a single base unit with
//! two fractional digits. Values are backed by `rust_decimal` so that
//! per-owner shares can be compared with the row total at cent precision
//! without floating-point drift.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits carried by every monetary amount
pub const MONEY_SCALE: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Empty numeric value")]
    Empty,

    #[error("Invalid numeric value '{0}'")]
    InvalidNumber(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Amount out of range")]
    Overflow,
}

/// Parses a spreadsheet number into a `Decimal`
///
/// Ordinary and non-breaking spaces are removed (they are used as thousands
/// separators) and a comma decimal separator is mapped to a period.
///
/// # Errors
///
/// Returns `MoneyError::Empty` for blank input and
/// `MoneyError::InvalidNumber` for anything that is not a decimal literal.
///
/// # Example
///
/// ```rust
/// use core_kernel::money::parse_decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_decimal("1\u{a0}234,50").unwrap(), dec!(1234.50));
/// ```
pub fn parse_decimal(text: &str) -> Result<Decimal, MoneyError> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(MoneyError::Empty);
    }

    Decimal::from_str(&cleaned).map_err(|_| MoneyError::InvalidNumber(text.trim().to_string()))
}

/// Rounds a value to exactly two fractional digits, ties away from zero
///
/// `0.005` becomes `0.01` and `-0.005` becomes `-0.01`. The result always
/// carries a scale of two, so `10` is returned as `10.00`.
pub fn quantize_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// A monetary amount quantized to the cent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounding half-up to the cent
    pub fn new(amount: Decimal) -> Self {
        Self(quantize_money(amount))
    }

    /// Creates Money from an integer amount in minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, MONEY_SCALE))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiplies by a whole quantity and rounds to the cent
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` when the product does not fit a
    /// `Decimal`.
    pub fn multiply(&self, quantity: u64) -> Result<Self, MoneyError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Adds two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self::new)
    }

    /// Computes `total * part / whole`, rounded to the cent
    ///
    /// The product is taken first for precision. When it does not fit, the
    /// quotient is taken first instead; `part <= whole` keeps that result
    /// in range.
    ///
    /// # Errors
    ///
    /// `MoneyError::DivisionByZero` when `whole` is zero and
    /// `MoneyError::Overflow` when neither order fits.
    pub fn share_of(total: Decimal, part: u64, whole: u64) -> Result<Self, MoneyError> {
        if whole == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        let part = Decimal::from(part);
        let whole = Decimal::from(whole);

        total
            .checked_mul(part)
            .and_then(|product| product.checked_div(whole))
            .or_else(|| total.checked_div(whole).and_then(|unit| unit.checked_mul(part)))
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Computes the price of a single unit from a total
    ///
    /// The quotient is rounded to the cent once; callers reuse the result
    /// for every share of the same row.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::DivisionByZero` when `quantity` is zero.
    pub fn unit_price(total: Decimal, quantity: u64) -> Result<Self, MoneyError> {
        if quantity == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(total / Decimal::from(quantity)))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
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
        Self::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn quantize_is_idempotent(minor in -1_000_000_000i64..1_000_000_000i64, extra in 0u32..1000u32) {
            let value = Decimal::new(minor, 2) + Decimal::new(extra as i64, 5);
            let once = quantize_money(value);
            prop_assert_eq!(quantize_money(once), once);
            prop_assert_eq!(once.scale(), MONEY_SCALE);
        }

        #[test]
        fn unit_price_error_is_bounded(minor in 0i64..1_000_000_000i64, quantity in 1u64..10_000u64) {
            let total = Decimal::new(minor, 2);
            let unit = Money::unit_price(total, quantity).unwrap();
            let diff = (unit.amount() * Decimal::from(quantity) - total).abs();
            let bound = Decimal::new(5, 3) * Decimal::from(quantity) + Decimal::new(1, 10);
            prop_assert!(diff <= bound);
        }
    }
}
