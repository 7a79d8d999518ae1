//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    10.00 × 0.10 = 1.0000000000000002  ❌                                │
//! │    ceil(1.0000000000000002 / 0.05) × 0.05 = 1.05  ❌ WRONG TAX!         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents × 1000 bps = 1_000_000 (exact)                            │
//! │    ceil(1_000_000 / 50_000) × 5 = 100 cents = 1.00  ✅                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let price: Money = "12.49".parse().unwrap();
//! assert_eq!(price.cents(), 1249);
//!
//! let doubled = price * 2;
//! assert_eq!(doubled.to_string(), "24.98");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::MoneyParseError;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values (refund lines, negative quantities)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// "at 12.49" ──► Product.price ──┬──► tax::calculate ──► LineItem.tax
///                                │                            │
///                                └──► × quantity ─────────────┴──► LineItem.total
///
/// Σ LineItem.tax ──► "Sales Taxes: 1.50"
/// Σ LineItem.total ──► "Total: 42.32"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Calculates tax at `rate`, rounded UP to the next multiple of `increment`.
    ///
    /// ## Ceiling Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND UP TO NEAREST 0.05                                           │
    /// │                                                                     │
    /// │  raw 1.499  → 1.50      raw 0.5625 → 0.60                          │
    /// │  raw 1.00   → 1.00      raw 0.001  → 0.05                          │
    /// │                                                                     │
    /// │  Never rounds down, never to nearest.                              │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// The raw tax `cents × bps / 10000` is never materialized. We take the
    /// ceiling of `cents × bps / (10000 × increment)` directly, so the result
    /// is exact for every input. Ceiling is toward +infinity, which makes a
    /// negative price yield the negation of the positive tax whenever the raw
    /// tax is already a multiple of the increment.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    /// use receipt_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(1499);
    /// let tax = price.tax_rounded_up(TaxRate::from_bps(1000), Money::from_cents(5));
    /// assert_eq!(tax.cents(), 150);
    /// ```
    pub fn tax_rounded_up(&self, rate: TaxRate, increment: Money) -> Money {
        // i128 keeps cents × bps × increment well clear of overflow
        let step = i128::from(increment.0.abs().max(1));
        let numerator = i128::from(self.0) * i128::from(rate.bps());
        let denominator = 10_000 * step;

        let steps = -((-numerator).div_euclid(denominator));
        Money::from_cents((steps * step) as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1249);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 2498);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a plain decimal amount: `"12.49"`, `"10"`, `".5"`, `"-5.00"`.
///
/// Digits past the second decimal place are rounded half away from zero,
/// so `"12.999999"` becomes 13.00. Exponents and non-numeric forms such as
/// `"NaN"` are rejected.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, unsigned) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if fraction.contains('.') {
            return Err(MoneyParseError::MultipleDecimalPoints);
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::NoDigits);
        }
        if let Some(bad) = whole.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidCharacter(bad));
        }

        let mut cents: i64 = 0;
        for digit in whole.bytes() {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(i64::from(digit - b'0')))
                .ok_or(MoneyParseError::Overflow)?;
        }

        let mut fraction_digits = fraction.bytes().map(|d| i64::from(d - b'0'));
        let tenths = fraction_digits.next().unwrap_or(0);
        let hundredths = fraction_digits.next().unwrap_or(0);
        let round_up = fraction_digits.next().is_some_and(|d| d >= 5);

        cents = cents
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or(MoneyParseError::Overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows exactly two decimals and no currency symbol, the format
/// printed on receipts: `0.00`, `10.00`, `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an empty iterator yields zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
