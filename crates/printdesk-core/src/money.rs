//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing a month of orders in floating point:                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centimes                                         │
//! │    1 DZD = 100 centimes, every amount is an i64 count of centimes       │
//! │    Sums, differences and till balances are exact                        │
//! │                                                                         │
//! │  Only two places leave integers:                                        │
//! │    • margins (a percentage for display)                                 │
//! │    • typed-in expressions (exact decimals, rounded back to centimes)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printdesk_core::money::Money;
//!
//! let price = Money::from_major(1500);         // 1500 DZD
//! let cost = Money::from_major_minor(899, 50); // 899.50 DZD
//!
//! let profit = price - cost;
//! assert_eq!(profit.minor(), 60_050);
//! assert_eq!(profit.to_string(), "600.50 DZD");
//! ```

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::CURRENCY_CODE;

/// Minor units (centimes) per major unit (dinar).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Decimal places carried by a `Money` value.
const DECIMAL_PLACES: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centimes for DZD).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit and till balance can go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a plain integer**: the frontend divides by 100 to display
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Order form ──► parse_amount("10+5*2") ──► Money ──► ServiceMetrics     │
/// │                                                                         │
/// │  Order.selling_price ──┬──► FinancialSummary.total_collected_revenue    │
/// │                        └──► RegularCustomer.total_spent                 │
/// │                                                                         │
/// │  TillTransaction.amount ──► FinancialSummary.total_withdrawals          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (centimes).
    ///
    /// ## Example
    /// ```rust
    /// use printdesk_core::money::Money;
    ///
    /// let price = Money::from_minor(125_050); // 1250.50 DZD
    /// assert_eq!(price.minor(), 125_050);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole dinars.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Creates a Money value from dinars and centimes.
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50 DZD, not -4.50 DZD
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_PER_MAJOR + minor)
        }
    }

    /// Converts an exact decimal amount of dinars to Money.
    ///
    /// Rounds half away from zero to the centime. Returns `None` when the
    /// value does not fit in an i64 count of centimes.
    ///
    /// ## Example
    /// ```rust
    /// use printdesk_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let third = Decimal::from(10) / Decimal::from(3);
    /// assert_eq!(Money::from_decimal(third), Some(Money::from_minor(333)));
    ///
    /// let half_centime = Decimal::new(1005, 3); // 1.005
    /// assert_eq!(Money::from_decimal(half_centime), Some(Money::from_minor(101)));
    /// ```
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        let rounded =
            value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::from(MINOR_PER_MAJOR))?
            .to_i64()
            .map(Money)
    }

    /// Returns the amount as an exact decimal number of dinars.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, DECIMAL_PLACES)
    }

    /// Returns the value in minor units (centimes).
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dinars) portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    /// Splits the amount evenly across `quantity` units.
    ///
    /// Rounds half away from zero to the centime. A quantity of zero (or
    /// less) yields zero instead of failing.
    ///
    /// ## Example
    /// ```rust
    /// use printdesk_core::money::Money;
    ///
    /// let batch = Money::from_major(100);
    /// assert_eq!(batch.divide_by_quantity(3), Money::from_minor(3333));
    /// assert_eq!(batch.divide_by_quantity(0), Money::zero());
    /// ```
    pub fn divide_by_quantity(&self, quantity: i64) -> Money {
        if quantity <= 0 {
            return Money::zero();
        }

        // i128 keeps 2 * amount from overflowing on huge values
        let amount = self.0 as i128;
        let qty = quantity as i128;
        let rounded = (amount.abs() * 2 + qty) / (qty * 2);
        Money((rounded * amount.signum()) as i64)
    }

    /// Expresses this amount as a percentage of `whole`.
    ///
    /// Returns 0.0 when `whole` is zero, never NaN or infinity.
    ///
    /// ## Example
    /// ```rust
    /// use printdesk_core::money::Money;
    ///
    /// let profit = Money::from_major(25);
    /// assert_eq!(profit.ratio_percent(Money::from_major(100)), 25.0);
    /// assert_eq!(profit.ratio_percent(Money::zero()), 0.0);
    /// ```
    pub fn ratio_percent(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        self.0 as f64 * 100.0 / whole.0 as f64
    }

    /// Whole dinars, rounding the half dinar away from zero.
    ///
    /// Dinar amounts are shown without centimes on screen.
    ///
    /// ## Example
    /// ```rust
    /// use printdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(125_050).rounded_major(), 1251);
    /// assert_eq!(Money::from_minor(-150).rounded_major(), -2);
    /// assert_eq!(Money::from_minor(-40).rounded_major(), 0);
    /// ```
    pub const fn rounded_major(&self) -> i64 {
        let magnitude = self.0.unsigned_abs() as i128;
        let rounded = ((magnitude + (MINOR_PER_MAJOR / 2) as i128) / MINOR_PER_MAJOR as i128) as i64;
        if self.0 < 0 {
            -rounded
        } else {
            rounded
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `"1250.50 DZD"`.
///
/// ## Note
/// This is for logs and debugging. Locale-aware formatting belongs to
/// whatever renders the value.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02} {}",
            sign,
            self.major().abs(),
            self.minor_part(),
            CURRENCY_CODE
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Arithmetic saturates at the i64 bounds. Intake caps amounts at
// `MAX_AMOUNT`, so the bounds are only reached by values built directly.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

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
