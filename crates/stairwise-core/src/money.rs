//! # Money Module
//!
//! Provides the `Money` type every pricing rule contributes in.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BREAKDOWN MUST ADD UP                                                  │
//! │                                                                         │
//! │  A lane total is the sum of every rule's own contribution, and the     │
//! │  breakdown shown to the customer lists exactly those contributions.    │
//! │                                                                         │
//! │  With floating point:                                                   │
//! │    sum(breakdown) = 1234.5600000001 ≠ total 1234.56  ❌                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    sum(breakdown) = 123456 pence = total 123456 pence ✅                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stairwise_core::money::Money;
//!
//! let riser = Money::from_pence(1850);          // £18.50
//! let risers = riser.checked_mul(13).unwrap();  // £240.50
//! assert_eq!(risers.pence(), 24050);
//! ```
//!
//! All arithmetic is checked. There are no operator impls, so an overflow
//! always surfaces as `None` and never wraps or panics.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in pence (the smallest GBP unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative contributions (discounts)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Serializes as a bare integer in JSON and TOML
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use stairwise_core::money::Money;
    ///
    /// let price = Money::from_pence(1099); // Represents £10.99
    /// assert_eq!(price.pence(), 1099);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (a discount).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(pence) => Some(Money(pence)),
            None => None,
        }
    }

    /// Sums amounts in order, returning `None` if any partial sum overflows.
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use stairwise_core::money::Money;
    ///
    /// let spindle = Money::from_pence(675);
    /// assert_eq!(spindle.checked_mul(24), Some(Money::from_pence(16200)));
    /// assert_eq!(Money::from_pence(i64::MAX).checked_mul(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul(self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(pence) => Some(Money(pence)),
            None => None,
        }
    }

    /// Prices a length in millimetres against a per-metre rate.
    ///
    /// Rounds half up to the nearest penny: `(rate * mm + 500) / 1000`.
    ///
    /// ## Example
    /// ```rust
    /// use stairwise_core::money::Money;
    ///
    /// let handrail = Money::from_pence(2400); // £24.00 per metre
    /// assert_eq!(handrail.per_metre(3900).unwrap().pence(), 9360);
    /// assert_eq!(handrail.per_metre(1).unwrap().pence(), 2); // 2.4p → 2p
    /// ```
    pub fn per_metre(&self, length_mm: u32) -> Option<Money> {
        let pence = (self.0 as i128 * length_mm as i128 + 500).div_euclid(1000);
        i64::try_from(pence).ok().map(Money)
    }

    /// Calculates tax, rounding half up to the nearest penny.
    ///
    /// ## Implementation
    /// We use integer math: `(amount * rate + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use stairwise_core::money::Money;
    /// use stairwise_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_pence(123_45); // £123.45
    /// let vat = subtotal.calculate_tax(TaxRate::from_bps(2000)); // 20%
    /// // £123.45 × 20% = £24.69
    /// assert_eq!(vat.pence(), 2469);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps large quote totals from overflowing before the division
        let tax_pence = (self.0 as i128 * rate.bps() as i128 + 5000).div_euclid(10000);
        Money::from_pence(tax_pence as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as pounds, e.g. `£10.99` or `-£5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
