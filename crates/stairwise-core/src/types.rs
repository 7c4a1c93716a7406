//! # Domain Types
//!
//! Small value types shared by every pricing lane.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │      Lane       │   │ BreakdownEntry  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Subtotal       │   │  label          │       │
//! │  │  2000 = 20%     │   │  Addon          │   │  amount (Money) │       │
//! │  │                 │   │  Delivery, Tax  │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 2000 bps = 20% (UK standard VAT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Lane
// =============================================================================

/// One of the four independent pricing pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    /// Staircase build: floor-to-floor base plus every structural rule.
    Subtotal,
    /// Optional extras: delivery crew, fixing kits, packing.
    Addon,
    /// Delivery charge for the chosen zone.
    Delivery,
    /// VAT over the other three lanes.
    Tax,
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lane::Subtotal => write!(f, "subtotal"),
            Lane::Addon => write!(f, "addon"),
            Lane::Delivery => write!(f, "delivery"),
            Lane::Tax => write!(f, "tax"),
        }
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// One visible line of a price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreakdownEntry {
    /// Stable rule label, e.g. `"treads_material"`.
    pub label: String,
    /// The rule's own contribution (not the running total).
    pub amount: Money,
}

impl BreakdownEntry {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        BreakdownEntry {
            label: label.into(),
            amount,
        }
    }
}

/// Ordered breakdown, root first, then each decorator in registration order.
pub type Breakdown = Vec<BreakdownEntry>;

/// Sums the amounts of a breakdown, or `None` on overflow.
pub fn breakdown_total(breakdown: &[BreakdownEntry]) -> Option<Money> {
    Money::checked_sum(breakdown.iter().map(|entry| entry.amount))
}

// =============================================================================
// Unit Tests
// =============================================================================
