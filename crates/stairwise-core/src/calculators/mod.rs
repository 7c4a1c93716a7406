//! # Calculators
//!
//! Every pricing rule, grouped by the part of the staircase it prices.
//!
//! ## Rule Families
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base        FloorToFloorBase, AddonsBase, DeliveryBase, TaxBase        │
//! │  structure   risers, treads, straight/winder steps, feature treads,     │
//! │              stringers                                                  │
//! │  balustrade  newel posts and caps, handrail, baserail, spindles         │
//! │  addons      two-men delivery, fixing kits, extra packing, zipbolts     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Base calculators are chain roots. All others are decorators built by
//! [`crate::chain`] in a fixed order per lane.

pub mod addons;
pub mod balustrade;
pub mod base;
pub mod structure;

pub use addons::{CutToSizeZipbolt, ExtraPacking, FixingKits, TwoMenDelivery};
pub use balustrade::{
    AdditionalBaserail, AdditionalHandrail, AdditionalNewelPosts, AdditionalSpindles, Baserail,
    Handrail, NewelCaps, NewelPosts, Spindles,
};
pub use base::{AddonsBase, DeliveryBase, FloorToFloorBase, TaxBase};
pub use structure::{
    FeatureTreads, RisersMaterial, StraightBase, Stringers, TreadsMaterial, TreadsProfile,
    WindersBase,
};

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::prices::PriceList;
use crate::staircase::Staircase;

/// Configuration shared by the subtotal, addon and delivery lanes.
#[derive(Debug, Clone, Copy)]
pub struct StaircaseContext<'a> {
    pub staircase: &'a Staircase,
    pub prices: &'a PriceList,
}

impl<'a> StaircaseContext<'a> {
    pub fn new(staircase: &'a Staircase, prices: &'a PriceList) -> Self {
        StaircaseContext { staircase, prices }
    }
}

/// `unit × quantity`, or no contribution when the quantity is zero.
pub(crate) fn per_unit(
    rule: &'static str,
    unit: Money,
    quantity: u32,
) -> PricingResult<Option<Money>> {
    if quantity == 0 {
        return Ok(None);
    }

    unit.checked_mul(quantity as i64)
        .map(Some)
        .ok_or(PricingError::Overflow { rule })
}

/// A per-metre rate over `length_mm`, or no contribution for zero length.
pub(crate) fn per_length(
    rule: &'static str,
    rate: Money,
    length_mm: u32,
) -> PricingResult<Option<Money>> {
    if length_mm == 0 {
        return Ok(None);
    }

    rate.per_metre(length_mm)
        .map(Some)
        .ok_or(PricingError::Overflow { rule })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::component::{PriceComponent, PricingRule};
    use crate::staircase::fixtures;

    /// Evaluates a single rule as a chain root against a JSON fixture.
    pub fn price_of<R>(rule: R, staircase: serde_json::Value) -> PricingResult<Option<Money>>
    where
        R: for<'a> PricingRule<StaircaseContext<'a>>,
    {
        price_with(rule, staircase, &PriceList::default())
    }

    /// Like [`price_of`], against a custom rate card.
    pub fn price_with<R>(
        rule: R,
        staircase: serde_json::Value,
        prices: &PriceList,
    ) -> PricingResult<Option<Money>>
    where
        R: for<'a> PricingRule<StaircaseContext<'a>>,
    {
        let staircase = Staircase::from_value(staircase).expect("fixture decodes");
        evaluate(rule, &staircase, prices)
    }

    /// Evaluates a rule against an already-built staircase, validated or not.
    pub fn evaluate<R>(
        rule: R,
        staircase: &Staircase,
        prices: &PriceList,
    ) -> PricingResult<Option<Money>>
    where
        R: for<'a> PricingRule<StaircaseContext<'a>>,
    {
        let context = StaircaseContext::new(staircase, prices);
        rule.contribution(&context, None::<&dyn PriceComponent>)
    }

    pub fn full() -> serde_json::Value {
        fixtures::full()
    }

    pub fn minimal() -> serde_json::Value {
        fixtures::minimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_unit() {
        assert_eq!(per_unit("x", Money::from_pence(250), 0).unwrap(), None);
        assert_eq!(
            per_unit("x", Money::from_pence(250), 4).unwrap(),
            Some(Money::from_pence(1000))
        );
        assert!(matches!(
            per_unit("x", Money::from_pence(i64::MAX), 2),
            Err(PricingError::Overflow { rule: "x" })
        ));
    }

    #[test]
    fn test_per_length() {
        assert_eq!(per_length("x", Money::from_pence(2000), 0).unwrap(), None);
        assert_eq!(
            per_length("x", Money::from_pence(2000), 1500).unwrap(),
            Some(Money::from_pence(3000))
        );
    }
}
