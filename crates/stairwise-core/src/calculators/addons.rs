//! Addon rules. Each is a flat charge the customer opts into.

use crate::calculators::{per_unit, StaircaseContext};
use crate::component::{PriceComponent, PricingRule};
use crate::error::PricingResult;
use crate::money::Money;

fn flag(enabled: bool, charge: Money) -> PricingResult<Option<Money>> {
    Ok(enabled.then_some(charge))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TwoMenDelivery;

impl PricingRule<StaircaseContext<'_>> for TwoMenDelivery {
    fn label(&self) -> &'static str {
        "two_men_delivery"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        flag(ctx.staircase.addons.two_men_delivery, ctx.prices.two_men_delivery)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FixingKits;

impl PricingRule<StaircaseContext<'_>> for FixingKits {
    fn label(&self) -> &'static str {
        "fixing_kits"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        per_unit(self.label(), ctx.prices.fixing_kit, ctx.staircase.addons.fixing_kits)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ExtraPacking;

impl PricingRule<StaircaseContext<'_>> for ExtraPacking {
    fn label(&self) -> &'static str {
        "extra_packing"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        flag(ctx.staircase.addons.extra_packing, ctx.prices.extra_packing)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CutToSizeZipbolt;

impl PricingRule<StaircaseContext<'_>> for CutToSizeZipbolt {
    fn label(&self) -> &'static str {
        "cut_to_size_zipbolt"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        flag(ctx.staircase.addons.cut_to_size_zipbolt, ctx.prices.cut_to_size_zipbolt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::testing::{full, minimal, price_of};

    #[test]
    fn test_addons_enabled() {
        assert_eq!(price_of(TwoMenDelivery, full()).unwrap(), Some(Money::from_pence(6000)));
        assert_eq!(price_of(FixingKits, full()).unwrap(), Some(Money::from_pence(5000)));
        assert_eq!(price_of(ExtraPacking, full()).unwrap(), Some(Money::from_pence(2500)));
        assert_eq!(price_of(CutToSizeZipbolt, full()).unwrap(), Some(Money::from_pence(3500)));
    }

    #[test]
    fn test_addons_off() {
        assert_eq!(price_of(TwoMenDelivery, minimal()).unwrap(), None);
        assert_eq!(price_of(FixingKits, minimal()).unwrap(), None);
        assert_eq!(price_of(ExtraPacking, minimal()).unwrap(), None);
        assert_eq!(price_of(CutToSizeZipbolt, minimal()).unwrap(), None);
    }
}
