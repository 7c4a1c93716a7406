//! Lane roots. Each one starts a chain and has no predecessor.

use crate::calculators::{per_unit, StaircaseContext};
use crate::component::{PriceComponent, PricingRule};
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::prices::PriceList;
use crate::staircase::DeliveryZone;
use crate::tax::TaxContext;

/// Subtotal root: structural cost of climbing the floor-to-floor height.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloorToFloorBase;

impl PricingRule<StaircaseContext<'_>> for FloorToFloorBase {
    fn label(&self) -> &'static str {
        "floor_to_floor"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        per_unit(self.label(), ctx.prices.per_rise, ctx.staircase.rises_for_height())
    }
}

/// Addon root: a hidden zero accumulator.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddonsBase;

impl PricingRule<StaircaseContext<'_>> for AddonsBase {
    fn label(&self) -> &'static str {
        "addons"
    }

    fn contribution(
        &self,
        _ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        Ok(None)
    }
}

/// Delivery root: the charge for the configured zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeliveryBase;

impl PricingRule<StaircaseContext<'_>> for DeliveryBase {
    fn label(&self) -> &'static str {
        "delivery"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let zone = ctx.staircase.delivery.zone;
        if zone == DeliveryZone::Collection {
            return Ok(None);
        }

        let charge = PriceList::rate(&ctx.prices.delivery_zones, self.label(), zone.as_str())?;
        Ok(Some(charge))
    }
}

/// Tax root: VAT on the injected subtotal (and delivery, when taxable).
#[derive(Debug, Default, Clone, Copy)]
pub struct TaxBase;

impl PricingRule<TaxContext> for TaxBase {
    fn label(&self) -> &'static str {
        "vat"
    }

    fn contribution(
        &self,
        ctx: &TaxContext,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        if ctx.vat_rate.is_zero() {
            return Ok(None);
        }

        let taxable = ctx
            .taxable()
            .ok_or(PricingError::Overflow { rule: self.label() })?;
        Ok(Some(taxable.calculate_tax(ctx.vat_rate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::testing::{full, minimal, price_of};
    use crate::tax::TaxSettings;
    use crate::types::TaxRate;
    use serde_json::json;

    #[test]
    fn test_floor_to_floor_base() {
        // 12 rises × £45.00
        assert_eq!(
            price_of(FloorToFloorBase, minimal()).unwrap(),
            Some(Money::from_pence(54000))
        );
    }

    #[test]
    fn test_addons_base_is_hidden() {
        assert_eq!(price_of(AddonsBase, full()).unwrap(), None);
    }

    #[test]
    fn test_delivery_base() {
        assert_eq!(
            price_of(DeliveryBase, full()).unwrap(),
            Some(Money::from_pence(8500))
        );
        // Collection has no delivery charge
        assert_eq!(price_of(DeliveryBase, minimal()).unwrap(), None);

        let mut local = minimal();
        local["delivery"] = json!({ "zone": "local" });
        assert_eq!(
            price_of(DeliveryBase, local).unwrap(),
            Some(Money::from_pence(4500))
        );
    }

    #[test]
    fn test_tax_base() {
        let context = TaxContext::new(
            &TaxSettings::default(),
            Money::from_pence(100_000),
            Money::from_pence(8500),
        );
        assert_eq!(
            TaxBase.contribution(&context, None).unwrap(),
            Some(Money::from_pence(21_700))
        );

        let untaxed = TaxContext {
            vat_rate: TaxRate::zero(),
            ..context
        };
        assert_eq!(TaxBase.contribution(&untaxed, None).unwrap(), None);
    }
}
