//! Structural rules: the flight itself.

use crate::calculators::{per_unit, StaircaseContext};
use crate::component::{PriceComponent, PricingRule};
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::prices::PriceList;
use crate::staircase::TreadProfile;
use crate::STRINGERS_PER_FLIGHT;

/// Riser boards; open-riser staircases have none.
#[derive(Debug, Default, Clone, Copy)]
pub struct RisersMaterial;

impl PricingRule<StaircaseContext<'_>> for RisersMaterial {
    fn label(&self) -> &'static str {
        "risers_material"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(material) = ctx.staircase.risers.material else {
            return Ok(None);
        };

        let unit = PriceList::rate(&ctx.prices.riser_materials, self.label(), material.as_str())?;
        per_unit(self.label(), unit, ctx.staircase.riser_count())
    }
}

/// Tread edge upcharge. A square edge is standard.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreadsProfile;

impl PricingRule<StaircaseContext<'_>> for TreadsProfile {
    fn label(&self) -> &'static str {
        "treads_profile"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let profile = ctx.staircase.treads.profile;
        if profile == TreadProfile::Square {
            return Ok(None);
        }

        let unit = PriceList::rate(&ctx.prices.tread_profiles, self.label(), profile.as_str())?;
        per_unit(self.label(), unit, ctx.staircase.total_steps())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TreadsMaterial;

impl PricingRule<StaircaseContext<'_>> for TreadsMaterial {
    fn label(&self) -> &'static str {
        "treads_material"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let material = ctx.staircase.treads.material;
        let unit = PriceList::rate(&ctx.prices.tread_materials, self.label(), material.as_str())?;
        per_unit(self.label(), unit, ctx.staircase.total_steps())
    }
}

/// Labour for straight steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct StraightBase;

impl PricingRule<StaircaseContext<'_>> for StraightBase {
    fn label(&self) -> &'static str {
        "straight_base"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        per_unit(self.label(), ctx.prices.straight_step, ctx.staircase.flight.straight_steps)
    }
}

/// Labour for winder steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindersBase;

impl PricingRule<StaircaseContext<'_>> for WindersBase {
    fn label(&self) -> &'static str {
        "winders_base"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        per_unit(self.label(), ctx.prices.winder_step, ctx.staircase.flight.winders)
    }
}

/// Shaped bottom treads (bullnose, curtail).
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureTreads;

impl PricingRule<StaircaseContext<'_>> for FeatureTreads {
    fn label(&self) -> &'static str {
        "feature_treads"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(feature) = &ctx.staircase.feature_treads else {
            return Ok(None);
        };
        if feature.count == 0 {
            return Ok(None);
        }

        let kind = feature.kind.as_str();
        let unit = PriceList::rate(&ctx.prices.feature_treads, self.label(), kind)?;
        per_unit(self.label(), unit, feature.count)
    }
}

/// Both stringers, priced per step.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stringers;

impl PricingRule<StaircaseContext<'_>> for Stringers {
    fn label(&self) -> &'static str {
        "stringers"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let material = ctx.staircase.stringers.material;
        let unit = PriceList::rate(&ctx.prices.stringers, self.label(), material.as_str())?;
        let count = ctx
            .staircase
            .total_steps()
            .checked_mul(STRINGERS_PER_FLIGHT)
            .ok_or(PricingError::Overflow { rule: self.label() })?;
        per_unit(self.label(), unit, count)
    }
}
