//! Balustrade rules: newels, caps, rails and spindles.
//!
//! Rail lengths follow the pitch of the flight: [`STEP_PITCH_LENGTH_MM`] of
//! rail per step, per balustraded side.

use crate::calculators::{per_length, per_unit, StaircaseContext};
use crate::component::{PriceComponent, PricingRule};
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::prices::PriceList;
use crate::staircase::Staircase;
use crate::{SPINDLES_PER_STEP, STEP_PITCH_LENGTH_MM};

/// Raked rail length across `sides` balustraded sides of the flight.
fn rail_length_mm(staircase: &Staircase, sides: u8, rule: &'static str) -> PricingResult<u32> {
    staircase
        .total_steps()
        .checked_mul(STEP_PITCH_LENGTH_MM)
        .and_then(|length| length.checked_mul(u32::from(sides)))
        .ok_or(PricingError::Overflow { rule })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NewelPosts;

impl PricingRule<StaircaseContext<'_>> for NewelPosts {
    fn label(&self) -> &'static str {
        "newel_posts"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(newels) = &ctx.staircase.newel_posts else {
            return Ok(None);
        };
        if newels.count == 0 {
            return Ok(None);
        }

        let unit = PriceList::rate(&ctx.prices.newel_posts, self.label(), newels.style.as_str())?;
        per_unit(self.label(), unit, newels.count)
    }
}

/// Extra newels beyond the flight's own, in the same style.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdditionalNewelPosts;

impl PricingRule<StaircaseContext<'_>> for AdditionalNewelPosts {
    fn label(&self) -> &'static str {
        "additional_newel_posts"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let extra = ctx.staircase.additional_newel_posts;
        let Some(newels) = &ctx.staircase.newel_posts else {
            return Ok(None);
        };
        if extra == 0 {
            return Ok(None);
        }

        let unit = PriceList::rate(&ctx.prices.newel_posts, self.label(), newels.style.as_str())?;
        per_unit(self.label(), unit, extra)
    }
}

/// One cap per newel post, additional posts included.
#[derive(Debug, Default, Clone, Copy)]
pub struct NewelCaps;

impl PricingRule<StaircaseContext<'_>> for NewelCaps {
    fn label(&self) -> &'static str {
        "newel_caps"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(caps) = &ctx.staircase.newel_caps else {
            return Ok(None);
        };
        let count = ctx.staircase.newel_count();
        if count == 0 {
            return Ok(None);
        }

        let unit = PriceList::rate(&ctx.prices.newel_caps, self.label(), caps.style.as_str())?;
        per_unit(self.label(), unit, count)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Handrail;

impl PricingRule<StaircaseContext<'_>> for Handrail {
    fn label(&self) -> &'static str {
        "handrail"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(rail) = &ctx.staircase.handrail else {
            return Ok(None);
        };
        if rail.sides == 0 {
            return Ok(None);
        }

        let rate = PriceList::rate(
            &ctx.prices.handrail_per_metre,
            self.label(),
            rail.material.as_str(),
        )?;
        let length = rail_length_mm(ctx.staircase, rail.sides, self.label())?;
        per_length(self.label(), rate, length)
    }
}

/// Loose handrail for landings, in the flight's handrail material.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdditionalHandrail;

impl PricingRule<StaircaseContext<'_>> for AdditionalHandrail {
    fn label(&self) -> &'static str {
        "additional_handrail"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(rail) = &ctx.staircase.handrail else {
            return Ok(None);
        };
        if ctx.staircase.additional_handrail_mm == 0 {
            return Ok(None);
        }

        let rate = PriceList::rate(
            &ctx.prices.handrail_per_metre,
            self.label(),
            rail.material.as_str(),
        )?;
        per_length(self.label(), rate, ctx.staircase.additional_handrail_mm)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Baserail;

impl PricingRule<StaircaseContext<'_>> for Baserail {
    fn label(&self) -> &'static str {
        "baserail"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(rail) = &ctx.staircase.baserail else {
            return Ok(None);
        };
        if rail.sides == 0 {
            return Ok(None);
        }

        let rate = PriceList::rate(
            &ctx.prices.baserail_per_metre,
            self.label(),
            rail.material.as_str(),
        )?;
        let length = rail_length_mm(ctx.staircase, rail.sides, self.label())?;
        per_length(self.label(), rate, length)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AdditionalBaserail;

impl PricingRule<StaircaseContext<'_>> for AdditionalBaserail {
    fn label(&self) -> &'static str {
        "additional_baserail"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(rail) = &ctx.staircase.baserail else {
            return Ok(None);
        };
        if ctx.staircase.additional_baserail_mm == 0 {
            return Ok(None);
        }

        let rate = PriceList::rate(
            &ctx.prices.baserail_per_metre,
            self.label(),
            rail.material.as_str(),
        )?;
        per_length(self.label(), rate, ctx.staircase.additional_baserail_mm)
    }
}

/// Spindles under every handrail run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Spindles;

impl PricingRule<StaircaseContext<'_>> for Spindles {
    fn label(&self) -> &'static str {
        "spindles"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(spindles) = &ctx.staircase.spindles else {
            return Ok(None);
        };
        let sides = ctx.staircase.handrail.as_ref().map_or(0, |rail| u32::from(rail.sides));
        let count = ctx
            .staircase
            .total_steps()
            .checked_mul(SPINDLES_PER_STEP * sides)
            .ok_or(PricingError::Overflow { rule: self.label() })?;
        if count == 0 {
            return Ok(None);
        }

        let unit = PriceList::rate(&ctx.prices.spindles, self.label(), spindles.style.as_str())?;
        per_unit(self.label(), unit, count)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AdditionalSpindles;

impl PricingRule<StaircaseContext<'_>> for AdditionalSpindles {
    fn label(&self) -> &'static str {
        "additional_spindles"
    }

    fn contribution(
        &self,
        ctx: &StaircaseContext<'_>,
        _predecessor: Option<&dyn PriceComponent>,
    ) -> PricingResult<Option<Money>> {
        let Some(spindles) = &ctx.staircase.spindles else {
            return Ok(None);
        };
        if ctx.staircase.additional_spindles == 0 {
            return Ok(None);
        }

        let unit = PriceList::rate(&ctx.prices.spindles, self.label(), spindles.style.as_str())?;
        per_unit(self.label(), unit, ctx.staircase.additional_spindles)
    }
}
