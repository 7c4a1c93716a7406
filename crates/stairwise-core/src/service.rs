//! # Price Calculator Service
//!
//! The orchestrator external callers price staircases through.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal(s)         ──► subtotal_chain ──► price()                     │
//! │  addon_subtotal(s)   ──► addon_chain    ──► price()                     │
//! │  delivery(s)         ──► delivery_chain ──► price()                     │
//! │  tax(s)              ──► subtotal + addon, delivery ──► TaxContext      │
//! │                          ──► tax_chain ──► price()                      │
//! │                                                                         │
//! │  price_breakdown(s)  ──► subtotal ++ addon ++ delivery (no tax)         │
//! │  addon_breakdown(s)  ──► addon                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call builds fresh chains; nothing is cached between calls. Callers
//! that need several lanes for one request should use [`LaneResult`]s from
//! [`PriceCalculatorService::evaluate`] and [`PriceCalculatorService::evaluate_tax`]
//! so no lane is evaluated twice.

use tracing::debug;

use crate::calculators::StaircaseContext;
use crate::chain::{addon_chain, delivery_chain, subtotal_chain, tax_chain, Chain};
use crate::component::PriceComponent;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::prices::PriceList;
use crate::staircase::Staircase;
use crate::tax::{TaxContext, TaxSettings};
use crate::types::{Breakdown, Lane};

/// Overflow label for the cross-lane sum that seeds the tax lane.
const TAX_CONTEXT: &str = "tax_context";

/// A lane's total and its breakdown, read from one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneResult {
    pub lane: Lane,
    pub total: Money,
    pub breakdown: Breakdown,
}

impl LaneResult {
    fn from_chain(lane: Lane, chain: &dyn PriceComponent) -> PricingResult<Self> {
        let total = chain.price()?;
        let breakdown = chain.price_breakdown()?;
        debug!(lane = %lane, total = %total, entries = breakdown.len(), "Lane priced");
        Ok(LaneResult {
            lane,
            total,
            breakdown,
        })
    }
}

/// Prices staircases against a price list and tax settings.
#[derive(Debug, Clone, Default)]
pub struct PriceCalculatorService {
    prices: PriceList,
    tax: TaxSettings,
}

impl PriceCalculatorService {
    pub fn new(prices: PriceList, tax: TaxSettings) -> Self {
        PriceCalculatorService { prices, tax }
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    pub fn tax_settings(&self) -> &TaxSettings {
        &self.tax
    }

    // =========================================================================
    // Lane Totals
    // =========================================================================

    /// Total of the subtotal lane.
    pub fn subtotal(&self, staircase: &Staircase) -> PricingResult<Money> {
        let ctx = StaircaseContext::new(staircase, &self.prices);
        self.total(Lane::Subtotal, subtotal_chain(&ctx))
    }

    /// Total of the addon lane.
    pub fn addon_subtotal(&self, staircase: &Staircase) -> PricingResult<Money> {
        let ctx = StaircaseContext::new(staircase, &self.prices);
        self.total(Lane::Addon, addon_chain(&ctx))
    }

    /// Total of the delivery lane.
    pub fn delivery(&self, staircase: &Staircase) -> PricingResult<Money> {
        let ctx = StaircaseContext::new(staircase, &self.prices);
        self.total(Lane::Delivery, delivery_chain(&ctx))
    }

    /// Total of the tax lane.
    ///
    /// Subtotal and addon lanes are evaluated first, then delivery; their
    /// totals seed the tax context. Any failure in those lanes aborts here.
    pub fn tax(&self, staircase: &Staircase) -> PricingResult<Money> {
        let context = self.tax_context_for(staircase)?;
        self.tax_with(&context)
    }

    /// Tax lane total for an already-assembled context.
    pub fn tax_with(&self, context: &TaxContext) -> PricingResult<Money> {
        self.total(Lane::Tax, tax_chain(context))
    }

    /// Builds the tax context from the three other lanes' totals.
    ///
    /// Fails with [`PricingError::Overflow`] if subtotal plus addons does not
    /// fit in [`Money`].
    pub fn tax_context(
        &self,
        subtotal: Money,
        addon_subtotal: Money,
        delivery: Money,
    ) -> PricingResult<TaxContext> {
        let goods = subtotal
            .checked_add(addon_subtotal)
            .ok_or(PricingError::Overflow { rule: TAX_CONTEXT })?;
        Ok(TaxContext::new(&self.tax, goods, delivery))
    }

    fn tax_context_for(&self, staircase: &Staircase) -> PricingResult<TaxContext> {
        let subtotal = self.subtotal(staircase)?;
        let addon_subtotal = self.addon_subtotal(staircase)?;
        let delivery = self.delivery(staircase)?;
        self.tax_context(subtotal, addon_subtotal, delivery)
    }

    fn total(&self, lane: Lane, chain: Chain<'_>) -> PricingResult<Money> {
        let total = chain.price()?;
        debug!(lane = %lane, total = %total, "Lane total computed");
        Ok(total)
    }

    // =========================================================================
    // Breakdowns
    // =========================================================================

    /// Subtotal, then addon, then delivery entries. Tax is not included.
    pub fn price_breakdown(&self, staircase: &Staircase) -> PricingResult<Breakdown> {
        let ctx = StaircaseContext::new(staircase, &self.prices);
        let mut breakdown = subtotal_chain(&ctx).price_breakdown()?;
        breakdown.extend(addon_chain(&ctx).price_breakdown()?);
        breakdown.extend(delivery_chain(&ctx).price_breakdown()?);
        Ok(breakdown)
    }

    /// The addon lane's breakdown alone.
    pub fn addon_breakdown(&self, staircase: &Staircase) -> PricingResult<Breakdown> {
        let ctx = StaircaseContext::new(staircase, &self.prices);
        let breakdown = addon_chain(&ctx).price_breakdown()?;
        Ok(breakdown)
    }

    // =========================================================================
    // Whole-Lane Evaluation
    // =========================================================================

    /// Evaluates one lane, returning its total and breakdown together.
    ///
    /// For [`Lane::Tax`] the three other lanes are evaluated to seed the
    /// context; use [`Self::evaluate_tax`] when their totals are already known.
    pub fn evaluate(&self, lane: Lane, staircase: &Staircase) -> PricingResult<LaneResult> {
        let ctx = StaircaseContext::new(staircase, &self.prices);
        let chain = match lane {
            Lane::Subtotal => subtotal_chain(&ctx),
            Lane::Addon => addon_chain(&ctx),
            Lane::Delivery => delivery_chain(&ctx),
            Lane::Tax => {
                let context = self.tax_context_for(staircase)?;
                return self.evaluate_tax(&context);
            }
        };
        LaneResult::from_chain(lane, chain.as_ref())
    }

    /// Evaluates the tax lane for an already-assembled context.
    pub fn evaluate_tax(&self, context: &TaxContext) -> PricingResult<LaneResult> {
        LaneResult::from_chain(Lane::Tax, tax_chain(context).as_ref())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
