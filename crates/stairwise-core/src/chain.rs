//! # Chain Builders
//!
//! Builds one pricing chain per lane: the lane's base calculator, wrapped by
//! each registered decorator in a fixed order.
//!
//! ## Building a Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stages = [RisersMaterial, TreadsProfile, ..., Stringers]               │
//! │                                                                         │
//! │  chain := FloorToFloorBase                                              │
//! │  for stage in stages:                                                   │
//! │      chain := stage(chain, config)      ← never skipped                 │
//! │  return chain                           ← terminal component            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Registration order is the breakdown order shown to customers. A rule that
//! does not apply still sits in the chain and contributes nothing, so the
//! chain's shape is the same for every configuration.

use tracing::debug;

use crate::calculators::{
    AdditionalBaserail, AdditionalHandrail, AdditionalNewelPosts, AdditionalSpindles, AddonsBase,
    Baserail, CutToSizeZipbolt, DeliveryBase, ExtraPacking, FeatureTreads, FixingKits,
    FloorToFloorBase, Handrail, NewelCaps, NewelPosts, RisersMaterial, Spindles,
    StaircaseContext, StraightBase, Stringers, TaxBase, TreadsMaterial, TreadsProfile,
    TwoMenDelivery, WindersBase,
};
use crate::component::{Node, PriceComponent, PricingRule};
use crate::tax::TaxContext;
use crate::types::Lane;

/// A boxed chain with configuration borrowed for `'a`.
pub type Chain<'a> = Box<dyn PriceComponent + 'a>;

/// A decorator constructor: wraps the chain so far.
pub type Stage<'a, C> = fn(Chain<'a>, &'a C) -> Chain<'a>;

/// Wraps `predecessor` with rule `R`. Coerces to a [`Stage`].
pub fn stage<'a, C, R>(predecessor: Chain<'a>, config: &'a C) -> Chain<'a>
where
    C: ?Sized + 'a,
    R: PricingRule<C> + Default + 'a,
{
    Box::new(Node::wrap(R::default(), predecessor, config))
}

/// Folds `stages` over `base`, returning the terminal component.
pub fn build_chain<'a, C: ?Sized>(
    base: Chain<'a>,
    config: &'a C,
    stages: &[Stage<'a, C>],
) -> Chain<'a> {
    stages.iter().fold(base, |chain, wrap| wrap(chain, config))
}

fn root<'a, C, R>(rule: R, config: &'a C) -> Chain<'a>
where
    C: ?Sized + 'a,
    R: PricingRule<C> + 'a,
{
    Box::new(Node::root(rule, config))
}

// =============================================================================
// Lanes
// =============================================================================

/// Subtotal lane: floor-to-floor base and every structural rule.
pub fn subtotal_chain<'a>(ctx: &'a StaircaseContext<'_>) -> Chain<'a> {
    let stages: [Stage<'a, StaircaseContext<'_>>; 16] = [
        stage::<_, RisersMaterial>,
        stage::<_, TreadsProfile>,
        stage::<_, TreadsMaterial>,
        stage::<_, StraightBase>,
        stage::<_, WindersBase>,
        stage::<_, FeatureTreads>,
        stage::<_, NewelPosts>,
        stage::<_, AdditionalNewelPosts>,
        stage::<_, NewelCaps>,
        stage::<_, Handrail>,
        stage::<_, AdditionalHandrail>,
        stage::<_, Baserail>,
        stage::<_, AdditionalBaserail>,
        stage::<_, Spindles>,
        stage::<_, AdditionalSpindles>,
        stage::<_, Stringers>,
    ];

    debug!(lane = %Lane::Subtotal, stages = stages.len(), "Building pricing chain");
    build_chain(root(FloorToFloorBase, ctx), ctx, &stages)
}

/// Addon lane: a hidden zero base and the optional extras.
pub fn addon_chain<'a>(ctx: &'a StaircaseContext<'_>) -> Chain<'a> {
    let stages: [Stage<'a, StaircaseContext<'_>>; 4] = [
        stage::<_, TwoMenDelivery>,
        stage::<_, FixingKits>,
        stage::<_, ExtraPacking>,
        stage::<_, CutToSizeZipbolt>,
    ];

    debug!(lane = %Lane::Addon, stages = stages.len(), "Building pricing chain");
    build_chain(root(AddonsBase, ctx), ctx, &stages)
}

/// Delivery lane: the zone charge, no decorators.
pub fn delivery_chain<'a>(ctx: &'a StaircaseContext<'_>) -> Chain<'a> {
    let stages: [Stage<'a, StaircaseContext<'_>>; 0] = [];

    debug!(lane = %Lane::Delivery, stages = stages.len(), "Building pricing chain");
    build_chain(root(DeliveryBase, ctx), ctx, &stages)
}

/// Tax lane: VAT over an injected context, no decorators.
pub fn tax_chain(ctx: &TaxContext) -> Chain<'_> {
    let stages: [Stage<'_, TaxContext>; 0] = [];

    debug!(lane = %Lane::Tax, stages = stages.len(), "Building pricing chain");
    build_chain(root(TaxBase, ctx), ctx, &stages)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::tests::{Counted, Fixed};
    use crate::money::Money;
    use crate::prices::PriceList;
    use crate::staircase::{fixtures, Staircase};
    use crate::types::breakdown_total;

    const SUBTOTAL_ORDER: [&str; 17] = [
        "floor_to_floor",
        "risers_material",
        "treads_profile",
        "treads_material",
        "straight_base",
        "winders_base",
        "feature_treads",
        "newel_posts",
        "additional_newel_posts",
        "newel_caps",
        "handrail",
        "additional_handrail",
        "baserail",
        "additional_baserail",
        "spindles",
        "additional_spindles",
        "stringers",
    ];

    fn labels(chain: &Chain<'_>) -> Vec<String> {
        chain
            .price_breakdown()
            .unwrap()
            .into_iter()
            .map(|entry| entry.label)
            .collect()
    }

    #[derive(Default)]
    struct Ten;

    impl PricingRule<Counted> for Ten {
        fn label(&self) -> &'static str {
            "ten"
        }

        fn contribution(
            &self,
            _config: &Counted,
            _predecessor: Option<&dyn PriceComponent>,
        ) -> crate::error::PricingResult<Option<Money>> {
            Ok(Some(Money::from_pence(10)))
        }
    }

    #[test]
    fn test_build_chain_folds_in_order() {
        let config = Counted::default();
        let stages: [Stage<'_, Counted>; 3] = [stage::<_, Ten>, stage::<_, Ten>, stage::<_, Ten>];
        let chain = build_chain(root(Fixed("base", Some(100)), &config), &config, &stages);

        assert_eq!(chain.price().unwrap(), Money::from_pence(130));
        assert_eq!(chain.price_breakdown().unwrap().len(), 4);
    }

    #[derive(Default)]
    struct Absent;

    impl PricingRule<Counted> for Absent {
        fn label(&self) -> &'static str {
            "absent"
        }

        fn contribution(
            &self,
            _config: &Counted,
            _predecessor: Option<&dyn PriceComponent>,
        ) -> crate::error::PricingResult<Option<Money>> {
            Ok(None)
        }
    }

    #[test]
    fn test_single_base_rule_with_inapplicable_stages() {
        let config = Counted::default();
        let stages: [Stage<'_, Counted>; 3] =
            [stage::<_, Absent>, stage::<_, Absent>, stage::<_, Absent>];
        let chain = build_chain(
            root(Fixed("base", Some(10000)), &config),
            &config,
            &stages,
        );

        assert_eq!(chain.price().unwrap(), Money::from_pence(10_000));
        assert_eq!(
            chain.price_breakdown().unwrap(),
            vec![crate::types::BreakdownEntry::new("base", Money::from_pence(10_000))]
        );
    }

    #[test]
    fn test_build_chain_without_stages_is_base() {
        let config = Counted::default();
        let chain = build_chain(root(Fixed("base", Some(100)), &config), &config, &[]);
        assert_eq!(chain.label(), "base");
        assert_eq!(chain.price().unwrap(), Money::from_pence(100));
    }

    #[test]
    fn test_subtotal_registration_order() {
        let staircase = Staircase::from_value(fixtures::full()).unwrap();
        let prices = PriceList::default();
        let ctx = StaircaseContext::new(&staircase, &prices);
        let chain = subtotal_chain(&ctx);

        assert_eq!(labels(&chain), SUBTOTAL_ORDER);
        assert_eq!(chain.label(), "stringers");
    }

    #[test]
    fn test_subtotal_minimal_omits_inapplicable_rules() {
        let staircase = Staircase::from_value(fixtures::minimal()).unwrap();
        let prices = PriceList::default();
        let ctx = StaircaseContext::new(&staircase, &prices);
        let chain = subtotal_chain(&ctx);

        assert_eq!(
            labels(&chain),
            vec!["floor_to_floor", "treads_material", "straight_base", "stringers"]
        );
        // 12 rises × £45 + 12 pine treads × £22 + 12 steps × £18 + 24 × £8.50
        assert_eq!(chain.price().unwrap(), Money::from_pence(54000 + 26400 + 21600 + 20400));
    }

    #[test]
    fn test_addon_chain_hides_base() {
        let staircase = Staircase::from_value(fixtures::full()).unwrap();
        let prices = PriceList::default();
        let ctx = StaircaseContext::new(&staircase, &prices);
        let chain = addon_chain(&ctx);

        assert_eq!(
            labels(&chain),
            vec!["two_men_delivery", "fixing_kits", "extra_packing", "cut_to_size_zipbolt"]
        );
        assert_eq!(chain.price().unwrap(), Money::from_pence(6000 + 5000 + 2500 + 3500));
    }

    #[test]
    fn test_breakdown_sums_to_total_for_every_lane() {
        let staircase = Staircase::from_value(fixtures::full()).unwrap();
        let prices = PriceList::default();
        let ctx = StaircaseContext::new(&staircase, &prices);

        for chain in [subtotal_chain(&ctx), addon_chain(&ctx), delivery_chain(&ctx)] {
            let breakdown = chain.price_breakdown().unwrap();
            assert_eq!(breakdown_total(&breakdown), Some(chain.price().unwrap()));
        }
    }

    #[test]
    fn test_tax_chain() {
        let context = TaxContext::new(
            &crate::tax::TaxSettings::default(),
            Money::from_pence(50_000),
            Money::from_pence(0),
        );
        let chain = tax_chain(&context);
        assert_eq!(chain.price().unwrap(), Money::from_pence(10_000));
        assert_eq!(labels(&chain), vec!["vat"]);
    }
}
