//! # Quote Pricing
//!
//! Prices a stored quote: the staircase JSON is decoded once, each lane is
//! evaluated once, and the tax lane is seeded from the lane results already
//! in hand.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quote { id, staircase JSON }                                           │
//! │     │                                                                   │
//! │     ├── validate id (UUID)                                              │
//! │     ├── Staircase::from_json  ──► ConfigurationError aborts here        │
//! │     │                                                                   │
//! │     ├── evaluate(Subtotal) ─┐                                           │
//! │     ├── evaluate(Addon) ────┼──► tax_context ──► evaluate_tax           │
//! │     ├── evaluate(Delivery) ─┘                                           │
//! │     │                                                                   │
//! │     └── QuoteSummary (all lanes, both breakdowns, grand total)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No partial summary is ever returned: the first failing lane aborts.

use serde::{Deserialize, Serialize};
use stairwise_core::validation::validate_uuid;
use stairwise_core::{
    Breakdown, Lane, LaneResult, Money, PriceCalculatorService, PricingError, Staircase,
};
use std::path::PathBuf;
use tracing::info;
use ts_rs::TS;

use crate::error::{QuoteError, QuoteResult};
use crate::settings::PricingSettings;

/// A stored quote: its identifier and the staircase configuration as saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub staircase: String,
}

impl Quote {
    pub fn new(id: impl Into<String>, staircase: impl Into<String>) -> Self {
        Quote {
            id: id.into(),
            staircase: staircase.into(),
        }
    }
}

/// Every lane's total and the breakdowns shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub quote_id: String,
    pub subtotal: Money,
    pub addon_subtotal: Money,
    pub delivery: Money,
    pub tax: Money,
    /// Subtotal + addons + delivery + tax.
    pub total: Money,
    /// Subtotal, addon and delivery entries in registration order.
    pub breakdown: Breakdown,
    pub addon_breakdown: Breakdown,
}

/// Lane results for one staircase, each evaluated exactly once.
struct PricedLanes {
    subtotal: LaneResult,
    addon: LaneResult,
    delivery: LaneResult,
    tax: LaneResult,
}

impl PricedLanes {
    fn total(&self) -> Result<Money, PricingError> {
        [&self.subtotal, &self.addon, &self.delivery, &self.tax]
            .into_iter()
            .try_fold(Money::zero(), |acc, lane| acc.checked_add(lane.total))
            .ok_or(PricingError::Overflow { rule: "total" })
    }

    fn into_summary(self, quote_id: String) -> Result<QuoteSummary, PricingError> {
        let total = self.total()?;
        let addon_breakdown = self.addon.breakdown.clone();

        let mut breakdown = self.subtotal.breakdown;
        breakdown.extend(self.addon.breakdown);
        breakdown.extend(self.delivery.breakdown);

        Ok(QuoteSummary {
            quote_id,
            subtotal: self.subtotal.total,
            addon_subtotal: self.addon.total,
            delivery: self.delivery.total,
            tax: self.tax.total,
            total,
            breakdown,
            addon_breakdown,
        })
    }
}

/// Prices quotes against one set of pricing settings.
#[derive(Debug, Clone, Default)]
pub struct QuotePricer {
    service: PriceCalculatorService,
}

impl QuotePricer {
    pub fn new(service: PriceCalculatorService) -> Self {
        QuotePricer { service }
    }

    pub fn from_settings(settings: PricingSettings) -> Self {
        QuotePricer::new(PriceCalculatorService::new(settings.prices, settings.tax))
    }

    /// Builds a pricer from the settings file, environment and defaults.
    ///
    /// See [`PricingSettings::load`] for the load order. Invalid settings
    /// fail here rather than on the first quote.
    pub fn load(config_path: Option<PathBuf>) -> QuoteResult<Self> {
        let pricer = QuotePricer::from_settings(PricingSettings::load(config_path)?);
        info!(
            vat_bps = pricer.service.tax_settings().vat_rate.bps(),
            tax_delivery = pricer.service.tax_settings().tax_delivery,
            tread_materials = pricer.service.prices().tread_materials.len(),
            "Quote pricer ready"
        );
        Ok(pricer)
    }

    pub fn service(&self) -> &PriceCalculatorService {
        &self.service
    }

    /// Prices a stored quote.
    ///
    /// ## Errors
    /// - [`QuoteError::InvalidQuoteId`] if the id is not a UUID
    /// - [`QuoteError::Pricing`] if the staircase cannot be decoded, fails
    ///   validation, or names an option the price list has no rate for
    pub fn price(&self, quote: &Quote) -> QuoteResult<QuoteSummary> {
        validate_uuid(&quote.id).map_err(QuoteError::InvalidQuoteId)?;
        let staircase = Staircase::from_json(&quote.staircase)?;

        let summary = self.price_staircase(&staircase, quote.id.clone())?;
        info!(
            quote_id = %summary.quote_id,
            total = %summary.total,
            entries = summary.breakdown.len(),
            "Quote priced"
        );
        Ok(summary)
    }

    /// Prices an already-decoded staircase.
    pub fn price_staircase(
        &self,
        staircase: &Staircase,
        quote_id: String,
    ) -> Result<QuoteSummary, PricingError> {
        self.evaluate_lanes(staircase)?.into_summary(quote_id)
    }

    fn evaluate_lanes(&self, staircase: &Staircase) -> Result<PricedLanes, PricingError> {
        let subtotal = self.service.evaluate(Lane::Subtotal, staircase)?;
        let addon = self.service.evaluate(Lane::Addon, staircase)?;
        let delivery = self.service.evaluate(Lane::Delivery, staircase)?;

        let context = self
            .service
            .tax_context(subtotal.total, addon.total, delivery.total)?;
        let tax = self.service.evaluate_tax(&context)?;

        Ok(PricedLanes {
            subtotal,
            addon,
            delivery,
            tax,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use stairwise_core::{ConfigurationError, PriceList, TaxRate, TaxSettings};

    const QUOTE_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    const STAIRCASE: &str = r#"{
        "floor_to_floor": 2600,
        "width": 860,
        "flight": { "straight_steps": 12 },
        "treads": { "material": "pine" },
        "stringers": { "material": "pine" },
        "addons": { "extra_packing": true },
        "delivery": { "zone": "local" }
    }"#;

    fn quote(staircase: &str) -> Quote {
        Quote::new(QUOTE_ID, staircase)
    }

    #[test]
    fn test_price_quote() {
        let pricer = QuotePricer::default();
        let summary = pricer.price(&quote(STAIRCASE)).unwrap();

        assert_eq!(summary.quote_id, QUOTE_ID);
        assert_eq!(summary.subtotal, Money::from_pence(122_400));
        assert_eq!(summary.addon_subtotal, Money::from_pence(2_500));
        assert_eq!(summary.delivery, Money::from_pence(4_500));
        // 20% of £1,294.00
        assert_eq!(summary.tax, Money::from_pence(25_880));
        assert_eq!(summary.total, Money::from_pence(122_400 + 2_500 + 4_500 + 25_880));
    }

    #[test]
    fn test_summary_matches_service() {
        let pricer = QuotePricer::default();
        let summary = pricer.price(&quote(STAIRCASE)).unwrap();
        let staircase = Staircase::from_json(STAIRCASE).unwrap();
        let service = pricer.service();

        assert_eq!(summary.subtotal, service.subtotal(&staircase).unwrap());
        assert_eq!(summary.tax, service.tax(&staircase).unwrap());
        assert_eq!(summary.breakdown, service.price_breakdown(&staircase).unwrap());
        assert_eq!(summary.addon_breakdown, service.addon_breakdown(&staircase).unwrap());
        assert_eq!(summary.breakdown.last().unwrap().label, "delivery");
    }

    #[test]
    fn test_settings_flow_into_pricer() {
        let settings = PricingSettings {
            tax: TaxSettings {
                vat_rate: TaxRate::from_bps(2000),
                tax_delivery: false,
            },
            prices: PriceList::default(),
        };
        let summary = QuotePricer::from_settings(settings)
            .price(&quote(STAIRCASE))
            .unwrap();

        // 20% of £1,249.00, delivery untaxed
        assert_eq!(summary.tax, Money::from_pence(24_980));
    }

    #[test]
    fn test_malformed_staircase_fails_whole_quote() {
        let pricer = QuotePricer::default();

        let err = pricer.price(&quote("{ not json")).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Pricing(PricingError::Configuration(ConfigurationError::Decode { .. }))
        ));

        let wrong_type =
            STAIRCASE.replace("\"straight_steps\": 12", "\"straight_steps\": \"twelve\"");
        assert!(pricer.price(&quote(&wrong_type)).is_err());
    }

    #[test]
    fn test_missing_rate_fails_whole_quote() {
        let mut prices = PriceList::default();
        prices.delivery_zones.remove("local");
        let pricer = QuotePricer::new(PriceCalculatorService::new(prices, TaxSettings::default()));

        let err = pricer.price(&quote(STAIRCASE)).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Pricing(PricingError::Configuration(ConfigurationError::MissingPrice {
                rule: "delivery",
                ..
            }))
        ));
    }

    #[test]
    fn test_invalid_quote_id() {
        let pricer = QuotePricer::default();
        let err = pricer.price(&Quote::new("quote-1", STAIRCASE)).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidQuoteId(_)));
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = QuotePricer::default().price(&quote(STAIRCASE)).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["quoteId"], QUOTE_ID);
        assert_eq!(json["addonSubtotal"], 2_500);
        assert_eq!(json["addonBreakdown"][0]["label"], "extra_packing");
    }

    #[test]
    fn test_lane_sum_overflow_fails_whole_quote() {
        let mut prices = PriceList::default();
        prices.per_rise = Money::from_pence(i64::MAX / 20);
        prices.two_men_delivery = Money::from_pence(i64::MAX / 2);
        let pricer = QuotePricer::new(PriceCalculatorService::new(prices, TaxSettings::default()));

        let staircase = STAIRCASE.replace(
            "\"extra_packing\": true",
            "\"extra_packing\": true, \"two_men_delivery\": true",
        );
        let err = pricer.price(&quote(&staircase)).unwrap_err();
        assert!(matches!(err, QuoteError::Pricing(PricingError::Overflow { .. })));
    }

    #[test]
    fn test_load_pricer_from_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing.toml");
        std::fs::write(&path, "[tax]\nvat_rate = 1000\ntax_delivery = false\n").unwrap();

        let pricer = QuotePricer::load(Some(path)).unwrap();
        let tax = pricer.service().tax_settings();
        assert_eq!(tax.vat_rate, TaxRate::from_bps(1000));
        assert!(!tax.tax_delivery);
        assert_eq!(pricer.service().prices(), &PriceList::default());

        // 10% of £1,249.00, delivery untaxed
        let summary = pricer.price(&quote(STAIRCASE)).unwrap();
        assert_eq!(summary.tax, Money::from_pence(12_490));
    }

    #[test]
    fn test_load_pricer_rejects_invalid_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing.toml");
        std::fs::write(&path, "[prices]\nfixing_kit = -100\n").unwrap();

        assert!(matches!(
            QuotePricer::load(Some(path)),
            Err(QuoteError::Settings(SettingsError::Invalid(_)))
        ));
    }
}
