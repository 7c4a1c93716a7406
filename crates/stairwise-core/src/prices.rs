//! # Price List
//!
//! The rate card every pricing rule reads its unit prices from.
//!
//! Option tables are keyed by the option's `as_str()` name so the list can be
//! maintained in a settings file:
//!
//! ```toml
//! per_rise = 4500
//!
//! [tread_materials]
//! pine = 2200
//! oak = 6800
//! ```
//!
//! A rule asked to price an option the list does not carry fails with
//! [`ConfigurationError::MissingPrice`]; it never prices it at zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigurationError, ValidationError};
use crate::money::Money;

/// Per-option rates, keyed by option name.
pub type RateTable = BTreeMap<String, Money>;

/// Unit prices for every staircase rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceList {
    /// Structural cost per rise of the floor-to-floor height.
    pub per_rise: Money,
    /// Per riser, by material.
    pub riser_materials: RateTable,
    /// Per tread upcharge, by edge profile.
    pub tread_profiles: RateTable,
    /// Per tread, by material.
    pub tread_materials: RateTable,
    /// Per straight step (cutting and housing).
    pub straight_step: Money,
    /// Per winder step.
    pub winder_step: Money,
    /// Per shaped bottom tread, by kind.
    pub feature_treads: RateTable,
    /// Per newel post, by turning style.
    pub newel_posts: RateTable,
    /// Per newel cap, by cap style.
    pub newel_caps: RateTable,
    /// Per metre of handrail, by material.
    pub handrail_per_metre: RateTable,
    /// Per metre of baserail, by material.
    pub baserail_per_metre: RateTable,
    /// Per spindle, by turning style.
    pub spindles: RateTable,
    /// Per step per stringer, by material.
    pub stringers: RateTable,
    pub two_men_delivery: Money,
    pub fixing_kit: Money,
    pub extra_packing: Money,
    pub cut_to_size_zipbolt: Money,
    /// Delivery charge by zone.
    pub delivery_zones: RateTable,
}

impl PriceList {
    /// Looks up `option` in `table`, failing with the rule's label if absent.
    pub fn rate(
        table: &RateTable,
        rule: &'static str,
        option: &str,
    ) -> Result<Money, ConfigurationError> {
        table
            .get(option)
            .copied()
            .ok_or_else(|| ConfigurationError::MissingPrice {
                rule,
                option: option.to_string(),
            })
    }

    /// Rejects negative rates. A rate card that pays the customer is a typo.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let scalars = [
            ("per_rise", self.per_rise),
            ("straight_step", self.straight_step),
            ("winder_step", self.winder_step),
            ("two_men_delivery", self.two_men_delivery),
            ("fixing_kit", self.fixing_kit),
            ("extra_packing", self.extra_packing),
            ("cut_to_size_zipbolt", self.cut_to_size_zipbolt),
        ];
        let tables = [
            ("riser_materials", &self.riser_materials),
            ("tread_profiles", &self.tread_profiles),
            ("tread_materials", &self.tread_materials),
            ("feature_treads", &self.feature_treads),
            ("newel_posts", &self.newel_posts),
            ("newel_caps", &self.newel_caps),
            ("handrail_per_metre", &self.handrail_per_metre),
            ("baserail_per_metre", &self.baserail_per_metre),
            ("spindles", &self.spindles),
            ("stringers", &self.stringers),
            ("delivery_zones", &self.delivery_zones),
        ];

        let negative = scalars
            .into_iter()
            .map(|(field, rate)| (field.to_string(), rate))
            .chain(tables.into_iter().flat_map(|(field, table)| {
                table
                    .iter()
                    .map(move |(option, rate)| (format!("{field}.{option}"), *rate))
            }))
            .find(|(_, rate)| rate.is_negative());

        match negative {
            Some((field, _)) => Err(ValidationError::OutOfRange {
                field,
                min: 0,
                max: i64::MAX,
            }
            .into()),
            None => Ok(()),
        }
    }
}

fn table(rates: &[(&str, i64)]) -> RateTable {
    rates
        .iter()
        .map(|(name, pence)| (name.to_string(), Money::from_pence(*pence)))
        .collect()
}

impl Default for PriceList {
    fn default() -> Self {
        PriceList {
            per_rise: Money::from_pence(4500),
            riser_materials: table(&[
                ("pine", 1400),
                ("hemlock", 1900),
                ("ash", 2600),
                ("oak", 4200),
                ("sapele", 3100),
                ("mdf", 950),
            ]),
            tread_profiles: table(&[("bullnose", 650), ("pencil_round", 400)]),
            tread_materials: table(&[
                ("pine", 2200),
                ("hemlock", 2900),
                ("ash", 5400),
                ("oak", 6800),
                ("sapele", 5900),
                ("mdf", 1600),
            ]),
            straight_step: Money::from_pence(1800),
            winder_step: Money::from_pence(7500),
            feature_treads: table(&[
                ("bullnose", 9500),
                ("double_bullnose", 14500),
                ("curtail", 21000),
            ]),
            newel_posts: table(&[("square", 3800), ("chamfered", 4600), ("turned", 5800)]),
            newel_caps: table(&[("flat", 900), ("ball", 1450), ("pyramid", 1200)]),
            handrail_per_metre: table(&[
                ("pine", 1500),
                ("hemlock", 1900),
                ("ash", 3100),
                ("oak", 3800),
                ("sapele", 3400),
                ("mdf", 1200),
            ]),
            baserail_per_metre: table(&[
                ("pine", 900),
                ("hemlock", 1200),
                ("ash", 2000),
                ("oak", 2400),
                ("sapele", 2200),
                ("mdf", 700),
            ]),
            spindles: table(&[("square", 350), ("chamfered", 475), ("turned", 690)]),
            stringers: table(&[
                ("pine", 850),
                ("hemlock", 1100),
                ("ash", 1900),
                ("oak", 2600),
                ("sapele", 2100),
                ("mdf", 650),
            ]),
            two_men_delivery: Money::from_pence(6000),
            fixing_kit: Money::from_pence(2500),
            extra_packing: Money::from_pence(2500),
            cut_to_size_zipbolt: Money::from_pence(3500),
            delivery_zones: table(&[("local", 4500), ("regional", 8500), ("national", 14000)]),
        }
    }
}
