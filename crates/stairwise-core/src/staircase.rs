//! # Staircase Configuration
//!
//! The typed description of a staircase build, decoded once from the JSON
//! stored on a quote and validated before any pricing chain sees it.
//!
//! ## Document Shape
//! ```json
//! {
//!   "floor_to_floor": 2600,
//!   "width": 860,
//!   "flight": { "straight_steps": 10, "winders": 3 },
//!   "risers": { "material": "mdf" },
//!   "treads": { "material": "oak", "profile": "bullnose" },
//!   "newel_posts": { "style": "square", "count": 2 },
//!   "handrail": { "material": "oak", "sides": 1 },
//!   "spindles": { "style": "chamfered" },
//!   "stringers": { "material": "pine" },
//!   "addons": { "fixing_kits": 1 },
//!   "delivery": { "zone": "local" }
//! }
//! ```
//!
//! Optional sections are absent rather than zeroed. Every pricing rule for an
//! absent section resolves to no contribution.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::validation::{validate_count, validate_range, validate_requires, validate_sides};
use crate::MAX_RISE_MM;

// =============================================================================
// Options
// =============================================================================

macro_rules! option_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Price list key for this option.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Timber and board materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Pine,
    Hemlock,
    Ash,
    Oak,
    Sapele,
    Mdf,
}

option_names!(Material {
    Pine => "pine",
    Hemlock => "hemlock",
    Ash => "ash",
    Oak => "oak",
    Sapele => "sapele",
    Mdf => "mdf",
});

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Pine,
        Material::Hemlock,
        Material::Ash,
        Material::Oak,
        Material::Sapele,
        Material::Mdf,
    ];
}

/// Front edge of a tread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreadProfile {
    /// Standard square edge, no upcharge.
    #[default]
    Square,
    Bullnose,
    PencilRound,
}

option_names!(TreadProfile {
    Square => "square",
    Bullnose => "bullnose",
    PencilRound => "pencil_round",
});

/// Shaped bottom treads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureTreadKind {
    Bullnose,
    DoubleBullnose,
    Curtail,
}

option_names!(FeatureTreadKind {
    Bullnose => "bullnose",
    DoubleBullnose => "double_bullnose",
    Curtail => "curtail",
});

/// Turning style shared by newel posts and spindles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurningStyle {
    Square,
    Chamfered,
    Turned,
}

option_names!(TurningStyle {
    Square => "square",
    Chamfered => "chamfered",
    Turned => "turned",
});

/// Newel cap shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapStyle {
    Flat,
    Ball,
    Pyramid,
}

option_names!(CapStyle {
    Flat => "flat",
    Ball => "ball",
    Pyramid => "pyramid",
});

/// Delivery zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryZone {
    /// Customer collects from the workshop, no delivery charge.
    Collection,
    #[default]
    Local,
    Regional,
    National,
}

option_names!(DeliveryZone {
    Collection => "collection",
    Local => "local",
    Regional => "regional",
    National => "national",
});

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Flight {
    pub straight_steps: u32,
    #[serde(default)]
    pub winders: u32,
}

/// Risers; `material: None` is an open-riser staircase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Risers {
    #[serde(default)]
    pub material: Option<Material>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Treads {
    pub material: Material,
    #[serde(default)]
    pub profile: TreadProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureTreads {
    pub kind: FeatureTreadKind,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewelPosts {
    pub style: TurningStyle,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewelCaps {
    pub style: CapStyle,
}

/// A rail run along one or both sides of the flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rail {
    pub material: Material,
    pub sides: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spindles {
    pub style: TurningStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stringers {
    pub material: Material,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Addons {
    #[serde(default)]
    pub two_men_delivery: bool,
    #[serde(default)]
    pub fixing_kits: u32,
    #[serde(default)]
    pub extra_packing: bool,
    #[serde(default)]
    pub cut_to_size_zipbolt: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Delivery {
    #[serde(default)]
    pub zone: DeliveryZone,
}

// =============================================================================
// Staircase
// =============================================================================

/// A complete staircase build. Dimensions are in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Staircase {
    pub floor_to_floor: u32,
    pub width: u32,
    pub flight: Flight,
    #[serde(default)]
    pub risers: Risers,
    pub treads: Treads,
    #[serde(default)]
    pub feature_treads: Option<FeatureTreads>,
    #[serde(default)]
    pub newel_posts: Option<NewelPosts>,
    #[serde(default)]
    pub additional_newel_posts: u32,
    #[serde(default)]
    pub newel_caps: Option<NewelCaps>,
    #[serde(default)]
    pub handrail: Option<Rail>,
    #[serde(default)]
    pub additional_handrail_mm: u32,
    #[serde(default)]
    pub baserail: Option<Rail>,
    #[serde(default)]
    pub additional_baserail_mm: u32,
    #[serde(default)]
    pub spindles: Option<Spindles>,
    #[serde(default)]
    pub additional_spindles: u32,
    pub stringers: Stringers,
    #[serde(default)]
    pub addons: Addons,
    #[serde(default)]
    pub delivery: Delivery,
}

impl Staircase {
    /// Decodes and validates a staircase from its stored JSON form.
    ///
    /// ## Errors
    /// - [`ConfigurationError::Decode`] for wrong types or unknown fields
    /// - [`ConfigurationError::Invalid`] when a field fails validation
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let staircase: Staircase = serde_json::from_str(json)?;
        staircase.validate()?;
        Ok(staircase)
    }

    /// Decodes and validates a staircase from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigurationError> {
        let staircase: Staircase = serde_json::from_value(value)?;
        staircase.validate()?;
        Ok(staircase)
    }

    /// Validates every field once, at the decode boundary.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_range("floor_to_floor", self.floor_to_floor, 1500, 5000)?;
        validate_range("width", self.width, 500, 1500)?;
        validate_count("flight.straight_steps", self.flight.straight_steps, 25)?;
        validate_count("flight.winders", self.flight.winders, 6)?;
        validate_range("flight", self.total_steps(), 1, 25)?;

        if let Some(feature) = &self.feature_treads {
            validate_count("feature_treads.count", feature.count, 3)?;
        }
        if let Some(newels) = &self.newel_posts {
            validate_count("newel_posts.count", newels.count, 12)?;
        }
        validate_count("additional_newel_posts", self.additional_newel_posts, 12)?;
        validate_requires(
            "additional_newel_posts",
            self.additional_newel_posts,
            "newel_posts",
            self.newel_posts.is_some(),
        )?;
        validate_requires(
            "newel_caps",
            self.newel_caps.is_some() as u32,
            "newel_posts",
            self.newel_posts.is_some(),
        )?;

        if let Some(handrail) = &self.handrail {
            validate_sides("handrail.sides", handrail.sides)?;
        }
        if let Some(baserail) = &self.baserail {
            validate_sides("baserail.sides", baserail.sides)?;
        }
        validate_count("additional_handrail_mm", self.additional_handrail_mm, 20_000)?;
        validate_count("additional_baserail_mm", self.additional_baserail_mm, 20_000)?;
        validate_requires(
            "additional_handrail_mm",
            self.additional_handrail_mm,
            "handrail",
            self.handrail.is_some(),
        )?;
        validate_requires(
            "additional_baserail_mm",
            self.additional_baserail_mm,
            "baserail",
            self.baserail.is_some(),
        )?;

        validate_requires(
            "spindles",
            self.spindles.is_some() as u32,
            "handrail",
            self.handrail.is_some(),
        )?;
        validate_count("additional_spindles", self.additional_spindles, 200)?;
        validate_requires(
            "additional_spindles",
            self.additional_spindles,
            "spindles",
            self.spindles.is_some(),
        )?;

        validate_count("addons.fixing_kits", self.addons.fixing_kits, 10)?;

        Ok(())
    }

    /// Treads in the flight, straight and winder.
    ///
    /// Saturates at `u32::MAX` on a staircase that skipped validation.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.flight.straight_steps.saturating_add(self.flight.winders)
    }

    /// Risers in the flight (one more than the treads).
    #[inline]
    pub fn riser_count(&self) -> u32 {
        self.total_steps().saturating_add(1)
    }

    /// Rises needed to climb `floor_to_floor` without exceeding [`MAX_RISE_MM`].
    #[inline]
    pub fn rises_for_height(&self) -> u32 {
        self.floor_to_floor.div_ceil(MAX_RISE_MM)
    }

    /// Newel posts including additional ones.
    pub fn newel_count(&self) -> u32 {
        let posts = self.newel_posts.as_ref().map_or(0, |n| n.count);
        posts.saturating_add(self.additional_newel_posts)
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    /// A fully specified staircase touching every subtotal and addon rule.
    pub fn full() -> Value {
        json!({
            "floor_to_floor": 2600,
            "width": 860,
            "flight": { "straight_steps": 10, "winders": 3 },
            "risers": { "material": "mdf" },
            "treads": { "material": "oak", "profile": "bullnose" },
            "feature_treads": { "kind": "curtail", "count": 1 },
            "newel_posts": { "style": "turned", "count": 2 },
            "additional_newel_posts": 1,
            "newel_caps": { "style": "ball" },
            "handrail": { "material": "oak", "sides": 2 },
            "additional_handrail_mm": 1200,
            "baserail": { "material": "oak", "sides": 1 },
            "additional_baserail_mm": 600,
            "spindles": { "style": "chamfered" },
            "additional_spindles": 4,
            "stringers": { "material": "pine" },
            "addons": {
                "two_men_delivery": true,
                "fixing_kits": 2,
                "extra_packing": true,
                "cut_to_size_zipbolt": true
            },
            "delivery": { "zone": "regional" }
        })
    }

    /// The smallest valid staircase: no optional parts at all.
    pub fn minimal() -> Value {
        json!({
            "floor_to_floor": 2600,
            "width": 860,
            "flight": { "straight_steps": 12 },
            "treads": { "material": "pine" },
            "stringers": { "material": "pine" },
            "delivery": { "zone": "collection" }
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    #[test]
    fn test_decode_full() {
        let staircase = Staircase::from_value(fixtures::full()).unwrap();
        assert_eq!(staircase.total_steps(), 13);
        assert_eq!(staircase.riser_count(), 14);
        assert_eq!(staircase.newel_count(), 3);
        assert_eq!(staircase.treads.profile, TreadProfile::Bullnose);
        assert_eq!(staircase.delivery.zone, DeliveryZone::Regional);
    }

    #[test]
    fn test_decode_minimal_defaults() {
        let staircase = Staircase::from_value(fixtures::minimal()).unwrap();
        assert_eq!(staircase.risers.material, None);
        assert_eq!(staircase.treads.profile, TreadProfile::Square);
        assert!(staircase.handrail.is_none());
        assert_eq!(staircase.addons, Addons::default());
        assert_eq!(staircase.flight.winders, 0);
    }

    #[test]
    fn test_from_json_string() {
        let json = fixtures::minimal().to_string();
        assert!(Staircase::from_json(&json).is_ok());
    }

    #[test]
    fn test_non_numeric_count_is_decode_error() {
        let mut value = fixtures::minimal();
        value["flight"]["straight_steps"] = json!("twelve");
        let err = Staircase::from_value(value).unwrap_err();
        assert!(matches!(err, ConfigurationError::Decode { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut value = fixtures::minimal();
        value["colour"] = json!("red");
        assert!(matches!(
            Staircase::from_value(value),
            Err(ConfigurationError::Decode { .. })
        ));
    }

    #[test]
    fn test_missing_required_section_rejected() {
        let mut value = fixtures::minimal();
        value.as_object_mut().unwrap().remove("treads");
        assert!(Staircase::from_value(value).is_err());
    }

    #[test]
    fn test_out_of_range_height_rejected() {
        let mut value = fixtures::minimal();
        value["floor_to_floor"] = json!(900);
        let err = Staircase::from_value(value).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::Invalid(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_spindles_require_handrail() {
        let mut value = fixtures::minimal();
        value["spindles"] = json!({ "style": "square" });
        let err = Staircase::from_value(value).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::Invalid(ValidationError::Requires { .. })
        ));
    }

    #[test]
    fn test_rises_for_height() {
        let staircase = Staircase::from_value(fixtures::minimal()).unwrap();
        // 2600 / 220 = 11.8 → 12 rises
        assert_eq!(staircase.rises_for_height(), 12);
    }

    #[test]
    fn test_option_names() {
        assert_eq!(Material::Mdf.as_str(), "mdf");
        assert_eq!(TreadProfile::PencilRound.to_string(), "pencil_round");
        assert_eq!(FeatureTreadKind::DoubleBullnose.as_str(), "double_bullnose");
    }

    #[test]
    fn test_counts_saturate_without_validation() {
        let mut value = fixtures::minimal();
        value["flight"] = json!({ "straight_steps": u32::MAX, "winders": 5 });
        value["newel_posts"] = json!({ "style": "square", "count": u32::MAX });
        value["additional_newel_posts"] = json!(2);
        let staircase: Staircase = serde_json::from_value(value).unwrap();

        assert_eq!(staircase.total_steps(), u32::MAX);
        assert_eq!(staircase.riser_count(), u32::MAX);
        assert_eq!(staircase.newel_count(), u32::MAX);
    }
}
