//! # Pricing Settings
//!
//! Tax parameters and the price list, loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STAIRWISE_VAT_BPS=2000                                             │
//! │     STAIRWISE_TAX_DELIVERY=false                                       │
//! │                                                                         │
//! │  2. TOML Settings File                                                 │
//! │     $STAIRWISE_CONFIG, or                                              │
//! │     ~/.config/stairwise/pricing.toml (Linux)                           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     20% VAT on goods and delivery, built-in rate card                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Settings File Format
//! ```toml
//! # pricing.toml
//! [tax]
//! vat_rate = 2000       # basis points
//! tax_delivery = true
//!
//! [prices]
//! per_rise = 4500       # pence
//!
//! [prices.tread_materials]
//! pine = 2200
//! oak = 6800
//! ```
//!
//! Any table or key left out keeps its default.

use serde::{Deserialize, Serialize};
use stairwise_core::{PriceList, TaxRate, TaxSettings};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::SettingsError;

/// Overrides the settings file location.
pub const CONFIG_PATH_VAR: &str = "STAIRWISE_CONFIG";
/// Overrides the VAT rate, in basis points.
pub const VAT_BPS_VAR: &str = "STAIRWISE_VAT_BPS";
/// Overrides whether delivery is taxable.
pub const TAX_DELIVERY_VAR: &str = "STAIRWISE_TAX_DELIVERY";

/// Everything the price calculator is constructed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default)]
    pub tax: TaxSettings,

    #[serde(default)]
    pub prices: PriceList,
}

impl PricingSettings {
    /// Loads settings from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Settings file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading pricing settings from file");
                let contents = std::fs::read_to_string(&path)?;
                settings = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Settings file not found, using defaults");
            }
        }

        settings.apply_env_overrides();
        settings.validate()?;

        Ok(settings)
    }

    /// Loads settings or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load pricing settings: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves settings to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> Result<(), SettingsError> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(SettingsError::NoPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Pricing settings saved");
        Ok(())
    }

    /// Validates the tax parameters and the rate card.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.tax.validate()?;
        self.prices.validate()?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides read through `lookup`. Unparseable values are
    /// logged and ignored.
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bps) = lookup(VAT_BPS_VAR) {
            match bps.trim().parse::<u32>() {
                Ok(bps) => {
                    debug!(bps, "Overriding VAT rate from environment");
                    self.tax.vat_rate = TaxRate::from_bps(bps);
                }
                Err(_) => warn!(value = %bps, "Ignoring unparseable {}", VAT_BPS_VAR),
            }
        }

        if let Some(flag) = lookup(TAX_DELIVERY_VAR) {
            match flag.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.tax.tax_delivery = true,
                "0" | "false" | "no" => self.tax.tax_delivery = false,
                _ => warn!(value = %flag, "Ignoring unparseable {}", TAX_DELIVERY_VAR),
            }
        }
    }

    /// Returns the default settings file path.
    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("com", "stairwise", "stairwise")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }
}
