//! # Tax Parameters
//!
//! Static VAT settings and the per-request context the tax lane prices from.
//!
//! ## Cross-Lane Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal lane ──┐                                                      │
//! │                  ├──► subtotal = subtotal + addons ──┐                  │
//! │  addon lane ─────┘                                   ├──► TaxContext    │
//! │  delivery lane ─────► delivery ──────────────────────┘        │         │
//! │                                                               ▼         │
//! │  TaxSettings (vat_rate, tax_delivery) ──────────────────► tax lane      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The context is a distinct value built from three already-computed totals;
//! it never aliases another lane's configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::money::Money;
use crate::types::TaxRate;
use crate::validation::validate_tax_rate_bps;

/// UK standard VAT rate.
pub const DEFAULT_VAT_BPS: u32 = 2000;

/// Static tax parameters, loaded from application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxSettings {
    /// VAT rate applied to the taxable amount.
    pub vat_rate: TaxRate,
    /// Whether the delivery charge is taxable.
    pub tax_delivery: bool,
}

impl TaxSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_tax_rate_bps(self.vat_rate.bps())?;
        Ok(())
    }
}

impl Default for TaxSettings {
    fn default() -> Self {
        TaxSettings {
            vat_rate: TaxRate::from_bps(DEFAULT_VAT_BPS),
            tax_delivery: true,
        }
    }
}

/// The tax lane's configuration: static parameters plus injected totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxContext {
    pub vat_rate: TaxRate,
    pub tax_delivery: bool,
    /// Subtotal lane total plus addon lane total.
    pub subtotal: Money,
    /// Delivery lane total.
    pub delivery: Money,
}

impl TaxContext {
    pub fn new(settings: &TaxSettings, subtotal: Money, delivery: Money) -> Self {
        TaxContext {
            vat_rate: settings.vat_rate,
            tax_delivery: settings.tax_delivery,
            subtotal,
            delivery,
        }
    }

    /// The amount VAT is charged on.
    pub fn taxable(&self) -> Option<Money> {
        if self.tax_delivery {
            self.subtotal.checked_add(self.delivery)
        } else {
            Some(self.subtotal)
        }
    }
}
