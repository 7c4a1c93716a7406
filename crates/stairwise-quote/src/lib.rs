//! # stairwise-quote: Quote Pricing for Stairwise
//!
//! The boundary between stored quotes and the pure pricing engine in
//! `stairwise-core`. This crate owns everything that touches the outside
//! world: the settings file, environment overrides, and tracing setup.
//!
//! ## Usage
//! ```rust,no_run
//! use stairwise_quote::{init_tracing, PricingSettings, Quote, QuotePricer};
//!
//! init_tracing();
//! let pricer = QuotePricer::from_settings(PricingSettings::load_or_default(None));
//!
//! let quote = Quote::new(
//!     "550e8400-e29b-41d4-a716-446655440000",
//!     std::fs::read_to_string("quote.json").unwrap(),
//! );
//! let summary = pricer.price(&quote).unwrap();
//! println!("{} inc. VAT", summary.total);
//! ```

pub mod error;
pub mod quote;
pub mod settings;
pub mod telemetry;

pub use error::{QuoteError, QuoteResult, SettingsError};
pub use quote::{Quote, QuotePricer, QuoteSummary};
pub use settings::PricingSettings;
pub use telemetry::init_tracing;
