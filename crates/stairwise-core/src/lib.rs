//! # stairwise-core: Pure Pricing Logic for Stairwise
//!
//! This crate prices configured staircases. It holds the decorator-chain
//! engine, every pricing rule, and the domain types they read. It has no I/O
//! dependencies: configuration arrives as values, never as files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stairwise Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                stairwise-quote (Boundary Layer)                 │   │
//! │  │    settings file ──► PricingSettings    Quote ──► QuoteSummary  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stairwise-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ staircase │  │  chain    │  │calculators│  │  service  │  │   │
//! │  │   │  decode   │  │ component │  │   rules   │  │   lanes   │  │   │
//! │  │   │ validate  │  │  stages   │  │  prices   │  │    tax    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`component`] - The `PriceComponent` / `PricingRule` contract and chain nodes
//! - [`chain`] - Per-lane chain builders with fixed registration order
//! - [`calculators`] - Base calculators and decorator rules
//! - [`service`] - `PriceCalculatorService`, the public entry point
//! - [`staircase`] - The typed staircase configuration
//! - [`prices`] - The rate card
//! - [`tax`] - VAT settings and the cross-lane tax context
//! - [`money`] - Money in integer pence
//! - [`error`] - Pricing, configuration and validation errors
//!
//! ## Example Usage
//!
//! ```rust
//! use stairwise_core::{PriceCalculatorService, Staircase};
//!
//! let staircase = Staircase::from_json(r#"{
//!     "floor_to_floor": 2600,
//!     "width": 860,
//!     "flight": { "straight_steps": 12 },
//!     "treads": { "material": "pine" },
//!     "stringers": { "material": "pine" },
//!     "delivery": { "zone": "collection" }
//! }"#).unwrap();
//!
//! let service = PriceCalculatorService::default();
//! let subtotal = service.subtotal(&staircase).unwrap();
//! let breakdown = service.price_breakdown(&staircase).unwrap();
//!
//! assert_eq!(stairwise_core::breakdown_total(&breakdown), Some(subtotal));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculators;
pub mod chain;
pub mod component;
pub mod error;
pub mod money;
pub mod prices;
pub mod service;
pub mod staircase;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use component::{PriceComponent, PricingRule};
pub use error::{ConfigurationError, PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use prices::PriceList;
pub use service::{LaneResult, PriceCalculatorService};
pub use staircase::Staircase;
pub use tax::{TaxContext, TaxSettings};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum height of a single rise (Approved Document K, private stair).
pub const MAX_RISE_MM: u32 = 220;

/// Raked rail length per step.
pub const STEP_PITCH_LENGTH_MM: u32 = 300;

/// Spindles per step on each balustraded side.
pub const SPINDLES_PER_STEP: u32 = 2;

/// A flight always has a wall stringer and an outer stringer.
pub const STRINGERS_PER_FLIGHT: u32 = 2;

// =============================================================================
// Property Tests
// =============================================================================
