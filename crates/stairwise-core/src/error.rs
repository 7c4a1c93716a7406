//! # Error Types
//!
//! Domain-specific error types for stairwise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stairwise-core errors (this file)                                     │
//! │  ├── PricingError        - What a chain evaluation returns             │
//! │  ├── ConfigurationError  - Missing/malformed staircase or rate card    │
//! │  └── ValidationError     - Field-level boundary validation failures    │
//! │                                                                         │
//! │  stairwise-quote errors (separate crate)                               │
//! │  └── QuoteError          - Settings, quote id and pricing failures     │
//! │                                                                         │
//! │  Flow: ValidationError → ConfigurationError → PricingError → QuoteError│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, rule, option)
//! 3. A rule with nothing to price returns no contribution, never an error
//! 4. A configuration error aborts the whole calculation, never a zero

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors raised while evaluating a pricing chain.
///
/// Every wrapping component propagates these unchanged, so the caller of
/// `price()` or `price_breakdown()` sees the failure of the innermost rule.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The configuration handed to a rule is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A rule's arithmetic left the representable money range.
    #[error("Price overflow in rule {rule}")]
    Overflow { rule: &'static str },
}

// =============================================================================
// Configuration Error
// =============================================================================

/// Configuration errors.
///
/// ## When This Occurs
/// - The stored staircase JSON cannot be decoded into a [`Staircase`]
/// - A decoded staircase violates a field rule (see [`crate::validation`])
/// - A rule needs a rate the price list does not carry
///
/// [`Staircase`]: crate::staircase::Staircase
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Serialized staircase could not be decoded (wrong type, unknown field).
    #[error("Staircase configuration could not be decoded: {reason}")]
    Decode { reason: String },

    /// A decoded field failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    /// The price list has no rate for the option a rule was asked to price.
    #[error("No price configured for {option} in rule {rule}")]
    MissingPrice { rule: &'static str, option: String },
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::Decode {
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when decoded input doesn't meet requirements.
/// Raised once at the decode boundary, before any chain is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A field only makes sense alongside another section.
    #[error("{field} requires {requires} to be configured")]
    Requires { field: String, requires: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
