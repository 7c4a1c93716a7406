//! # Quote Error Types
//!
//! Errors raised at the quote boundary.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quote Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Settings     │  │     Quote       │  │       Pricing           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Io             │  │  InvalidQuoteId │  │  Configuration          │ │
//! │  │  Parse          │  │                 │  │  Overflow               │ │
//! │  │  Serialize      │  │                 │  │  (from stairwise-core)  │ │
//! │  │  Invalid        │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stairwise_core::{ConfigurationError, PricingError, ValidationError};
use thiserror::Error;

/// Result type alias for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Everything that can stop a quote from being priced.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The staircase or rate card could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Pricing settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The quote carries an identifier that is not a UUID.
    #[error("Invalid quote id: {0}")]
    InvalidQuoteId(ValidationError),
}

impl From<ConfigurationError> for QuoteError {
    fn from(err: ConfigurationError) -> Self {
        QuoteError::Pricing(err.into())
    }
}

/// Settings file errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML for [`PricingSettings`].
    ///
    /// [`PricingSettings`]: crate::settings::PricingSettings
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Settings parsed but hold values the engine rejects.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] ConfigurationError),

    #[error("No settings path available")]
    NoPath,
}
