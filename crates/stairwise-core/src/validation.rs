//! # Validation Module
//!
//! Boundary validation for decoded staircase configurations and settings.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Decode (serde)                                               │
//! │  ├── Types: counts are integers, enums are known options               │
//! │  └── Unknown fields rejected                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (once per staircase)                             │
//! │  ├── Dimensions within buildable ranges                                │
//! │  └── Cross-section requirements (spindles need a handrail)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing rules                                                │
//! │  └── Applicability only ("is this optional part present")             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stairwise_core::validation::{validate_range, validate_tax_rate_bps};
//!
//! assert!(validate_range("width", 860, 500, 1500).is_ok());
//! assert!(validate_tax_rate_bps(2000).is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a value lies within an inclusive range.
///
/// ## Example
/// ```rust
/// use stairwise_core::validation::validate_range;
///
/// assert!(validate_range("floor_to_floor", 2600, 1500, 5000).is_ok());
/// assert!(validate_range("floor_to_floor", 900, 1500, 5000).is_err());
/// ```
pub fn validate_range(field: &str, value: u32, min: u32, max: u32) -> ValidationResult<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: min as i64,
            max: max as i64,
        });
    }

    Ok(())
}

/// Validates a count of optional parts.
///
/// ## Rules
/// - Zero is allowed (the part is simply absent)
/// - Must not exceed `max`
pub fn validate_count(field: &str, count: u32, max: u32) -> ValidationResult<()> {
    validate_range(field, count, 0, max)
}

/// Validates the number of balustraded sides (0, 1 or 2).
pub fn validate_sides(field: &str, sides: u8) -> ValidationResult<()> {
    validate_range(field, sides as u32, 0, 2)
}

/// Validates that an optional quantity only appears alongside its section.
///
/// ## Example
/// ```rust
/// use stairwise_core::validation::validate_requires;
///
/// assert!(validate_requires("additional_spindles", 4, "spindles", true).is_ok());
/// assert!(validate_requires("additional_spindles", 0, "spindles", false).is_ok());
/// assert!(validate_requires("additional_spindles", 4, "spindles", false).is_err());
/// ```
pub fn validate_requires(
    field: &str,
    quantity: u32,
    requires: &str,
    present: bool,
) -> ValidationResult<()> {
    if quantity > 0 && !present {
        return Err(ValidationError::Requires {
            field: field.to_string(),
            requires: requires.to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "vat_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string (quote identifiers).
///
/// ## Example
/// ```rust
/// use stairwise_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("width", 500, 500, 1500).is_ok());
        assert!(validate_range("width", 1500, 500, 1500).is_ok());
        assert!(validate_range("width", 499, 500, 1500).is_err());
        assert!(validate_range("width", 1501, 500, 1500).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(validate_count("fixing_kits", 0, 10).is_ok());
        assert!(validate_count("fixing_kits", 10, 10).is_ok());
        assert!(validate_count("fixing_kits", 11, 10).is_err());
    }

    #[test]
    fn test_validate_sides() {
        assert!(validate_sides("handrail.sides", 0).is_ok());
        assert!(validate_sides("handrail.sides", 2).is_ok());
        assert!(validate_sides("handrail.sides", 3).is_err());
    }

    #[test]
    fn test_validate_requires() {
        let err = validate_requires("additional_handrail_mm", 1200, "handrail", false).unwrap_err();
        assert!(matches!(err, ValidationError::Requires { .. }));
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("123").is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(2000).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
