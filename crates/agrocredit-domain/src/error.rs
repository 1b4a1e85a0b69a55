//! Calculation error types

use crate::CalculationKind;
use thiserror::Error;

/// Result type alias for calculation operations.
pub type Result<T> = std::result::Result<T, CalculationError>;

/// Errors that can occur during a single calculation
///
/// Every variant is local to one call. Nothing is retried and no partial
/// result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// Species key absent from the reference table
    #[error("Unknown species: '{0}' is not in the reference table")]
    UnknownSpecies(String),

    /// Non-positive or non-finite value where a positive one is required
    #[error("Invalid measurement: {field} {reason}")]
    InvalidMeasurement {
        /// Offending input field
        field: &'static str,
        /// Description of the issue
        reason: String,
    },

    /// Calculation kind outside {agroforestry, rice}
    #[error("Unsupported calculation kind: '{0}' (expected 'agroforestry' or 'rice')")]
    UnsupportedCalculationKind(String),

    /// The selected kind has no matching input section
    #[error("Missing measurement: no {kind} inputs were supplied")]
    MissingMeasurement {
        /// Kind that was selected
        kind: CalculationKind,
    },
}

impl CalculationError {
    /// Shorthand for an `InvalidMeasurement` error
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidMeasurement {
            field,
            reason: reason.into(),
        }
    }
}
