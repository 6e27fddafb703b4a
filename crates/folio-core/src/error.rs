//! Error types for Folio core types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or validating holdings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A required field was not supplied.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The holding is structurally unusable.
    #[error("Invalid holding '{id}': {reason}")]
    InvalidHolding {
        /// The holding identifier (may be empty).
        id: String,
        /// The reason the holding is invalid.
        reason: String,
    },
}

impl CoreError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
