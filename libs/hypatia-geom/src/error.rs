//! # Geometry Errors
//!
//! Error types for the pure geometry routines.
//!
//! ## Error Policy
//!
//! - Preconditions are checked before any arithmetic that could yield NaN
//! - Every failure is returned to the caller; nothing is retried or coerced

use thiserror::Error;

/// Errors that can occur while building profiles, testing inclusion or
/// sampling faces.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A geometric precondition does not hold (radius not larger than the
    /// thickness, collinear face vertices, zero grid resolution, ...).
    #[error("Domain error: {message}")]
    Domain { message: String },

    /// The input itself is malformed (empty or short point sequences,
    /// non-finite coordinates, out-of-range indices).
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl GeometryError {
    /// Creates a domain error.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns true for domain errors.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// Returns true for validation errors.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Rejects NaN and infinities with a validation error naming the parameter.
pub(crate) fn ensure_finite(name: &str, value: f64) -> GeometryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::validation(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
