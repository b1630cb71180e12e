//! Tolerance set shared by the geometry kernels.
//!
//! The point-in-polygon epsilon, the basis-axis threshold and the degeneracy
//! epsilon are implementation-chosen constants. They are gathered here so
//! callers can tune them instead of relying on literals scattered across the
//! sampling code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BASIS_AXIS_THRESHOLD, DEGENERACY_EPSILON, POINT_IN_POLYGON_EPSILON};

/// Immutable snapshot of the numeric tolerances used by geometry routines.
///
/// # Examples
/// ```
/// use config::tolerances::Tolerances;
/// let tol = Tolerances::default();
/// assert!(tol.point_in_polygon_epsilon > 0.0);
/// assert!(tol.basis_axis_threshold < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Added to each edge's y-span in the ray-casting test.
    pub point_in_polygon_epsilon: f64,
    /// `|normal · X|` above which the local basis uses Y as reference axis.
    pub basis_axis_threshold: f64,
    /// Minimum cross-product magnitude for a non-degenerate face normal.
    pub degeneracy_epsilon: f64,
}

impl Tolerances {
    /// Builds a tolerance set, rejecting values that would make the
    /// predicates meaningless.
    ///
    /// # Examples
    /// ```
    /// use config::tolerances::Tolerances;
    /// let tol = Tolerances::new(1.0e-8, 0.8, 1.0e-10).expect("valid tolerances");
    /// assert_eq!(tol.basis_axis_threshold, 0.8);
    /// ```
    pub fn new(
        point_in_polygon_epsilon: f64,
        basis_axis_threshold: f64,
        degeneracy_epsilon: f64,
    ) -> Result<Self, ConfigError> {
        let tolerances = Self {
            point_in_polygon_epsilon,
            basis_axis_threshold,
            degeneracy_epsilon,
        };
        tolerances.validate()?;
        Ok(tolerances)
    }

    /// Checks every field. Useful after deserializing a tolerance set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.point_in_polygon_epsilon > 0.0) || !self.point_in_polygon_epsilon.is_finite() {
            return Err(ConfigError::InvalidTolerance(self.point_in_polygon_epsilon));
        }
        if !(self.degeneracy_epsilon > 0.0) || !self.degeneracy_epsilon.is_finite() {
            return Err(ConfigError::InvalidTolerance(self.degeneracy_epsilon));
        }
        // An orthonormal basis needs a reference axis that is not parallel to
        // the normal; a threshold of 1 or more never swaps axes, 0 or less
        // always does.
        if !(self.basis_axis_threshold > 0.0 && self.basis_axis_threshold < 1.0) {
            return Err(ConfigError::InvalidThreshold(self.basis_axis_threshold));
        }
        Ok(())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            point_in_polygon_epsilon: POINT_IN_POLYGON_EPSILON,
            basis_axis_threshold: BASIS_AXIS_THRESHOLD,
            degeneracy_epsilon: DEGENERACY_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when an epsilon is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the basis-axis threshold is outside the open interval (0, 1).
    InvalidThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidThreshold(value) => {
                write!(f, "basis axis threshold must lie in (0, 1): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
