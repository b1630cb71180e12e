//! # Config Crate
//!
//! Centralized configuration for the Hypatia sculpture pipeline.
//! All magic numbers and tunable parameters are defined here so the geometry
//! and scene crates take explicit parameters instead of module-level state.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_CIRCLE_RADIUS, DEFAULT_CROSS_THICKNESS};
//! use config::tolerances::Tolerances;
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Profile defaults describe a valid cross-in-circle
//! assert!(DEFAULT_CROSS_THICKNESS < DEFAULT_CIRCLE_RADIUS);
//!
//! // Tolerances are validated as a set
//! assert!(Tolerances::default().validate().is_ok());
//! ```

pub mod constants;
pub mod tolerances;

pub use tolerances::{ConfigError, Tolerances};
