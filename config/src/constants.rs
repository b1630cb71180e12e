//! # Configuration Constants
//!
//! Centralized constants for the Hypatia sculpture pipeline. Every tolerance,
//! default dimension and tessellation count used by the geometry and scene
//! crates is defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Profile**: Quadrant profile defaults
//! - **Torus**: Sweep path defaults
//! - **Distribution**: Cuboid-on-dodecahedron defaults
//! - **Orbits**: Concentric orbit ring and outline sphere defaults
//! - **Limits**: Safety bounds for mesh generation

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Term added to an edge's y-span in the ray-casting inclusion test.
///
/// Keeps horizontal edges from dividing by zero. It is an approximation,
/// not an exact degeneracy fix: points lying exactly on an edge have
/// unspecified results.
pub const POINT_IN_POLYGON_EPSILON: f64 = 1e-10;

/// Upper bound on `|normal · X|` before the local basis switches its
/// reference axis from X to Y.
///
/// # Example
///
/// ```rust
/// use config::constants::BASIS_AXIS_THRESHOLD;
///
/// let normal_dot_x: f64 = 1.0;
/// let use_y_axis = normal_dot_x.abs() > BASIS_AXIS_THRESHOLD;
/// assert!(use_y_axis);
/// ```
pub const BASIS_AXIS_THRESHOLD: f64 = 0.9;

/// Minimum cross-product magnitude for three points to define a plane.
pub const DEGENERACY_EPSILON: f64 = 1e-12;

/// Minimum triangle area kept by mesh validation.
pub const MIN_TRIANGLE_AREA: f64 = 1e-12;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Default radius of the circle enclosing the cross.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 1.0;

/// Default half-thickness of the cross bars.
pub const DEFAULT_CROSS_THICKNESS: f64 = 0.2;

/// Default number of arc subdivisions in a quadrant profile.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_ARC_SECTIONS;
///
/// // The arc holds one more point than it has sections.
/// let arc_points = DEFAULT_ARC_SECTIONS as usize + 1;
/// assert_eq!(arc_points, 9);
/// ```
pub const DEFAULT_ARC_SECTIONS: u32 = 8;

// =============================================================================
// TORUS CONSTANTS
// =============================================================================

/// Default radius of the circular sweep path.
pub const DEFAULT_TORUS_RADIUS: f64 = 10.0;

/// Default number of sections on the circular sweep path.
pub const DEFAULT_PATH_DIVISIONS: u32 = 50;

/// Rotation about Z, in degrees, applied to each of the four quadrant
/// profiles before sweeping.
pub const QUADRANT_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// Minimum number of sections a closed path may have.
pub const MIN_PATH_SECTIONS: u32 = 3;

// =============================================================================
// DISTRIBUTION CONSTANTS
// =============================================================================

/// Default overall size (diameter) of the dodecahedron.
pub const DEFAULT_POLYHEDRON_SIZE: f64 = 25.0;

/// Default face grid resolution (`grid × grid` cells per face).
pub const DEFAULT_FACE_GRID: u32 = 10;

/// Default cuboid dimensions. The largest value is the flush dimension.
pub const DEFAULT_CUBOID_DIMS: [f64; 3] = [0.5, 0.5, 5.0];

// =============================================================================
// ORBIT CONSTANTS
// =============================================================================

/// Default number of concentric orbit rings.
pub const DEFAULT_ORBIT_RING_COUNT: u32 = 7;

/// Default radius of the outermost orbit ring and of the outline sphere.
pub const DEFAULT_ORBIT_RADIUS: f64 = 250.0;

/// Innermost ring radius as a fraction of the outer radius.
pub const DEFAULT_INNER_RADIUS_RATIO: f64 = 0.2;

/// Minor-to-major axis ratio of the innermost orbit ellipse (1/√3).
pub const DEFAULT_AXIS_RATIO: f64 = 0.577_350_269_189_625_8;

/// Tilt of the outermost orbit ring, in degrees.
pub const DEFAULT_MAX_TILT_DEGREES: f64 = 45.0;

/// Radial thickness of orbit and outline rings.
pub const DEFAULT_RING_THICKNESS: f64 = 1.0;

/// Extrusion depth of orbit and outline rings.
pub const DEFAULT_RING_DEPTH: f64 = 1.0;

/// Curve segments used to tessellate ring ellipses.
pub const DEFAULT_RING_SEGMENTS: u32 = 64;

/// Number of rotation steps used to build the outline sphere.
pub const DEFAULT_OUTLINE_RING_COUNT: u32 = 3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum face grid resolution accepted by the sampler.
pub const MAX_FACE_GRID: u32 = 4096;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
