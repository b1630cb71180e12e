//! # Hypatia Geom
//!
//! Pure geometry behind the Hypatia sculpture. Nothing here touches a scene
//! or a mesh; every routine takes plain values and returns plain values.
//!
//! ## Architecture
//!
//! ```text
//! hypatia-geom (profiles, samples, layouts) → hypatia-scene (meshes, nodes)
//! ```
//!
//! ## Contents
//!
//! - **Interpolation**: [`lerp`]
//! - **Profiles**: quarter cross-in-circle outline ([`quadrant_profile`])
//! - **Inclusion**: even-odd ray casting ([`point_in_polygon`])
//! - **Sampling**: lattice points on polyhedron faces ([`sample_face`])
//! - **Layouts**: dodecahedron and orbit rings
//!
//! ## Usage
//!
//! ```rust
//! use hypatia_geom::{quadrant_profile, QuadrantProfileParams};
//!
//! let profile = quadrant_profile(&QuadrantProfileParams::default()).unwrap();
//! assert_eq!(profile.len(), 13);
//! assert!(profile.is_closed());
//! ```

pub mod error;
pub mod frame;
pub mod interp;
pub mod orbit;
pub mod polygon;
pub mod polyhedron;
pub mod profile;
pub mod sampler;

pub use error::{GeometryError, GeometryResult};
pub use frame::{Basis, FaceFrame};
pub use interp::lerp;
pub use orbit::{concentric_orbits, orbit_ring, outline_orientations, OrbitLayoutParams, OrbitRing};
pub use polygon::{point_in_polygon, Polygon2D};
pub use polyhedron::Polyhedron;
pub use profile::{quadrant_profile, QuadrantProfile, QuadrantProfileParams};
pub use sampler::{sample_face, FaceGridParams, FaceSamples, GridSample};
