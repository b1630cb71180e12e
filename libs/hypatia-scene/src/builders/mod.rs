//! # Procedural Builders
//!
//! Each builder drives a [`MeshBackend`](crate::MeshBackend) to produce one
//! part of the sculpture and returns the node that holds it.

pub mod cuboids;
pub mod orbits;
pub mod sculpture;
pub mod torus;

pub use cuboids::{distribute_cuboids, CuboidDistributionParams};
pub use orbits::{build_orbit_rings, build_outline_sphere, OutlineParams};
pub use sculpture::{build_sculpture, SculptureParams};
pub use torus::{build_full_torus, TorusParams};
