//! # Primitives
//!
//! Curve and mesh generation for the basic shapes the builders place.

pub mod circle;
pub mod cuboid;
pub mod polyhedron;

pub use circle::circle_points;
pub use cuboid::create_cuboid;
pub use polyhedron::polyhedron_mesh;
