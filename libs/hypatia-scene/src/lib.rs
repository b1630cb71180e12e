//! # Hypatia Scene
//!
//! Turns the pure geometry of `hypatia-geom` into scene content through a
//! small modelling backend.
//!
//! ## Architecture
//!
//! ```text
//! hypatia-geom → builders → MeshBackend → SceneGraph (or any other backend)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hypatia_scene::{build_full_torus, SceneGraph, TorusParams};
//!
//! let mut scene = SceneGraph::new();
//! let torus = build_full_torus(&mut scene, &TorusParams::default()).unwrap();
//! assert_eq!(scene.roots(), vec![torus]);
//! assert_eq!(scene.node(torus).unwrap().name(), "fullTorus");
//! ```

pub mod backend;
pub mod builders;
pub mod error;
pub mod graph;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use backend::{MeshBackend, NodeId};
pub use builders::{
    build_full_torus, build_orbit_rings, build_outline_sphere, build_sculpture, distribute_cuboids,
    CuboidDistributionParams, OutlineParams, SculptureParams, TorusParams,
};
pub use error::{SceneError, SceneResult};
pub use graph::{Node, NodeKind, SceneGraph};
pub use mesh::Mesh;
pub use ops::RingParams;
