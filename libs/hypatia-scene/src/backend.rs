//! # Mesh-Building Backend
//!
//! The seam between the procedural builders and whatever owns the actual
//! geometry. Builders only speak this trait; [`SceneGraph`](crate::SceneGraph)
//! is the in-memory implementation.

use std::fmt;

use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};

use hypatia_geom::Polyhedron;

use crate::error::SceneResult;
use crate::ops::RingParams;

/// Handle to a node created by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Operations the builders need from a modelling backend.
///
/// Every call either creates a node and returns its id or mutates an
/// existing one. Ids are only meaningful to the backend that issued them.
pub trait MeshBackend {
    /// Creates a polyline curve through `points`.
    fn create_curve(&mut self, name: &str, points: &[DVec3], closed: bool) -> SceneResult<NodeId>;

    /// Creates a closed circular curve around the origin, perpendicular to
    /// `normal`, with `sections` points.
    fn create_circle(
        &mut self,
        name: &str,
        radius: f64,
        normal: DVec3,
        sections: u32,
    ) -> SceneResult<NodeId>;

    /// Creates a box mesh of the given size centered at the origin.
    fn create_cuboid(&mut self, name: &str, size: DVec3) -> SceneResult<NodeId>;

    /// Creates a mesh from a polyhedron.
    fn create_polyhedron(&mut self, name: &str, polyhedron: &Polyhedron) -> SceneResult<NodeId>;

    /// Sweeps the `profile` curve along the `path` curve.
    ///
    /// The profile is read in its own world XY plane: a profile point `(x, y)`
    /// is placed `x` along the path's outward direction and `y` along its up
    /// direction.
    fn sweep(&mut self, name: &str, profile: NodeId, path: NodeId) -> SceneResult<NodeId>;

    /// Creates an extruded elliptical ring in the local XY plane.
    fn extrude_ring(&mut self, name: &str, params: &RingParams) -> SceneResult<NodeId>;

    /// Combines mesh nodes into one mesh node. The parts are consumed.
    fn boolean_union(&mut self, name: &str, parts: &[NodeId]) -> SceneResult<NodeId>;

    /// Replaces the local transform of a node.
    fn set_transform(&mut self, node: NodeId, transform: DMat4) -> SceneResult<()>;

    /// Creates a group and parents `children` under it.
    fn group(&mut self, name: &str, children: &[NodeId]) -> SceneResult<NodeId>;

    /// Deletes a node and everything below it.
    fn delete(&mut self, node: NodeId) -> SceneResult<()>;
}

/// Projects 3D profile points onto their XY plane.
pub(crate) fn profile_plane(points: &[DVec3]) -> Vec<DVec2> {
    points.iter().map(|p| p.truncate()).collect()
}
