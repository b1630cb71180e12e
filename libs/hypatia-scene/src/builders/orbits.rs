//! # Orbit Rings and Outline Sphere
//!
//! Extruded rings placed by the orbit layout: concentric ellipses laid flat
//! and squashed by their perspective factor, and the great-circle rings of
//! the enclosing outline sphere.

use std::f64::consts::FRAC_PI_2;

use glam::{DMat4, DVec3};
use log::info;
use serde::{Deserialize, Serialize};

use config::constants::{
    DEFAULT_ORBIT_RADIUS, DEFAULT_OUTLINE_RING_COUNT, DEFAULT_RING_DEPTH, DEFAULT_RING_SEGMENTS,
    DEFAULT_RING_THICKNESS,
};
use hypatia_geom::{concentric_orbits, outline_orientations, OrbitLayoutParams};

use crate::backend::{MeshBackend, NodeId};
use crate::error::SceneResult;
use crate::ops::RingParams;

/// Name of the orbit ring group.
pub const ORBIT_GROUP_NAME: &str = "orbitRings";

/// Name of the outline sphere group.
pub const OUTLINE_GROUP_NAME: &str = "outline";

/// Builds one ring per orbit and groups them under [`ORBIT_GROUP_NAME`].
///
/// Each ring is rotated a quarter turn about X and scaled along its local
/// Z by the ring's perspective factor.
pub fn build_orbit_rings<B>(
    backend: &mut B,
    params: &OrbitLayoutParams,
    segments: u32,
) -> SceneResult<NodeId>
where
    B: MeshBackend + ?Sized,
{
    let rings = concentric_orbits(params)?;

    let mut nodes = Vec::with_capacity(rings.len());
    for ring in &rings {
        let shape = RingParams {
            radius_x: ring.radius,
            radius_y: ring.minor_radius,
            thickness: ring.thickness,
            depth: ring.depth,
            segments,
        };
        let node = backend.extrude_ring(&format!("orbitRing_{}", ring.index), &shape)?;
        let transform = DMat4::from_rotation_x(FRAC_PI_2)
            * DMat4::from_scale(DVec3::new(1.0, 1.0, ring.perspective));
        backend.set_transform(node, transform)?;
        nodes.push(node);
    }

    let group = backend.group(ORBIT_GROUP_NAME, &nodes)?;
    info!("built {} orbit rings", nodes.len());
    Ok(group)
}

/// Parameters of the outline sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineParams {
    /// Outer radius of every ring.
    pub radius: f64,
    /// Radial width of every ring.
    pub thickness: f64,
    /// Extrusion depth of every ring.
    pub depth: f64,
    /// Each set adds three rings.
    pub ring_sets: u32,
    /// Segments per ring outline.
    pub segments: u32,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_ORBIT_RADIUS,
            thickness: DEFAULT_RING_THICKNESS,
            depth: DEFAULT_RING_DEPTH,
            ring_sets: DEFAULT_OUTLINE_RING_COUNT,
            segments: DEFAULT_RING_SEGMENTS,
        }
    }
}

/// Builds the outline sphere rings and groups them under
/// [`OUTLINE_GROUP_NAME`].
pub fn build_outline_sphere<B>(backend: &mut B, params: &OutlineParams) -> SceneResult<NodeId>
where
    B: MeshBackend + ?Sized,
{
    let shape = RingParams::circular(params.radius, params.thickness, params.depth, params.segments);
    shape.validate()?;

    let orientations = outline_orientations(params.ring_sets)?;
    let mut nodes = Vec::with_capacity(orientations.len());
    for (i, orientation) in orientations.iter().enumerate() {
        let node = backend.extrude_ring(&format!("outlineRing_{i}"), &shape)?;
        backend.set_transform(node, DMat4::from_quat(*orientation))?;
        nodes.push(node);
    }

    let group = backend.group(OUTLINE_GROUP_NAME, &nodes)?;
    info!("built outline sphere from {} rings", nodes.len());
    Ok(group)
}
