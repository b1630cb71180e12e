//! # Sculpture
//!
//! The complete Hypatia form: full torus, orbit rings and outline sphere
//! under one root group.

use log::info;
use serde::{Deserialize, Serialize};

use config::constants::DEFAULT_RING_SEGMENTS;
use hypatia_geom::OrbitLayoutParams;

use crate::backend::{MeshBackend, NodeId};
use crate::builders::orbits::{build_orbit_rings, build_outline_sphere, OutlineParams};
use crate::builders::torus::{build_full_torus, TorusParams};
use crate::error::SceneResult;

/// Name of the sculpture root group.
pub const SCULPTURE_NAME: &str = "hypatia";

/// Parameters of the whole sculpture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SculptureParams {
    /// Central torus.
    pub torus: TorusParams,
    /// Concentric orbit rings around the torus.
    pub orbits: OrbitLayoutParams,
    /// Points per orbit ring ellipse.
    pub orbit_segments: u32,
    /// Rings tracing the enclosing sphere.
    pub outline: OutlineParams,
}

impl Default for SculptureParams {
    fn default() -> Self {
        Self {
            torus: TorusParams::default(),
            orbits: OrbitLayoutParams::default(),
            orbit_segments: DEFAULT_RING_SEGMENTS,
            outline: OutlineParams::default(),
        }
    }
}

/// Builds the sculpture and returns its root group, named
/// [`SCULPTURE_NAME`].
pub fn build_sculpture<B>(backend: &mut B, params: &SculptureParams) -> SceneResult<NodeId>
where
    B: MeshBackend + ?Sized,
{
    let torus = build_full_torus(backend, &params.torus)?;
    let orbits = build_orbit_rings(backend, &params.orbits, params.orbit_segments)?;
    let outline = build_outline_sphere(backend, &params.outline)?;

    let root = backend.group(SCULPTURE_NAME, &[torus, orbits, outline])?;
    info!("sculpture assembled");
    Ok(root)
}
