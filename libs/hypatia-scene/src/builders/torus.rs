//! # Full Torus
//!
//! Four quadrant profiles, each rotated about Z by its quadrant angle and
//! swept around a circular path, united into one mesh.

use glam::{DMat4, DVec3};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use config::constants::{DEFAULT_PATH_DIVISIONS, DEFAULT_TORUS_RADIUS, QUADRANT_ANGLES};
use hypatia_geom::{quadrant_profile, GeometryError, QuadrantProfileParams};

use crate::backend::{MeshBackend, NodeId};
use crate::error::{ensure_positive, SceneResult};

/// Name of the united torus node.
pub const FULL_TORUS_NAME: &str = "fullTorus";

/// Parameters of the full torus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    /// Cross-section outline.
    pub profile: QuadrantProfileParams,
    /// Radius of the circular sweep path.
    pub torus_radius: f64,
    /// Points on the sweep path.
    pub path_divisions: u32,
    /// Rotation of each quadrant about Z, in degrees.
    pub quadrant_angles: [f64; 4],
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            profile: QuadrantProfileParams::default(),
            torus_radius: DEFAULT_TORUS_RADIUS,
            path_divisions: DEFAULT_PATH_DIVISIONS,
            quadrant_angles: QUADRANT_ANGLES,
        }
    }
}

impl TorusParams {
    /// Checks the parameters that the profile does not cover.
    ///
    /// The path radius must exceed the profile radius so the swept tube
    /// does not pass through the axis.
    pub fn validate(&self) -> SceneResult<()> {
        self.profile.validate()?;
        ensure_positive("torus_radius", self.torus_radius)?;
        if self.torus_radius <= self.profile.circle_radius {
            return Err(GeometryError::domain(format!(
                "torus radius {} must exceed the profile radius {}",
                self.torus_radius, self.profile.circle_radius
            ))
            .into());
        }
        if let Some(angle) = self.quadrant_angles.iter().find(|a| !a.is_finite()) {
            return Err(GeometryError::validation(format!(
                "quadrant angle must be finite, got {angle}"
            ))
            .into());
        }
        Ok(())
    }
}

/// Builds the full torus and returns the united node, named
/// [`FULL_TORUS_NAME`].
///
/// Construction curves are deleted as soon as their sweep exists, so the
/// backend ends up holding only the united mesh.
pub fn build_full_torus<B>(backend: &mut B, params: &TorusParams) -> SceneResult<NodeId>
where
    B: MeshBackend + ?Sized,
{
    params.validate()?;
    let profile = quadrant_profile(&params.profile)?;
    let curve_points = profile.to_curve_points(0.0);

    let mut swept = Vec::with_capacity(params.quadrant_angles.len());
    for (i, angle) in params.quadrant_angles.iter().enumerate() {
        let curve = backend.create_curve(&format!("quadrantProfile_{i}"), &curve_points, true)?;
        backend.set_transform(curve, DMat4::from_rotation_z(angle.to_radians()))?;

        let path = backend.create_circle(
            &format!("torusPath_{i}"),
            params.torus_radius,
            DVec3::Y,
            params.path_divisions,
        )?;
        swept.push(backend.sweep(&format!("sweptTorus_{i}"), curve, path)?);

        backend.delete(curve)?;
        backend.delete(path)?;
        debug!("swept quadrant {i} at {angle} degrees");
    }

    let torus = backend.boolean_union(FULL_TORUS_NAME, &swept)?;
    info!(
        "assembled full torus from {} quadrant sweeps (radius {}, {} path divisions)",
        swept.len(),
        params.torus_radius,
        params.path_divisions
    );
    Ok(torus)
}
