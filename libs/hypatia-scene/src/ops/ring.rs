//! # Ring Extrusion
//!
//! Elliptical annulus extruded along +Z, the solid used for orbit rings and
//! outline sphere rings.

use std::f64::consts::TAU;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use config::constants::{
    DEFAULT_ORBIT_RADIUS, DEFAULT_RING_DEPTH, DEFAULT_RING_SEGMENTS, DEFAULT_RING_THICKNESS,
    MIN_PATH_SECTIONS,
};
use hypatia_geom::GeometryError;

use crate::error::{ensure_positive, SceneResult};
use crate::mesh::Mesh;

/// Shape of an extruded ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParams {
    /// Outer radius along X.
    pub radius_x: f64,
    /// Outer radius along Y.
    pub radius_y: f64,
    /// Radial width, measured along X.
    pub thickness: f64,
    /// Extrusion length along +Z.
    pub depth: f64,
    /// Points per ellipse.
    pub segments: u32,
}

impl Default for RingParams {
    fn default() -> Self {
        Self::circular(
            DEFAULT_ORBIT_RADIUS,
            DEFAULT_RING_THICKNESS,
            DEFAULT_RING_DEPTH,
            DEFAULT_RING_SEGMENTS,
        )
    }
}

impl RingParams {
    /// A ring with equal radii.
    pub fn circular(radius: f64, thickness: f64, depth: f64, segments: u32) -> Self {
        Self {
            radius_x: radius,
            radius_y: radius,
            thickness,
            depth,
            segments,
        }
    }

    /// Radii of the hole. The Y radius keeps the outer axis ratio.
    pub fn inner_radii(&self) -> (f64, f64) {
        let inner_x = self.radius_x - self.thickness;
        (inner_x, inner_x * self.radius_y / self.radius_x)
    }

    pub fn validate(&self) -> SceneResult<()> {
        ensure_positive("radius_x", self.radius_x)?;
        ensure_positive("radius_y", self.radius_y)?;
        ensure_positive("thickness", self.thickness)?;
        ensure_positive("depth", self.depth)?;
        if self.thickness >= self.radius_x {
            return Err(GeometryError::domain(format!(
                "ring thickness {} must be smaller than its radius {}",
                self.thickness, self.radius_x
            ))
            .into());
        }
        if self.segments < MIN_PATH_SECTIONS {
            return Err(GeometryError::domain(format!(
                "ring needs at least {MIN_PATH_SECTIONS} segments, got {}",
                self.segments
            ))
            .into());
        }
        Ok(())
    }
}

/// Builds the ring mesh: outer wall, inner wall, top and bottom caps.
///
/// Vertices are laid out four per segment (outer bottom, outer top, inner
/// bottom, inner top); every face is wound outward.
///
/// # Example
///
/// ```rust
/// use hypatia_scene::ops::{extrude_ring, RingParams};
///
/// let mesh = extrude_ring(&RingParams::circular(10.0, 1.0, 2.0, 32)).unwrap();
/// assert_eq!(mesh.vertex_count(), 128);
/// assert_eq!(mesh.triangle_count(), 256);
/// ```
pub fn extrude_ring(params: &RingParams) -> SceneResult<Mesh> {
    params.validate()?;

    let segments = params.segments as usize;
    let (inner_x, inner_y) = params.inner_radii();
    let mut mesh = Mesh::with_capacity(segments * 4, segments * 8);

    for k in 0..segments {
        let angle = TAU * k as f64 / segments as f64;
        let (sin, cos) = angle.sin_cos();
        let outer = DVec3::new(params.radius_x * cos, params.radius_y * sin, 0.0);
        let inner = DVec3::new(inner_x * cos, inner_y * sin, 0.0);
        let lift = DVec3::Z * params.depth;

        mesh.add_vertex(outer);
        mesh.add_vertex(outer + lift);
        mesh.add_vertex(inner);
        mesh.add_vertex(inner + lift);
    }

    for k in 0..segments {
        let a = (k * 4) as u32;
        let b = (((k + 1) % segments) * 4) as u32;
        let (ob, ot, ib, it) = (0, 1, 2, 3);

        // Outer wall
        mesh.add_triangle(a + ob, b + ob, b + ot);
        mesh.add_triangle(a + ob, b + ot, a + ot);
        // Inner wall
        mesh.add_triangle(a + ib, b + it, b + ib);
        mesh.add_triangle(a + ib, a + it, b + it);
        // Top
        mesh.add_triangle(a + ot, b + ot, b + it);
        mesh.add_triangle(a + ot, b + it, a + it);
        // Bottom
        mesh.add_triangle(a + ob, b + ib, b + ob);
        mesh.add_triangle(a + ob, a + ib, b + ib);
    }

    Ok(mesh)
}
