//! Polyhedron primitive.
//!
//! Index-based polyhedron plus the regular dodecahedron used as the carrier
//! surface for cuboid distribution.

use glam::DVec3;
use serde::Serialize;

use config::constants::BASIS_AXIS_THRESHOLD;

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::frame::Basis;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Polyhedron given by vertex positions and faces of vertex indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyhedron {
    vertices: Vec<DVec3>,
    faces: Vec<Vec<usize>>,
}

impl Polyhedron {
    /// Creates a polyhedron from points and faces.
    ///
    /// # Arguments
    /// * `vertices` - List of 3D points.
    /// * `faces` - List of faces, each a list of indices into `vertices`.
    ///
    /// # Errors
    /// Validation error for fewer than 4 vertices or faces, a face with fewer
    /// than 3 indices, an out-of-range index or a non-finite vertex.
    pub fn new(vertices: Vec<DVec3>, faces: Vec<Vec<usize>>) -> GeometryResult<Self> {
        if vertices.len() < 4 {
            return Err(GeometryError::validation(format!(
                "polyhedron requires at least 4 vertices, got {}",
                vertices.len()
            )));
        }
        if faces.len() < 4 {
            return Err(GeometryError::validation(format!(
                "polyhedron requires at least 4 faces, got {}",
                faces.len()
            )));
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::validation(format!(
                "polyhedron vertex {index} is not finite"
            )));
        }
        for (face_idx, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(GeometryError::validation(format!(
                    "face {face_idx} has fewer than 3 vertices"
                )));
            }
            if let Some(&bad) = face.iter().find(|&&i| i >= vertices.len()) {
                return Err(GeometryError::validation(format!(
                    "face {face_idx} references vertex {bad}, but only {} exist",
                    vertices.len()
                )));
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Regular dodecahedron centered at the origin.
    ///
    /// 20 vertices on a sphere of radius `circumradius` and 12 pentagonal
    /// faces. Every face is wound counter-clockwise seen from outside, so
    /// the normal from its first three vertices points away from the center.
    ///
    /// # Errors
    /// Domain error for a non-positive circumradius, validation error for a
    /// non-finite one.
    pub fn dodecahedron(circumradius: f64) -> GeometryResult<Self> {
        ensure_finite("circumradius", circumradius)?;
        if circumradius <= 0.0 {
            return Err(GeometryError::domain(format!(
                "circumradius must be positive, got {circumradius}"
            )));
        }

        let inv = 1.0 / PHI;
        let mut unit = Vec::with_capacity(20);
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    unit.push(DVec3::new(x, y, z));
                }
            }
        }
        for a in [-1.0, 1.0] {
            for b in [-1.0, 1.0] {
                unit.push(DVec3::new(0.0, a * inv, b * PHI));
                unit.push(DVec3::new(a * inv, b * PHI, 0.0));
                unit.push(DVec3::new(a * PHI, 0.0, b * inv));
            }
        }

        // Face centers of the dodecahedron point at the icosahedron vertices.
        let mut centers = Vec::with_capacity(12);
        for a in [-1.0, 1.0] {
            for b in [-1.0, 1.0] {
                centers.push(DVec3::new(0.0, a * PHI, b));
                centers.push(DVec3::new(a, 0.0, b * PHI));
                centers.push(DVec3::new(a * PHI, b, 0.0));
            }
        }

        let faces = centers
            .iter()
            .map(|&center| pentagon_around(&unit, center))
            .collect::<GeometryResult<Vec<_>>>()?;

        let scale = circumradius / 3.0_f64.sqrt();
        let vertices = unit.into_iter().map(|v| v * scale).collect();
        Self::new(vertices, faces)
    }

    /// Vertex positions.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Faces as index lists.
    pub fn face_indices(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Positions of the vertices of face `index`, or `None` past the end.
    pub fn face_vertices(&self, index: usize) -> Option<Vec<DVec3>> {
        self.faces
            .get(index)
            .map(|face| face.iter().map(|&i| self.vertices[i]).collect())
    }

    /// Iterates over every face as a list of vertex positions.
    pub fn faces(&self) -> impl Iterator<Item = Vec<DVec3>> + '_ {
        self.faces
            .iter()
            .map(move |face| face.iter().map(|&i| self.vertices[i]).collect())
    }
}

/// The five vertices nearest `center`, ordered counter-clockwise around it.
fn pentagon_around(vertices: &[DVec3], center: DVec3) -> GeometryResult<Vec<usize>> {
    let direction = center.normalize();
    let mut by_height: Vec<usize> = (0..vertices.len()).collect();
    by_height.sort_by(|&a, &b| {
        vertices[b]
            .dot(direction)
            .total_cmp(&vertices[a].dot(direction))
    });
    by_height.truncate(5);

    let basis = Basis::from_normal(direction, BASIS_AXIS_THRESHOLD)?;
    let angle = |i: usize| {
        let v = vertices[i];
        v.dot(basis.binormal).atan2(v.dot(basis.tangent))
    };
    by_height.sort_by(|&a, &b| angle(a).total_cmp(&angle(b)));
    Ok(by_height)
}

#[cfg(test)]
mod tests;
