//! # Local Frames
//!
//! Orthonormal bases embedded in a plane and the per-face frame used to
//! project polyhedron faces into 2D and lift samples back into 3D.

use glam::{DMat4, DVec2, DVec3};

use config::tolerances::Tolerances;

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::polygon::Polygon2D;

/// Orthonormal orientation `(tangent, binormal, normal)`.
///
/// An object placed with [`Basis::to_mat4`] has its local X axis along the
/// tangent, Y along the binormal and Z along the normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// In-plane X direction.
    pub tangent: DVec3,
    /// In-plane Y direction, `normal × tangent`.
    pub binormal: DVec3,
    /// Plane normal.
    pub normal: DVec3,
}

impl Basis {
    /// Builds a basis around `normal`.
    ///
    /// The reference axis is X unless `|normal · X|` exceeds `threshold`, in
    /// which case Y is used. The tangent is the reference axis with its
    /// normal component removed.
    ///
    /// # Errors
    ///
    /// Returns a domain error for a zero or non-finite normal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use hypatia_geom::Basis;
    ///
    /// let basis = Basis::from_normal(DVec3::Z, 0.9).unwrap();
    /// assert_eq!(basis.tangent, DVec3::X);
    /// assert_eq!(basis.binormal, DVec3::Y);
    /// ```
    pub fn from_normal(normal: DVec3, threshold: f64) -> GeometryResult<Self> {
        let normal = normal
            .try_normalize()
            .ok_or_else(|| GeometryError::domain(format!("cannot build a basis around {normal}")))?;

        let reference = if normal.dot(DVec3::X).abs() > threshold {
            DVec3::Y
        } else {
            DVec3::X
        };
        let tangent = (reference - normal * normal.dot(reference)).normalize();
        let binormal = normal.cross(tangent).normalize();

        Ok(Self {
            tangent,
            binormal,
            normal,
        })
    }

    /// Rigid transform placing local axes on this basis at `position`.
    pub fn to_mat4(&self, position: DVec3) -> DMat4 {
        DMat4::from_cols(
            self.tangent.extend(0.0),
            self.binormal.extend(0.0),
            self.normal.extend(0.0),
            position.extend(1.0),
        )
    }
}

/// Frame of a planar 3D face: centroid plus orthonormal basis.
///
/// Derived once from the face vertices and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    /// Mean of the face vertices.
    pub centroid: DVec3,
    /// Orientation of the face plane.
    pub basis: Basis,
}

impl FaceFrame {
    /// Derives the frame of a face.
    ///
    /// The normal comes from the first three vertices,
    /// `normalize((v1 − v0) × (v2 − v0))`, so its direction follows the
    /// vertex winding.
    ///
    /// # Errors
    ///
    /// - Validation error for fewer than three vertices or non-finite input
    /// - Domain error when the first three vertices are collinear
    pub fn from_vertices(vertices: &[DVec3], tolerances: &Tolerances) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::validation(format!(
                "face requires at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::validation(format!(
                "face vertex {index} is not finite"
            )));
        }

        let centroid = vertices.iter().copied().sum::<DVec3>() / vertices.len() as f64;

        let (v0, v1, v2) = (vertices[0], vertices[1], vertices[2]);
        let cross = (v1 - v0).cross(v2 - v0);
        let magnitude = cross.length();
        if magnitude < tolerances.degeneracy_epsilon {
            return Err(GeometryError::domain(format!(
                "face normal is degenerate: first three vertices are collinear (|cross| = {magnitude:e})"
            )));
        }

        let basis = Basis::from_normal(cross / magnitude, tolerances.basis_axis_threshold)?;
        Ok(Self { centroid, basis })
    }

    /// Face normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.basis.normal
    }

    /// Coordinates of `point` in the `(tangent, binormal)` frame relative to
    /// the centroid. The normal component is discarded.
    #[inline]
    pub fn project(&self, point: DVec3) -> DVec2 {
        let rel = point - self.centroid;
        DVec2::new(rel.dot(self.basis.tangent), rel.dot(self.basis.binormal))
    }

    /// World position of local `(u, v)` lifted `offset` along the normal.
    #[inline]
    pub fn unproject(&self, uv: DVec2, offset: f64) -> DVec3 {
        self.centroid
            + self.basis.tangent * uv.x
            + self.basis.binormal * uv.y
            + self.basis.normal * offset
    }

    /// Projects every vertex of a face into this frame.
    pub fn project_polygon(&self, vertices: &[DVec3]) -> GeometryResult<Polygon2D> {
        Polygon2D::new(vertices.iter().map(|v| self.project(*v)).collect())
    }

    /// Signed distance of `point` from the face plane.
    pub fn plane_distance(&self, point: DVec3) -> f64 {
        (point - self.centroid).dot(self.basis.normal)
    }
}

/// Checks that a normal offset is usable.
pub(crate) fn validate_offset(offset: f64) -> GeometryResult<()> {
    ensure_finite("offset", offset)?;
    if offset < 0.0 {
        return Err(GeometryError::domain(format!(
            "offset along the normal must be non-negative, got {offset}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
