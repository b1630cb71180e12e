//! # Profile Sweep
//!
//! Moves a closed 2D profile along a 3D path and skins the copies.
//!
//! ## Frame
//!
//! At each path vertex:
//!
//! ```text
//! tangent  = normalize(p[j+1] − p[j−1])     (one-sided at open ends)
//! up       = path plane normal (Newell), made orthogonal to the tangent
//! outward  = tangent × up
//! vertex   = p + outward · u + up · v
//! ```
//!
//! For a planar closed path wound counter-clockwise around its normal the
//! outward direction points away from the enclosed area, so a profile in the
//! positive quadrant sits outside the path.

use glam::{DVec2, DVec3};
use log::debug;

use config::constants::approx_zero;
use config::tolerances::Tolerances;
use hypatia_geom::{Basis, GeometryError};

use crate::error::{SceneError, SceneResult};
use crate::mesh::Mesh;

/// Sweeps a closed profile along a path.
///
/// # Arguments
///
/// * `profile` - Closed profile outline; repeated neighbouring points and a
///   repeated closing point are collapsed
/// * `path` - Path vertices in order
/// * `closed_path` - Whether the last path vertex connects back to the first
/// * `tolerances` - Degeneracy epsilon for the path normal and basis
///   threshold for the up direction of a straight path
///
/// # Returns
///
/// A mesh with one profile ring per path vertex and two triangles per
/// profile edge per path segment. Ends of an open path are left uncapped.
///
/// # Errors
///
/// - Degenerate error for fewer than 3 profile points, fewer than 2 path
///   points, or coincident neighbouring path points
/// - Geometry validation error for non-finite coordinates
pub fn sweep_profile(
    profile: &[DVec2],
    path: &[DVec3],
    closed_path: bool,
    tolerances: &Tolerances,
) -> SceneResult<Mesh> {
    let profile = distinct_loop(profile);
    let profile = profile.as_slice();
    let path = if closed_path {
        without_closing_point(path, |a, b| a.distance(*b))
    } else {
        path
    };

    if profile.len() < 3 {
        return Err(SceneError::degenerate(format!(
            "sweep profile needs at least 3 distinct points, got {}",
            profile.len()
        )));
    }
    if path.len() < 2 {
        return Err(SceneError::degenerate(format!(
            "sweep path needs at least 2 points, got {}",
            path.len()
        )));
    }
    if profile.iter().any(|p| !p.is_finite()) || path.iter().any(|p| !p.is_finite()) {
        return Err(GeometryError::validation("sweep input is not finite").into());
    }

    let up_hint = match newell_normal(path) {
        n if n.length() > tolerances.degeneracy_epsilon => n.normalize(),
        // Straight path: any direction perpendicular to it
        _ => {
            let tangent = (path[1] - path[0])
                .try_normalize()
                .ok_or_else(|| SceneError::degenerate("sweep path starts with coincident points"))?;
            Basis::from_normal(tangent, tolerances.basis_axis_threshold)?.tangent
        }
    };

    let n = path.len();
    let m = profile.len();
    let segments = if closed_path { n } else { n - 1 };
    let mut mesh = Mesh::with_capacity(n * m, segments * m * 2);

    for j in 0..n {
        let tangent = path_tangent(path, j, closed_path).try_normalize().ok_or_else(|| {
            SceneError::degenerate(format!("sweep path has coincident points around vertex {j}"))
        })?;
        let up = (up_hint - tangent * tangent.dot(up_hint))
            .try_normalize()
            .ok_or_else(|| {
                SceneError::degenerate(format!("sweep path is parallel to its up direction at vertex {j}"))
            })?;
        let outward = tangent.cross(up);

        for uv in profile {
            mesh.add_vertex(path[j] + outward * uv.x + up * uv.y);
        }
    }

    for j in 0..segments {
        let ring = (j * m) as u32;
        let next = (((j + 1) % n) * m) as u32;
        for i in 0..m {
            let i0 = i as u32;
            let i1 = ((i + 1) % m) as u32;
            mesh.add_triangle(ring + i0, ring + i1, next + i1);
            mesh.add_triangle(ring + i0, next + i1, next + i0);
        }
    }

    debug!(
        "swept {m}-point profile along {n}-point {} path: {} vertices, {} triangles",
        if closed_path { "closed" } else { "open" },
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Collapses runs of coincident points and drops a closing repeat.
fn distinct_loop(points: &[DVec2]) -> Vec<DVec2> {
    let mut distinct: Vec<DVec2> = Vec::with_capacity(points.len());
    for p in points {
        if distinct.last().map_or(true, |last| !approx_zero(last.distance(*p))) {
            distinct.push(*p);
        }
    }
    let trimmed = without_closing_point(&distinct, |a, b| a.distance(*b)).len();
    distinct.truncate(trimmed);
    distinct
}

/// Drops the last point when it repeats the first.
fn without_closing_point<T>(points: &[T], distance: impl Fn(&T, &T) -> f64) -> &[T] {
    match points {
        [first, .., last] if approx_zero(distance(first, last)) => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}

fn path_tangent(path: &[DVec3], j: usize, closed: bool) -> DVec3 {
    let n = path.len();
    if closed {
        path[(j + 1) % n] - path[(j + n - 1) % n]
    } else if j == 0 {
        path[1] - path[0]
    } else if j == n - 1 {
        path[n - 1] - path[n - 2]
    } else {
        path[j + 1] - path[j - 1]
    }
}

/// Newell's method: area-weighted normal of a (possibly non-planar) loop.
pub(crate) fn newell_normal(points: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}
