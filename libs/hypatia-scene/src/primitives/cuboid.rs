//! # Cuboid Primitive

use glam::DVec3;

use crate::error::{ensure_positive, SceneResult};
use crate::mesh::Mesh;

/// Creates a rectangular box mesh.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `center` - If true, center at origin; if false, corner at origin
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use hypatia_scene::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::new(0.5, 0.5, 5.0), true).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cuboid(size: DVec3, center: bool) -> SceneResult<Mesh> {
    ensure_positive("cuboid width", size.x)?;
    ensure_positive("cuboid height", size.y)?;
    ensure_positive("cuboid depth", size.z)?;

    let mut mesh = Mesh::with_capacity(8, 12);

    let (min, max) = if center {
        let half = size / 2.0;
        (-half, half)
    } else {
        (DVec3::ZERO, size)
    };

    // Bottom corners, then top corners, counter-clockwise from min
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Bottom (-z)
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);
    // Top (+z)
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);
    // Front (-y)
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);
    // Back (+y)
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);
    // Left (-x)
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);
    // Right (+x)
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_centered_cuboid_bounds() {
        let mesh = create_cuboid(DVec3::new(2.0, 4.0, 6.0), true).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_corner_cuboid_bounds() {
        let mesh = create_cuboid(DVec3::splat(3.0), false).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::splat(3.0));
    }

    #[test]
    fn test_cuboid_is_closed_and_outward() {
        let mesh = create_cuboid(DVec3::new(0.5, 0.5, 5.0), true).unwrap();
        assert!(mesh.validate());
        assert_abs_diff_eq!(mesh.signed_volume(), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_size_rejected() {
        assert!(create_cuboid(DVec3::new(1.0, 0.0, 1.0), true).is_err());
        assert!(create_cuboid(DVec3::new(-1.0, 1.0, 1.0), true).is_err());
    }
}
