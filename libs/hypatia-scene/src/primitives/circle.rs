//! # Circle Curve

use std::f64::consts::TAU;

use glam::DVec3;

use config::constants::MIN_PATH_SECTIONS;
use config::tolerances::Tolerances;
use hypatia_geom::{Basis, GeometryError};

use crate::error::{ensure_positive, SceneResult};

/// Points of a circle around the origin perpendicular to `normal`.
///
/// The circle starts on the basis tangent and runs counter-clockwise seen
/// from the tip of the normal. The closing point is not repeated.
pub fn circle_points(
    radius: f64,
    normal: DVec3,
    sections: u32,
    tolerances: &Tolerances,
) -> SceneResult<Vec<DVec3>> {
    ensure_positive("circle radius", radius)?;
    if sections < MIN_PATH_SECTIONS {
        return Err(GeometryError::domain(format!(
            "circle needs at least {MIN_PATH_SECTIONS} sections, got {sections}"
        ))
        .into());
    }
    let basis = Basis::from_normal(normal, tolerances.basis_axis_threshold)?;

    Ok((0..sections)
        .map(|k| {
            let (sin, cos) = (TAU * f64::from(k) / f64::from(sections)).sin_cos();
            (basis.tangent * cos + basis.binormal * sin) * radius
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_circle_about_y() {
        let points = circle_points(10.0, DVec3::Y, 50, &Tolerances::default()).unwrap();
        assert_eq!(points.len(), 50);
        for p in &points {
            assert_abs_diff_eq!(p.length(), 10.0, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!((points[0] - DVec3::new(10.0, 0.0, 0.0)).length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_circle_winds_around_normal() {
        let normal = DVec3::new(1.0, 2.0, -0.5);
        let points = circle_points(3.0, normal, 8, &Tolerances::default()).unwrap();
        let turn = points[0].cross(points[1]);
        assert!(turn.dot(normal) > 0.0);
    }

    #[test]
    fn test_invalid_circles() {
        let tol = Tolerances::default();
        assert!(circle_points(0.0, DVec3::Y, 8, &tol).is_err());
        assert!(circle_points(1.0, DVec3::Y, 2, &tol).is_err());
        assert!(circle_points(1.0, DVec3::ZERO, 8, &tol).is_err());
    }
}
