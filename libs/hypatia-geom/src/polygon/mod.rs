//! # 2D Polygons
//!
//! Closed 2D polygons and the ray-casting inclusion test used by the face
//! sampler.
//!
//! ## Boundary behavior
//!
//! The test adds a small epsilon to every edge's y-span so horizontal edges
//! never divide by zero. Points lying exactly on an edge or vertex may be
//! reported inside or outside; callers must not rely on either answer.

use glam::DVec2;

use config::constants::POINT_IN_POLYGON_EPSILON;

use crate::error::{GeometryError, GeometryResult};

/// A closed polygon; the last point implicitly connects to the first.
///
/// Holds at least three finite points. Self-intersection is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    points: Vec<DVec2>,
}

impl Polygon2D {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns a validation error for fewer than three points or any
    /// non-finite coordinate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use hypatia_geom::Polygon2D;
    ///
    /// let square = Polygon2D::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(1.0, 1.0),
    ///     DVec2::new(0.0, 1.0),
    /// ]).unwrap();
    /// assert!(square.contains(DVec2::new(0.5, 0.5)));
    /// ```
    pub fn new(points: Vec<DVec2>) -> GeometryResult<Self> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Returns the vertices.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Tests inclusion with the default epsilon.
    pub fn contains(&self, point: DVec2) -> bool {
        self.contains_with_epsilon(point, POINT_IN_POLYGON_EPSILON)
    }

    /// Tests inclusion with a caller-chosen y-span epsilon.
    pub fn contains_with_epsilon(&self, point: DVec2, epsilon: f64) -> bool {
        ray_cast(point, &self.points, epsilon)
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }

    /// Signed area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let twice: f64 = (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum();
        twice / 2.0
    }
}

/// Tests whether `point` lies inside the closed polygon `polygon`.
///
/// # Errors
///
/// Returns a validation error when the polygon has fewer than three points
/// or a non-finite coordinate.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use hypatia_geom::point_in_polygon;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// assert!(point_in_polygon(DVec2::new(0.5, 0.5), &square).unwrap());
/// assert!(!point_in_polygon(DVec2::new(2.0, 2.0), &square).unwrap());
/// ```
pub fn point_in_polygon(point: DVec2, polygon: &[DVec2]) -> GeometryResult<bool> {
    validate_points(polygon)?;
    Ok(ray_cast(point, polygon, POINT_IN_POLYGON_EPSILON))
}

/// Ray casting toward +x. Edge `(i, j)` pairs each vertex with its
/// predecessor, wrapping at the start.
pub(crate) fn ray_cast(point: DVec2, polygon: &[DVec2], epsilon: f64) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y + epsilon) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn validate_points(points: &[DVec2]) -> GeometryResult<()> {
    if points.len() < 3 {
        return Err(GeometryError::validation(format!(
            "polygon requires at least 3 points, got {}",
            points.len()
        )));
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(GeometryError::validation(format!(
            "polygon point {index} is not finite"
        )));
    }
    Ok(())
}
