//! # Quadrant Profile
//!
//! Builds the closed outline of one quadrant of a cross inscribed in a
//! circle. The outline is later swept along a path to form a quarter of the
//! torus cross-section.
//!
//! ## Layout
//!
//! ```text
//!  y
//!  |  V
//!  |  |\
//!  |  | \  arc (radius r)
//!  |  |  \
//!  |  C---H
//!  +-------------- x
//! ```
//!
//! `C = (t, t)` is the cross corner, `H = (d, t)` and `V = (t, d)` are the
//! points where the bars meet the circle, with `d = sqrt(r² − t²)`.

use glam::{DVec2, DVec3};
use log::debug;
use serde::{Deserialize, Serialize};

use config::constants::{DEFAULT_ARC_SECTIONS, DEFAULT_CIRCLE_RADIUS, DEFAULT_CROSS_THICKNESS};

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::interp::lerp;

/// Parameters of a quadrant profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadrantProfileParams {
    /// Radius of the circle enclosing the cross.
    pub circle_radius: f64,
    /// Half-width of the cross bars; must be smaller than the radius.
    pub cross_thickness: f64,
    /// Number of arc subdivisions (the arc holds `arc_sections + 1` points).
    pub arc_sections: u32,
}

impl Default for QuadrantProfileParams {
    fn default() -> Self {
        Self {
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            cross_thickness: DEFAULT_CROSS_THICKNESS,
            arc_sections: DEFAULT_ARC_SECTIONS,
        }
    }
}

impl QuadrantProfileParams {
    /// Creates a parameter set; validation happens when the profile is built.
    pub fn new(circle_radius: f64, cross_thickness: f64, arc_sections: u32) -> Self {
        Self {
            circle_radius,
            cross_thickness,
            arc_sections,
        }
    }

    /// Checks the geometric preconditions.
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_finite("circle_radius", self.circle_radius)?;
        ensure_finite("cross_thickness", self.cross_thickness)?;
        if self.arc_sections < 1 {
            return Err(GeometryError::domain("arc_sections must be at least 1"));
        }
        if self.cross_thickness < 0.0 {
            return Err(GeometryError::domain(format!(
                "cross_thickness must be non-negative, got {}",
                self.cross_thickness
            )));
        }
        if self.cross_thickness >= self.circle_radius {
            return Err(GeometryError::domain(format!(
                "cross_thickness ({}) must be smaller than circle_radius ({})",
                self.cross_thickness, self.circle_radius
            )));
        }
        Ok(())
    }

    /// Distance `d = sqrt(r² − t²)` from the axis to where a bar meets the
    /// circle.
    pub fn intersection_offset(&self) -> GeometryResult<f64> {
        self.validate()?;
        Ok((self.circle_radius.powi(2) - self.cross_thickness.powi(2)).sqrt())
    }
}

/// A closed quadrant outline.
///
/// Points run corner → horizontal intersection → arc → vertical
/// intersection → corner, so the first and last points are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantProfile {
    points: Vec<DVec2>,
    arc_sections: u32,
}

impl QuadrantProfile {
    /// All points of the closed loop, closing point included.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// The loop without its duplicated closing point.
    #[inline]
    pub fn unique_points(&self) -> &[DVec2] {
        &self.points[..self.points.len() - 1]
    }

    /// The interpolated arc, start to end inclusive.
    pub fn arc(&self) -> &[DVec2] {
        let count = self.arc_sections as usize + 1;
        &self.points[2..2 + count]
    }

    /// The cross corner `(t, t)`.
    #[inline]
    pub fn corner(&self) -> DVec2 {
        self.points[0]
    }

    /// Where the horizontal bar meets the circle, `(d, t)`.
    #[inline]
    pub fn horizontal_intersection(&self) -> DVec2 {
        self.points[1]
    }

    /// Where the vertical bar meets the circle, `(t, d)`.
    #[inline]
    pub fn vertical_intersection(&self) -> DVec2 {
        self.points[self.points.len() - 2]
    }

    /// Number of points including the closing point.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a profile has at least six points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true when the first and last points coincide.
    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }

    /// Flattens the outline to a planar 3D curve at height `z`.
    pub fn to_curve_points(&self, z: f64) -> Vec<DVec3> {
        self.points.iter().map(|p| p.extend(z)).collect()
    }

    /// Returns the outline rotated about the origin by `degrees`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypatia_geom::{quadrant_profile, QuadrantProfileParams};
    ///
    /// let profile = quadrant_profile(&QuadrantProfileParams::default()).unwrap();
    /// let rotated = profile.rotated(90.0);
    /// // The corner (t, t) moves into the second quadrant.
    /// assert!(rotated[0].x < 0.0 && rotated[0].y > 0.0);
    /// ```
    pub fn rotated(&self, degrees: f64) -> Vec<DVec2> {
        let rotation = DVec2::from_angle(degrees.to_radians());
        self.points.iter().map(|p| rotation.rotate(*p)).collect()
    }
}

/// Builds the closed quadrant outline for `params`.
///
/// # Errors
///
/// Returns a domain error when `cross_thickness >= circle_radius`,
/// `cross_thickness < 0` or `arc_sections < 1`, and a validation error for
/// non-finite inputs.
///
/// # Example
///
/// ```rust
/// use hypatia_geom::{quadrant_profile, QuadrantProfileParams};
///
/// let profile = quadrant_profile(&QuadrantProfileParams::new(1.0, 0.2, 8)).unwrap();
/// assert!(profile.is_closed());
/// assert_eq!(profile.arc().len(), 9);
///
/// assert!(quadrant_profile(&QuadrantProfileParams::new(1.0, 1.5, 8)).is_err());
/// ```
pub fn quadrant_profile(params: &QuadrantProfileParams) -> GeometryResult<QuadrantProfile> {
    let d = params.intersection_offset()?;
    let radius = params.circle_radius;
    let thickness = params.cross_thickness;

    let corner = DVec2::new(thickness, thickness);
    let horizontal = DVec2::new(d, thickness);
    let vertical = DVec2::new(thickness, d);

    // Interpolated in degrees, evaluated in radians.
    let angle_start = thickness.atan2(d).to_degrees();
    let angle_end = d.atan2(thickness).to_degrees();

    let sections = params.arc_sections;
    let mut points = Vec::with_capacity(sections as usize + 5);
    points.push(corner);
    points.push(horizontal);
    for i in 0..=sections {
        let t = i as f64 / sections as f64;
        let angle = lerp(angle_start, angle_end, t).to_radians();
        points.push(DVec2::new(angle.cos() * radius, angle.sin() * radius));
    }
    points.push(vertical);
    points.push(corner);

    debug!(
        "quadrant profile r={radius} t={thickness}: {} points, arc {angle_start:.3}..{angle_end:.3} deg",
        points.len()
    );

    Ok(QuadrantProfile {
        points,
        arc_sections: sections,
    })
}
