//! # Orbit Layout
//!
//! Concentric elliptical orbit rings and the great-circle orientations of
//! the outline sphere.
//!
//! Ring `i` of `n` sits at progress `p = i / (n − 1)`:
//!
//! ```text
//! radius      = lerp(R · inner_ratio, R, p)
//! perspective = lerp(a, a · (1 + a), p)      a = axis ratio
//! tilt        = lerp(0, max_tilt, p)
//! ```
//!
//! Indices past the last ring keep following the same lines.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DQuat;
use serde::{Deserialize, Serialize};

use config::constants::{
    DEFAULT_AXIS_RATIO, DEFAULT_INNER_RADIUS_RATIO, DEFAULT_MAX_TILT_DEGREES,
    DEFAULT_ORBIT_RADIUS, DEFAULT_ORBIT_RING_COUNT, DEFAULT_RING_DEPTH, DEFAULT_RING_THICKNESS,
};

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::interp::lerp;

/// Layout of the concentric orbit rings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitLayoutParams {
    /// Number of rings, at least 1.
    pub ring_count: u32,
    /// Major radius of the outermost ring.
    pub radius: f64,
    /// Innermost radius as a fraction of `radius`.
    pub inner_radius_ratio: f64,
    /// Minor/major axis ratio of the innermost ring.
    pub axis_ratio: f64,
    /// Tilt of the outermost ring, in degrees; the innermost is untilted.
    pub max_tilt_degrees: f64,
    /// Radial width of every ring.
    pub thickness: f64,
    /// Extrusion depth of every ring.
    pub depth: f64,
}

impl Default for OrbitLayoutParams {
    fn default() -> Self {
        Self {
            ring_count: DEFAULT_ORBIT_RING_COUNT,
            radius: DEFAULT_ORBIT_RADIUS,
            inner_radius_ratio: DEFAULT_INNER_RADIUS_RATIO,
            axis_ratio: DEFAULT_AXIS_RATIO,
            max_tilt_degrees: DEFAULT_MAX_TILT_DEGREES,
            thickness: DEFAULT_RING_THICKNESS,
            depth: DEFAULT_RING_DEPTH,
        }
    }
}

impl OrbitLayoutParams {
    /// Radius of the innermost ring.
    pub fn inner_radius(&self) -> f64 {
        self.radius * self.inner_radius_ratio
    }

    /// Checks the layout.
    ///
    /// # Errors
    /// Validation error for non-finite values; domain error for no rings,
    /// a non-positive radius, ratio, thickness or depth, or a thickness not
    /// smaller than the innermost radius.
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_finite("radius", self.radius)?;
        ensure_finite("inner_radius_ratio", self.inner_radius_ratio)?;
        ensure_finite("axis_ratio", self.axis_ratio)?;
        ensure_finite("max_tilt_degrees", self.max_tilt_degrees)?;
        ensure_finite("thickness", self.thickness)?;
        ensure_finite("depth", self.depth)?;

        if self.ring_count < 1 {
            return Err(GeometryError::domain("orbit layout needs at least one ring"));
        }
        for (name, value) in [
            ("radius", self.radius),
            ("inner_radius_ratio", self.inner_radius_ratio),
            ("axis_ratio", self.axis_ratio),
            ("thickness", self.thickness),
            ("depth", self.depth),
        ] {
            if value <= 0.0 {
                return Err(GeometryError::domain(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.thickness >= self.inner_radius() {
            return Err(GeometryError::domain(format!(
                "ring thickness {} must be smaller than the innermost radius {}",
                self.thickness,
                self.inner_radius()
            )));
        }
        Ok(())
    }

    /// Progress of ring `index` along the layout.
    fn progress(&self, index: u32) -> f64 {
        if self.ring_count <= 1 {
            0.0
        } else {
            f64::from(index) / f64::from(self.ring_count - 1)
        }
    }
}

/// One orbit ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitRing {
    /// Position from the innermost ring, starting at 0.
    pub index: u32,
    /// Major (x) radius.
    pub radius: f64,
    /// Minor (y) radius, `radius · perspective`.
    pub minor_radius: f64,
    /// Minor/major axis ratio, also the depth scale of the ring.
    pub perspective: f64,
    /// Tilt in degrees.
    pub tilt_degrees: f64,
    /// Radial width.
    pub thickness: f64,
    /// Extrusion depth.
    pub depth: f64,
}

impl OrbitRing {
    /// Major radius of the hole.
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.thickness
    }
}

/// Computes ring `index` of the layout.
///
/// # Errors
/// Returns the errors of [`OrbitLayoutParams::validate`].
pub fn orbit_ring(params: &OrbitLayoutParams, index: u32) -> GeometryResult<OrbitRing> {
    params.validate()?;
    Ok(ring_at(params, index))
}

/// Computes every ring of the layout, innermost first.
///
/// # Errors
/// Returns the errors of [`OrbitLayoutParams::validate`].
pub fn concentric_orbits(params: &OrbitLayoutParams) -> GeometryResult<Vec<OrbitRing>> {
    params.validate()?;
    Ok((0..params.ring_count).map(|i| ring_at(params, i)).collect())
}

fn ring_at(params: &OrbitLayoutParams, index: u32) -> OrbitRing {
    let p = params.progress(index);
    let radius = lerp(params.inner_radius(), params.radius, p);
    let a = params.axis_ratio;
    let perspective = lerp(a, a * (1.0 + a), p);
    OrbitRing {
        index,
        radius,
        minor_radius: radius * perspective,
        perspective,
        tilt_degrees: lerp(0.0, params.max_tilt_degrees, p),
        thickness: params.thickness,
        depth: params.depth,
    }
}

/// Orientations of the outline sphere rings.
///
/// For each `θ = i · 2π / count` three rings are produced: rotated about X
/// by θ, rotated about Y by θ, and rotated about X by π/2 after a rotation
/// about Y by θ. A ring lies in its local XY plane.
///
/// # Errors
/// Domain error when `count` is zero.
pub fn outline_orientations(count: u32) -> GeometryResult<Vec<DQuat>> {
    if count == 0 {
        return Err(GeometryError::domain("outline needs at least one ring set"));
    }
    let mut orientations = Vec::with_capacity(count as usize * 3);
    for i in 0..count {
        let theta = f64::from(i) * TAU / f64::from(count);
        orientations.push(DQuat::from_rotation_x(theta));
        orientations.push(DQuat::from_rotation_y(theta));
        orientations.push(DQuat::from_rotation_x(FRAC_PI_2) * DQuat::from_rotation_y(theta));
    }
    Ok(orientations)
}

#[cfg(test)]
mod tests;
