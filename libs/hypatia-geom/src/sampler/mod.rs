//! # Face-Grid Sampler
//!
//! Overlays a uniform `grid × grid` lattice on a planar 3D face and yields
//! the cell centers that fall inside the face, lifted back into 3D.
//!
//! ## Algorithm
//!
//! 1. Derive the face frame (centroid, normal, tangent, binormal)
//! 2. Project the face vertices into the `(tangent, binormal)` plane
//! 3. Split the projected bounding box into `grid × grid` cells
//! 4. Keep cell centers inside the projected polygon (ray casting)
//! 5. Lift each kept center to `centroid + t·u + b·v + n·offset`
//!
//! Samples are produced lazily, u-index outer and v-index inner. The
//! iterator is finite (at most `grid²` items), deterministic, and not
//! restartable.

use std::iter::FusedIterator;

use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};

use config::constants::{DEFAULT_FACE_GRID, MAX_FACE_GRID};
use config::tolerances::Tolerances;

use crate::error::{GeometryError, GeometryResult};
use crate::frame::{validate_offset, Basis, FaceFrame};
use crate::polygon::{ray_cast, Polygon2D};

/// Sampling parameters for one face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceGridParams {
    /// Cells along each local axis.
    pub grid: u32,
    /// Distance of the samples from the face plane, along the normal.
    pub offset: f64,
}

impl Default for FaceGridParams {
    fn default() -> Self {
        Self {
            grid: DEFAULT_FACE_GRID,
            offset: 0.0,
        }
    }
}

impl FaceGridParams {
    /// Creates sampling parameters.
    pub fn new(grid: u32, offset: f64) -> Self {
        Self { grid, offset }
    }

    /// Checks the grid range and the offset.
    ///
    /// # Errors
    ///
    /// Domain error for a grid outside `1..=MAX_FACE_GRID` or a negative
    /// offset; validation error for a non-finite offset.
    pub fn validate(&self) -> GeometryResult<()> {
        if self.grid < 1 {
            return Err(GeometryError::domain("grid must be at least 1"));
        }
        if self.grid > MAX_FACE_GRID {
            return Err(GeometryError::domain(format!(
                "grid {} exceeds the maximum of {MAX_FACE_GRID}",
                self.grid
            )));
        }
        validate_offset(self.offset)
    }
}

/// A sample point on a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    /// World position, offset along the face normal.
    pub position: DVec3,
    /// Cell center in the face's local 2D frame.
    pub uv: DVec2,
    /// Orientation aligning local Z with the face normal.
    pub basis: Basis,
}

impl GridSample {
    /// Transform placing an object at this sample, local Z along the normal.
    pub fn transform(&self) -> DMat4 {
        self.basis.to_mat4(self.position)
    }
}

/// Lazy iterator over the samples of one face.
#[derive(Debug, Clone)]
pub struct FaceSamples {
    frame: FaceFrame,
    polygon: Polygon2D,
    min: DVec2,
    spacing: DVec2,
    grid: u32,
    offset: f64,
    epsilon: f64,
    cursor: u64,
}

impl FaceSamples {
    /// Frame derived for the face.
    pub fn frame(&self) -> &FaceFrame {
        &self.frame
    }

    /// Face vertices projected into the local frame.
    pub fn projected_polygon(&self) -> &Polygon2D {
        &self.polygon
    }

    /// Size of one grid cell in local units.
    pub fn cell_size(&self) -> DVec2 {
        self.spacing
    }

    fn cell_count(&self) -> u64 {
        u64::from(self.grid) * u64::from(self.grid)
    }

    fn cell_center(&self, iu: u32, iv: u32) -> DVec2 {
        self.min + self.spacing / 2.0 + self.spacing * DVec2::new(f64::from(iu), f64::from(iv))
    }
}

impl Iterator for FaceSamples {
    type Item = GridSample;

    fn next(&mut self) -> Option<GridSample> {
        let total = self.cell_count();
        while self.cursor < total {
            let iu = (self.cursor / u64::from(self.grid)) as u32;
            let iv = (self.cursor % u64::from(self.grid)) as u32;
            self.cursor += 1;

            let uv = self.cell_center(iu, iv);
            if !ray_cast(uv, self.polygon.points(), self.epsilon) {
                continue;
            }
            return Some(GridSample {
                position: self.frame.unproject(uv, self.offset),
                uv,
                basis: self.frame.basis,
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cell_count().saturating_sub(self.cursor);
        (0, usize::try_from(remaining).ok())
    }
}

impl FusedIterator for FaceSamples {}

/// Samples a planar face.
///
/// # Errors
///
/// - Validation error for fewer than three vertices or non-finite input
/// - Domain error for collinear leading vertices, `grid < 1`, or a negative
///   offset
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hypatia_geom::{sample_face, FaceGridParams};
/// use config::tolerances::Tolerances;
///
/// let face = [
///     DVec3::new(-1.0, -1.0, 0.0),
///     DVec3::new(1.0, -1.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(-1.0, 1.0, 0.0),
/// ];
/// let samples: Vec<_> = sample_face(&face, &FaceGridParams::new(2, 0.5), &Tolerances::default())
///     .unwrap()
///     .collect();
/// assert_eq!(samples.len(), 4);
/// assert!(samples.iter().all(|s| (s.position.z - 0.5).abs() < 1e-12));
/// ```
pub fn sample_face(
    vertices: &[DVec3],
    params: &FaceGridParams,
    tolerances: &Tolerances,
) -> GeometryResult<FaceSamples> {
    params.validate()?;
    let frame = FaceFrame::from_vertices(vertices, tolerances)?;
    let polygon = frame.project_polygon(vertices)?;

    let (min, max) = polygon.bounds();
    let spacing = (max - min) / f64::from(params.grid);

    Ok(FaceSamples {
        frame,
        polygon,
        min,
        spacing,
        grid: params.grid,
        offset: params.offset,
        epsilon: tolerances.point_in_polygon_epsilon,
        cursor: 0,
    })
}
