//! # Cuboid Distribution
//!
//! Covers every face of a dodecahedron with small cuboids standing on the
//! face, one per grid cell whose center falls inside the face.
//!
//! Faces are sampled in parallel; nodes are then created in face order so
//! the resulting scene does not depend on thread scheduling.

use glam::DVec3;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use config::constants::{DEFAULT_CUBOID_DIMS, DEFAULT_FACE_GRID, DEFAULT_POLYHEDRON_SIZE};
use config::tolerances::Tolerances;
use hypatia_geom::{sample_face, FaceGridParams, GeometryResult, GridSample, Polyhedron};

use crate::backend::{MeshBackend, NodeId};
use crate::error::{ensure_positive, SceneResult};

/// Name of the dodecahedron node.
pub const DODECAHEDRON_NAME: &str = "dodecahedron";

/// Name of the group holding every face group.
pub const CUBOID_MASTER_NAME: &str = "dodec_smallCubes_Master";

/// Parameters of the cuboid distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuboidDistributionParams {
    /// Overall size of the dodecahedron; its circumradius is half of this.
    pub polyhedron_size: f64,
    /// Cells per axis on each face.
    pub grid: u32,
    /// Cuboid dimensions. The largest is the flush dimension, aligned with
    /// the face normal.
    pub cuboid_dims: [f64; 3],
    /// Tolerances for face frames and the inclusion test.
    pub tolerances: Tolerances,
}

impl Default for CuboidDistributionParams {
    fn default() -> Self {
        Self {
            polyhedron_size: DEFAULT_POLYHEDRON_SIZE,
            grid: DEFAULT_FACE_GRID,
            cuboid_dims: DEFAULT_CUBOID_DIMS,
            tolerances: Tolerances::default(),
        }
    }
}

impl CuboidDistributionParams {
    /// Splits the dimensions into `(width, height, flush)`.
    ///
    /// One occurrence of the largest dimension becomes the flush dimension;
    /// the other two keep their order.
    pub fn cuboid_size(&self) -> DVec3 {
        let dims = self.cuboid_dims;
        let flush_index = (0..3).fold(0, |best, i| if dims[i] > dims[best] { i } else { best });
        let mut rest = (0..3).filter(|&i| i != flush_index).map(|i| dims[i]);
        let width = rest.next().unwrap_or_default();
        let height = rest.next().unwrap_or_default();
        DVec3::new(width, height, dims[flush_index])
    }

    /// Sampling parameters for every face: the configured grid, offset by
    /// half the flush dimension so cuboids stand on the face.
    pub fn face_grid(&self) -> FaceGridParams {
        FaceGridParams::new(self.grid, self.cuboid_size().z / 2.0)
    }

    /// Checks every parameter, so a rejected distribution leaves the
    /// backend untouched.
    pub fn validate(&self) -> SceneResult<()> {
        ensure_positive("polyhedron_size", self.polyhedron_size)?;
        for (i, dim) in self.cuboid_dims.iter().enumerate() {
            ensure_positive(&format!("cuboid_dims[{i}]"), *dim)?;
        }
        self.face_grid().validate()?;
        self.tolerances.validate()?;
        Ok(())
    }
}

/// Builds the dodecahedron, distributes cuboids over its faces and returns
/// the master group, or `None` when no face received a cuboid.
///
/// The dodecahedron is left as a separate root node named
/// [`DODECAHEDRON_NAME`]. Each face with samples gets a group
/// `dodec_face_NN_group` of cuboids `dodec_face_NN_cube_KKK`.
pub fn distribute_cuboids<B>(
    backend: &mut B,
    params: &CuboidDistributionParams,
) -> SceneResult<Option<NodeId>>
where
    B: MeshBackend + ?Sized,
{
    params.validate()?;
    let size = params.cuboid_size();

    let dodecahedron = Polyhedron::dodecahedron(params.polyhedron_size / 2.0)?;
    backend.create_polyhedron(DODECAHEDRON_NAME, &dodecahedron)?;

    let face_params = params.face_grid();
    let faces: Vec<Vec<DVec3>> = dodecahedron.faces().collect();
    let samples = faces
        .par_iter()
        .map(|face| {
            sample_face(face, &face_params, &params.tolerances)
                .map(|samples| samples.collect::<Vec<GridSample>>())
        })
        .collect::<GeometryResult<Vec<_>>>()?;

    let mut face_groups = Vec::new();
    for (face_index, face_samples) in samples.iter().enumerate() {
        if face_samples.is_empty() {
            warn!("face {face_index} has no grid cell inside it; skipping");
            continue;
        }

        let mut cuboids = Vec::with_capacity(face_samples.len());
        for (k, sample) in face_samples.iter().enumerate() {
            let cuboid =
                backend.create_cuboid(&format!("dodec_face_{face_index:02}_cube_{k:03}"), size)?;
            backend.set_transform(cuboid, sample.transform())?;
            cuboids.push(cuboid);
        }
        debug!("face {face_index}: {} cuboids", cuboids.len());
        face_groups.push(backend.group(&format!("dodec_face_{face_index:02}_group"), &cuboids)?);
    }

    if face_groups.is_empty() {
        warn!("no face produced a cuboid; master group not created");
        return Ok(None);
    }

    let total: usize = samples.iter().map(Vec::len).sum();
    let master = backend.group(CUBOID_MASTER_NAME, &face_groups)?;
    info!(
        "distributed {total} cuboids over {} of {} faces",
        face_groups.len(),
        faces.len()
    );
    Ok(Some(master))
}
