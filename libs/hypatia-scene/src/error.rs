//! # Scene Errors
//!
//! Error types for backend operations and procedural builders.

use config::ConfigError;
use hypatia_geom::GeometryError;
use thiserror::Error;

use crate::backend::NodeId;

/// Errors that can occur while building the scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Error from the geometry layer
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Invalid tolerance configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Node id that was never issued or has been deleted
    #[error("Unknown node: {id}")]
    UnknownNode { id: NodeId },

    /// Node exists but cannot take part in the operation
    #[error("Invalid node {id}: {message}")]
    InvalidNode { id: NodeId, message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    Degenerate { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl SceneError {
    /// Creates an invalid node error.
    pub fn invalid_node(id: NodeId, message: impl Into<String>) -> Self {
        Self::InvalidNode {
            id,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Rejects non-finite or non-positive parameters.
pub(crate) fn ensure_positive(name: &str, value: f64) -> SceneResult<()> {
    if !value.is_finite() {
        return Err(GeometryError::validation(format!("{name} must be finite, got {value}")).into());
    }
    if value <= 0.0 {
        return Err(GeometryError::domain(format!("{name} must be positive, got {value}")).into());
    }
    Ok(())
}
