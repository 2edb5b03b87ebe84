//! # Mesh Errors
//!
//! Error types for the mesh build pipeline.

use thiserror::Error;

/// Errors that can occur while building a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Rejected build configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// The triangulation engine rejected the input
    #[error("Triangulation failed: {message}")]
    TriangulationFailed { message: String },

    /// A point could not be inserted into the triangulation
    #[error("Triangulation failed: {0}")]
    Insertion(#[from] spade::InsertionError),

    /// A triangle corner returned by the triangulation engine does not
    /// match any point in the canonical point list
    #[error("Unresolved triangle corner at ({x}, {y}): no matching canonical point")]
    UnresolvedCorner { x: f64, y: f64 },
}

impl MeshError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a triangulation failure error.
    pub fn triangulation_failed(message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
        }
    }
}
