//! Error types for camber.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// The geometry is degenerate and cotangent weights are undefined.
    ///
    /// Raised for zero-length edges, collinear triangles, and vertices whose
    /// one-ring has zero area. Deterministic for a given mesh, so retrying is
    /// pointless; callers should report the mesh as unusable for curvature.
    #[error("degenerate geometry: {details}")]
    DegenerateGeometry {
        /// Description of the degeneracy and where it was found.
        details: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}

impl MeshError {
    /// Create a degenerate-geometry error.
    pub fn degenerate<S: Into<String>>(details: S) -> Self {
        MeshError::DegenerateGeometry {
            details: details.into(),
        }
    }
}
