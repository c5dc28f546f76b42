//! Mesh file I/O.
//!
//! This module provides functions for loading and saving triangle meshes in
//! several common formats.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | Wavefront OBJ | `.obj` | ✓ | ✓ | Positions and faces only |
//! | OFF | `.off` | ✓ | ✓ | Object File Format |
//! | PLY | `.ply` | ✓ | ✓ | Stanford polygon format; can carry per-vertex quality |
//!
//! Polygonal faces with more than three sides are fan-triangulated on load.
//!
//! # Usage
//!
//! The easiest way to load and save meshes is using the automatic format
//! detection:
//!
//! ```no_run
//! use camber::io::{load, save};
//!
//! // Load with automatic format detection
//! let mesh = load("model.obj").unwrap();
//!
//! // Save with automatic format detection
//! save(&mesh, "output.ply").unwrap();
//! ```
//!
//! You can also use format-specific functions:
//!
//! ```no_run
//! use camber::io::obj;
//!
//! let mesh = obj::load("model.obj").unwrap();
//! obj::save(&mesh, "output.obj").unwrap();
//! ```

pub mod obj;
pub mod off;
pub mod ply;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::SurfaceMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
    /// Object File Format.
    Off,
    /// PLY (Stanford polygon) format.
    Ply,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            "off" => Some(Format::Off),
            "ply" => Some(Format::Ply),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

fn unsupported(path: &Path) -> MeshError {
    MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    }
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension.
///
/// # Example
///
/// ```no_run
/// use camber::io::load;
///
/// let mesh = load("model.obj").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<SurfaceMesh> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| unsupported(path))?;

    match format {
        Format::Obj => obj::load(path),
        Format::Off => off::load(path),
        Format::Ply => ply::load(path),
    }
}

/// Save a mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
///
/// # Example
///
/// ```no_run
/// use camber::io::{load, save};
///
/// let mesh = load("model.obj").unwrap();
/// save(&mesh, "output.off").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &SurfaceMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| unsupported(path))?;

    match format {
        Format::Obj => obj::save(mesh, path),
        Format::Off => off::save(mesh, path),
        Format::Ply => ply::save(mesh, path),
    }
}
