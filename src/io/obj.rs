//! Wavefront OBJ format support.
//!
//! This module provides loading and saving of meshes in the OBJ format.
//! Only geometry is read: `v` and `f` directives. Texture coordinates,
//! normals, materials, and grouping directives are skipped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::SurfaceMesh;

/// Load a mesh from an OBJ file.
///
/// Faces may use any of the OBJ reference forms (`i`, `i/t`, `i//n`,
/// `i/t/n`); only the vertex index is kept. Indices are 1-based, and
/// negative indices count back from the most recently declared vertex.
/// Polygons with more than three sides are fan-triangulated.
///
/// # Example
///
/// ```no_run
/// use camber::io::obj;
///
/// let mesh = obj::load("model.obj").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<SurfaceMesh> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    parse(&text, path)
}

fn parse(text: &str, path: &Path) -> Result<SurfaceMesh> {
    let mut positions: Vec<Point3<f64>> = Vec::new();
    let mut faces: Vec<[usize; 3]> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut coords = [0.0f64; 3];
                for coord in &mut coords {
                    let token = tokens.next().ok_or_else(|| MeshError::LoadError {
                        path: path.to_path_buf(),
                        message: format!("line {line_no}: vertex has fewer than 3 coordinates"),
                    })?;
                    *coord = token.parse().map_err(|_| MeshError::LoadError {
                        path: path.to_path_buf(),
                        message: format!("line {line_no}: invalid vertex coordinate '{token}'"),
                    })?;
                }
                positions.push(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let mut indices = Vec::new();
                for token in tokens {
                    // "i", "i/t", "i//n", and "i/t/n" all start with the
                    // vertex index.
                    let vertex_ref = token.split('/').next().unwrap_or(token);
                    let raw: i64 = vertex_ref.parse().map_err(|_| MeshError::LoadError {
                        path: path.to_path_buf(),
                        message: format!("line {line_no}: invalid face index '{token}'"),
                    })?;
                    indices.push(resolve_index(raw, positions.len(), path, line_no)?);
                }

                if indices.len() < 3 {
                    return Err(MeshError::LoadError {
                        path: path.to_path_buf(),
                        message: format!("line {line_no}: face has fewer than 3 vertices"),
                    });
                }
                for i in 1..indices.len() - 1 {
                    faces.push([indices[0], indices[i], indices[i + 1]]);
                }
            }
            // Comments, normals, texture coordinates, materials, groups.
            _ => {}
        }
    }

    if faces.is_empty() {
        return Err(MeshError::LoadError {
            path: path.to_path_buf(),
            message: "OBJ file contains no faces".to_string(),
        });
    }

    SurfaceMesh::from_triangles(positions, faces)
}

/// Map a 1-based (or negative, relative) OBJ index onto the vertices
/// declared so far.
fn resolve_index(raw: i64, num_vertices: usize, path: &Path, line_no: usize) -> Result<usize> {
    let resolved = if raw > 0 {
        raw - 1
    } else {
        num_vertices as i64 + raw
    };

    if raw == 0 || resolved < 0 || resolved >= num_vertices as i64 {
        return Err(MeshError::LoadError {
            path: path.to_path_buf(),
            message: format!("line {line_no}: face index {raw} out of range"),
        });
    }
    Ok(resolved as usize)
}

/// Save a mesh to an OBJ file.
///
/// # Example
///
/// ```no_run
/// use camber::io::obj;
///
/// let mesh = obj::load("model.obj").unwrap();
/// obj::save(&mesh, "output.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &SurfaceMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Generated by camber")?;
    for p in mesh.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for tri in mesh.triangles() {
        writeln!(writer, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }

    writer.flush()?;
    Ok(())
}
