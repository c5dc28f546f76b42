//! OFF (Object File Format) support.
//!
//! This module provides loading and saving of meshes in the OFF format used
//! by many geometry processing tools. The reader is tolerant of the common
//! header variants: the `OFF` keyword line may be absent entirely, the counts
//! may share the keyword line or follow on their own line, and blank lines
//! and `#` comments may appear anywhere.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::SurfaceMesh;

/// Load a mesh from an OFF file.
///
/// Faces are count-prefixed; polygons with more than three sides are
/// fan-triangulated. Trailing tokens on vertex or face lines (per-vertex or
/// per-face colors) are ignored.
///
/// # Example
///
/// ```no_run
/// use camber::io::off;
///
/// let mesh = off::load("model.off").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<SurfaceMesh> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    parse(&text, path)
}

fn load_err(path: &Path, message: String) -> MeshError {
    MeshError::LoadError {
        path: path.to_path_buf(),
        message,
    }
}

fn parse(text: &str, path: &Path) -> Result<SurfaceMesh> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| load_err(path, "file is empty".to_string()))?;
    let mut header_tokens: Vec<&str> = header.split_whitespace().collect();

    // The OFF keyword is optional. When present the counts either share its
    // line or sit on the next meaningful line; when absent the first
    // meaningful line is the counts line itself.
    let (counts_no, count_tokens) = if header_tokens.first().copied() == Some("OFF") {
        header_tokens.remove(0);
        if header_tokens.is_empty() {
            let (no, line) = lines
                .next()
                .ok_or_else(|| load_err(path, "missing element counts".to_string()))?;
            (no, line.split_whitespace().collect::<Vec<_>>())
        } else {
            (header_no, header_tokens)
        }
    } else {
        (header_no, header_tokens)
    };

    if count_tokens.len() < 2 {
        return Err(load_err(
            path,
            format!("line {counts_no}: expected vertex and face counts"),
        ));
    }
    let num_vertices: usize = count_tokens[0].parse().map_err(|_| {
        load_err(
            path,
            format!("line {counts_no}: invalid vertex count '{}'", count_tokens[0]),
        )
    })?;
    let num_faces: usize = count_tokens[1].parse().map_err(|_| {
        load_err(
            path,
            format!("line {counts_no}: invalid face count '{}'", count_tokens[1]),
        )
    })?;

    let mut positions: Vec<Point3<f64>> = Vec::with_capacity(num_vertices);
    for _ in 0..num_vertices {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| load_err(path, "unexpected end of file in vertex list".to_string()))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(load_err(
                path,
                format!("line {line_no}: vertex has fewer than 3 coordinates"),
            ));
        }
        let mut coords = [0.0f64; 3];
        for (coord, token) in coords.iter_mut().zip(&tokens) {
            *coord = token.parse().map_err(|_| {
                load_err(
                    path,
                    format!("line {line_no}: invalid vertex coordinate '{token}'"),
                )
            })?;
        }
        positions.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    let mut faces: Vec<[usize; 3]> = Vec::with_capacity(num_faces);
    for _ in 0..num_faces {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| load_err(path, "unexpected end of file in face list".to_string()))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let count: usize = tokens
            .first()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| load_err(path, format!("line {line_no}: invalid face count prefix")))?;
        if count < 3 || tokens.len() <= count {
            return Err(load_err(
                path,
                format!("line {line_no}: face lists {count} vertices"),
            ));
        }

        let mut indices = Vec::with_capacity(count);
        for token in &tokens[1..=count] {
            let index: usize = token.parse().map_err(|_| {
                load_err(path, format!("line {line_no}: invalid face index '{token}'"))
            })?;
            indices.push(index);
        }
        for i in 1..indices.len() - 1 {
            faces.push([indices[0], indices[i], indices[i + 1]]);
        }
    }

    if faces.is_empty() {
        return Err(load_err(path, "OFF file contains no faces".to_string()));
    }

    SurfaceMesh::from_triangles(positions, faces)
}

/// Save a mesh to an OFF file.
///
/// # Example
///
/// ```no_run
/// use camber::io::off;
///
/// let mesh = off::load("model.off").unwrap();
/// off::save(&mesh, "output.off").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &SurfaceMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "OFF")?;
    writeln!(writer, "{} {} 0", mesh.num_vertices(), mesh.num_faces())?;
    for p in mesh.positions() {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }
    for tri in mesh.triangles() {
        writeln!(writer, "3 {} {} {}", tri[0], tri[1], tri[2])?;
    }

    writer.flush()?;
    Ok(())
}
