//! # Camber
//!
//! A discrete curvature toolkit for triangle meshes.
//!
//! Camber estimates per-vertex mean curvature with the cotangent-weighted
//! Laplace-Beltrami operator of Meyer et al., supporting both barycentric
//! and mixed Voronoi area normalization, and integrates explicit
//! mean-curvature flow on top of the estimate.
//!
//! ## Features
//!
//! - **Shared-vertex mesh**: a compact face-soup structure with cached face
//!   and vertex areas and normals
//! - **Curvature estimation**: mean-curvature vectors and magnitudes per
//!   vertex, with a choice of area normalization
//! - **Curvature flow**: explicit Euler steps that smooth and shrink a
//!   surface along its curvature field
//! - **Multiple file formats**: OBJ, OFF, PLY
//!
//! ## Quick Start
//!
//! ```no_run
//! use camber::prelude::*;
//!
//! // Load a mesh
//! let mesh = camber::io::load("model.obj").unwrap();
//!
//! // Estimate mean curvature with mixed Voronoi areas
//! let field = camber::algo::curvature::mean_curvature(&mesh, VertexAreaMode::VoronoiMixed).unwrap();
//! for v in 0..mesh.num_vertices() {
//!     println!("vertex {}: H = {}", v, field.magnitude(v));
//! }
//!
//! // Take one step of mean-curvature flow and save the result
//! let positions = camber::algo::flow::flow_step(
//!     &mesh,
//!     mesh.positions(),
//!     0.01,
//!     VertexAreaMode::VoronoiMixed,
//! )
//! .unwrap();
//! let mut smoothed = mesh;
//! smoothed.set_positions(positions);
//! camber::io::save(&smoothed, "smoothed.ply").unwrap();
//! ```
//!
//! ## Building Meshes Programmatically
//!
//! ```
//! use camber::prelude::*;
//! use nalgebra::Point3;
//!
//! // Define vertices and faces
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//!
//! let faces = vec![
//!     [0, 2, 1], // bottom
//!     [0, 1, 3], // front
//!     [1, 2, 3], // right
//!     [2, 0, 3], // left
//! ];
//!
//! // Build the mesh
//! let mesh = SurfaceMesh::from_triangles(positions, faces).unwrap();
//! assert_eq!(mesh.num_vertices(), 4);
//! assert_eq!(mesh.num_faces(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use camber::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::curvature::{mean_curvature, CurvatureField, VertexAreaMode};
    pub use crate::algo::flow::flow_step;
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::SurfaceMesh;
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;

    #[test]
    fn test_tetrahedron_curvature_end_to_end() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];

        let faces = vec![
            [0, 2, 1], // bottom
            [0, 1, 3], // front
            [1, 2, 3], // right
            [2, 0, 3], // left
        ];

        let mesh = SurfaceMesh::from_triangles(positions, faces).unwrap();
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 4);

        // A tetrahedron is convex and closed: every vertex carries positive
        // curvature in both normalization modes.
        for mode in [VertexAreaMode::Barycentric, VertexAreaMode::VoronoiMixed] {
            let field = mean_curvature(&mesh, mode).unwrap();
            assert_eq!(field.len(), 4);
            for v in 0..4 {
                assert!(field.magnitude(v) > 0.0);
            }
        }

        // And a flow step is well-defined on it.
        let stepped = flow_step(&mesh, mesh.positions(), 0.01, VertexAreaMode::Barycentric);
        assert!(stepped.is_ok());
    }
}
