//! Core mesh data structures.
//!
//! This module provides the triangle mesh container used by every algorithm in
//! the crate.
//!
//! # Overview
//!
//! The primary type is [`SurfaceMesh`], a face-vertex ("soup") representation:
//! vertex positions plus index triples, with no connectivity structure beyond
//! the faces themselves. The curvature algorithms iterate over faces and
//! scatter into per-vertex accumulators, so this layout matches their access
//! pattern directly.
//!
//! Alongside the raw data, a [`SurfaceMesh`] owns cached derived geometry:
//! per-face areas and unit normals, per-vertex barycentric areas and
//! area-weighted unit normals. The cache is rebuilt on construction and
//! whenever positions are replaced, so borrowers always observe consistent
//! values.
//!
//! # Construction
//!
//! Meshes are typically constructed from file I/O or from face-vertex lists:
//!
//! ```
//! use camber::mesh::SurfaceMesh;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh = SurfaceMesh::from_triangles(positions, faces).unwrap();
//! assert_eq!(mesh.num_vertices(), 3);
//! assert_eq!(mesh.num_faces(), 1);
//! ```

mod geometry;
mod surface;

pub use surface::SurfaceMesh;
