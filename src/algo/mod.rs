//! Geometry processing algorithms.
//!
//! This module contains the analysis passes that operate on a
//! [`SurfaceMesh`](crate::mesh::SurfaceMesh):
//!
//! - **Curvature**: per-vertex mean-curvature vectors and magnitudes via the
//!   cotangent Laplace-Beltrami operator, with barycentric or mixed Voronoi
//!   area normalization
//! - **Flow**: explicit Euler integration of mean-curvature flow

pub mod curvature;
pub mod flow;
