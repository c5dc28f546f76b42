//! Derived geometry for surface meshes.
//!
//! Everything here is computed from the raw positions and face triples:
//! per-face areas and normals, per-vertex barycentric areas and normals, and
//! the aggregate queries the CLI reports (surface area, bounding box, mean
//! edge length).

use std::collections::HashSet;

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use super::SurfaceMesh;

impl SurfaceMesh {
    /// Rebuild all cached derived data from the current positions.
    ///
    /// Called on construction and from `set_positions`.
    pub(super) fn recompute(&mut self) {
        let positions = &self.positions;

        // Per-face quantities are independent of each other.
        let (face_normals, face_areas): (Vec<Vector3<f64>>, Vec<f64>) = self
            .triangles
            .par_iter()
            .map(|&[a, b, c]| {
                let e1 = positions[b] - positions[a];
                let e2 = positions[c] - positions[a];
                let cross = e1.cross(&e2);
                let normal = cross.try_normalize(0.0).unwrap_or_else(Vector3::zeros);
                (normal, 0.5 * cross.norm())
            })
            .unzip();
        self.face_normals = face_normals;
        self.face_areas = face_areas;

        // Per-vertex scatters touch shared accumulators, so they stay serial.
        let mut vertex_areas = vec![0.0; self.positions.len()];
        let mut vertex_normals = vec![Vector3::zeros(); self.positions.len()];
        for (f, tri) in self.triangles.iter().enumerate() {
            let weighted_normal = self.face_normals[f] * self.face_areas[f];
            for &v in tri {
                vertex_areas[v] += self.face_areas[f] / 3.0;
                vertex_normals[v] += weighted_normal;
            }
        }
        for normal in &mut vertex_normals {
            *normal = normal.try_normalize(0.0).unwrap_or_else(Vector3::zeros);
        }
        self.vertex_areas = vertex_areas;
        self.vertex_normals = vertex_normals;
    }

    /// Total surface area: the sum of all face areas.
    pub fn surface_area(&self) -> f64 {
        self.face_areas.iter().sum()
    }

    /// Axis-aligned bounding box as `(min, max)` corners, or `None` for a
    /// mesh with no vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.positions[1..] {
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        Some((min, max))
    }

    /// Mean length over the unique edges of the mesh.
    ///
    /// Each undirected edge counts once regardless of how many faces share it.
    /// Returns `0.0` if the mesh has no edges.
    pub fn mean_edge_length(&self) -> f64 {
        let mut edges: HashSet<(usize, usize)> = HashSet::new();
        for tri in &self.triangles {
            for i in 0..3 {
                let a = tri[i];
                let b = tri[(i + 1) % 3];
                edges.insert(if a < b { (a, b) } else { (b, a) });
            }
        }

        if edges.is_empty() {
            return 0.0;
        }
        let total: f64 = edges
            .iter()
            .map(|&(a, b)| (self.positions[b] - self.positions[a]).norm())
            .sum();
        total / edges.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> SurfaceMesh {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        SurfaceMesh::from_triangles(positions, faces).unwrap()
    }

    #[test]
    fn test_right_triangle_geometry() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mesh = SurfaceMesh::from_triangles(positions, vec![[0, 1, 2]]).unwrap();

        assert!((mesh.face_areas()[0] - 0.5).abs() < 1e-12);
        assert!((mesh.face_normals()[0] - Vector3::z()).norm() < 1e-12);
        assert!((mesh.surface_area() - 0.5).abs() < 1e-12);

        for &a in mesh.vertex_areas() {
            assert!((a - 0.5 / 3.0).abs() < 1e-12);
        }
        for n in mesh.vertex_normals() {
            assert!((n - Vector3::z()).norm() < 1e-12);
        }

        // Edge lengths 1, 1, sqrt(2).
        let expected = (2.0 + 2.0_f64.sqrt()) / 3.0;
        assert!((mesh.mean_edge_length() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_vertex_areas_sum_to_surface_area() {
        let mesh = tetrahedron();
        let vertex_total: f64 = mesh.vertex_areas().iter().sum();
        assert!((vertex_total - mesh.surface_area()).abs() < 1e-12);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = tetrahedron();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_shared_edges_counted_once() {
        // Two faces sharing the diagonal of a unit square: 5 unique edges,
        // not 6.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mesh =
            SurfaceMesh::from_triangles(positions, vec![[0, 1, 2], [0, 2, 3]]).unwrap();

        let expected = (4.0 + 2.0_f64.sqrt()) / 5.0;
        assert!((mesh.mean_edge_length() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_face_zero_normal() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let mesh = SurfaceMesh::from_triangles(positions, vec![[0, 1, 2]]).unwrap();

        assert_eq!(mesh.face_areas()[0], 0.0);
        assert_eq!(mesh.face_normals()[0], Vector3::zeros());
        assert_eq!(mesh.vertex_normals()[0], Vector3::zeros());
    }
}
