//! The triangle mesh container.

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};

/// A triangle mesh with cached derived geometry.
///
/// Stores vertex positions and face index triples, plus per-face and
/// per-vertex quantities (areas, normals) that are recomputed whenever the
/// positions change. Faces are validated against the vertex count at
/// construction, so every stored index is in range for the lifetime of the
/// mesh.
///
/// Degenerate faces (repeated indices, coincident positions) are accepted by
/// the container; algorithms that cannot handle them report
/// [`MeshError::DegenerateGeometry`] when asked to compute.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    pub(super) positions: Vec<Point3<f64>>,
    pub(super) triangles: Vec<[usize; 3]>,

    // Derived data, rebuilt by `recompute` whenever positions change.
    pub(super) face_areas: Vec<f64>,
    pub(super) face_normals: Vec<Vector3<f64>>,
    pub(super) vertex_areas: Vec<f64>,
    pub(super) vertex_normals: Vec<Vector3<f64>>,
}

impl SurfaceMesh {
    /// Build a mesh from vertex positions and face index triples.
    ///
    /// Derived geometry (face areas/normals, vertex barycentric areas/normals)
    /// is computed immediately.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] if `triangles` is empty, and
    /// [`MeshError::InvalidVertexIndex`] if any face references a vertex index
    /// outside `[0, positions.len())`.
    pub fn from_triangles(
        positions: Vec<Point3<f64>>,
        triangles: Vec<[usize; 3]>,
    ) -> Result<Self> {
        if triangles.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        for (face, tri) in triangles.iter().enumerate() {
            for &vertex in tri {
                if vertex >= positions.len() {
                    return Err(MeshError::InvalidVertexIndex { face, vertex });
                }
            }
        }

        let mut mesh = SurfaceMesh {
            positions,
            triangles,
            face_areas: Vec::new(),
            face_normals: Vec::new(),
            vertex_areas: Vec::new(),
            vertex_normals: Vec::new(),
        };
        mesh.recompute();
        Ok(mesh)
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangular faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.triangles.len()
    }

    /// All vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// All face index triples.
    #[inline]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// The three corner positions of face `f`, in face order.
    #[inline]
    pub fn face_positions(&self, f: usize) -> [Point3<f64>; 3] {
        let [a, b, c] = self.triangles[f];
        [self.positions[a], self.positions[b], self.positions[c]]
    }

    /// Per-face areas, indexed by face.
    #[inline]
    pub fn face_areas(&self) -> &[f64] {
        &self.face_areas
    }

    /// Per-face unit normals, indexed by face. Degenerate faces get the zero
    /// vector.
    #[inline]
    pub fn face_normals(&self) -> &[Vector3<f64>] {
        &self.face_normals
    }

    /// Per-vertex barycentric areas: one third of each incident face's area.
    #[inline]
    pub fn vertex_areas(&self) -> &[f64] {
        &self.vertex_areas
    }

    /// Per-vertex unit normals, area-weighted over incident faces. Isolated
    /// vertices get the zero vector.
    #[inline]
    pub fn vertex_normals(&self) -> &[Vector3<f64>] {
        &self.vertex_normals
    }

    /// Replace all vertex positions and rebuild the derived geometry.
    ///
    /// The face list is unchanged, so the new positions must cover the same
    /// vertex count.
    ///
    /// # Panics
    ///
    /// Panics if `positions.len()` differs from [`num_vertices`](Self::num_vertices).
    pub fn set_positions(&mut self, positions: Vec<Point3<f64>>) {
        assert_eq!(
            positions.len(),
            self.positions.len(),
            "position count must match the existing vertex count"
        );
        self.positions = positions;
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn unit_triangle() -> SurfaceMesh {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        SurfaceMesh::from_triangles(positions, vec![[0, 1, 2]]).unwrap()
    }

    #[test]
    fn test_construction_counts() {
        let mesh = unit_triangle();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);

        let [p0, p1, p2] = mesh.face_positions(0);
        assert_eq!(p0, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(p1, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(p2, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_face_list_rejected() {
        let positions = vec![Point3::new(0.0, 0.0, 0.0)];
        let err = SurfaceMesh::from_triangles(positions, vec![]).unwrap_err();
        assert!(matches!(err, MeshError::EmptyMesh));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let err = SurfaceMesh::from_triangles(positions, vec![[0, 1, 2]]).unwrap_err();
        match err {
            MeshError::InvalidVertexIndex { face, vertex } => {
                assert_eq!(face, 0);
                assert_eq!(vertex, 2);
            }
            other => panic!("expected InvalidVertexIndex, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_indices_accepted_by_container() {
        // The container stores what it is given; degenerate faces only fail
        // once an algorithm needs cotangent weights from them.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let mesh = SurfaceMesh::from_triangles(positions, vec![[0, 0, 1]]).unwrap();
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.face_areas()[0], 0.0);
    }

    #[test]
    fn test_set_positions_recomputes_areas() {
        let mut mesh = unit_triangle();
        assert!((mesh.face_areas()[0] - 0.5).abs() < 1e-12);

        let scaled: Vec<Point3<f64>> =
            mesh.positions().iter().map(|p| Point3::from(p.coords * 2.0)).collect();
        mesh.set_positions(scaled);

        // Doubling all coordinates quadruples every area.
        assert!((mesh.face_areas()[0] - 2.0).abs() < 1e-12);
        assert!((mesh.vertex_areas()[0] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "position count must match")]
    fn test_set_positions_wrong_length_panics() {
        let mut mesh = unit_triangle();
        mesh.set_positions(vec![Point3::new(0.0, 0.0, 0.0)]);
    }
}
