//! Explicit integration of mean-curvature flow.
//!
//! A flow step moves every vertex along its mean-curvature vector, scaled by
//! the vertex's barycentric area and a caller-chosen step factor. Iterating
//! steps drives the surface toward smaller area; convex closed meshes shrink
//! toward a point.

use nalgebra::Point3;

use crate::algo::curvature::{mean_curvature, VertexAreaMode};
use crate::error::Result;
use crate::mesh::SurfaceMesh;

/// Advance vertex positions by one explicit Euler step of mean-curvature
/// flow.
///
/// Each output position is
///
/// ```text
/// p' = p + K(v) · A(v) · step_factor
/// ```
///
/// where `K` is the mean-curvature vector field evaluated on `mesh` under
/// `mode`, and `A` is the barycentric vertex area. The step area is
/// barycentric in both modes; `mode` only selects how the curvature field
/// itself is normalized. Since the curvature vectors point inward on convex
/// surfaces, a positive step factor shrinks a convex mesh.
///
/// `positions` is the state being integrated and may differ from the mesh's
/// own positions; the curvature field and areas are always evaluated on
/// `mesh` as given. The returned vector is freshly allocated, and neither
/// input is mutated.
///
/// # Panics
///
/// Panics if `positions` does not hold exactly one entry per mesh vertex.
///
/// # Errors
///
/// Propagates [`MeshError::DegenerateGeometry`](crate::error::MeshError) from
/// the curvature evaluation.
pub fn flow_step(
    mesh: &SurfaceMesh,
    positions: &[Point3<f64>],
    step_factor: f64,
    mode: VertexAreaMode,
) -> Result<Vec<Point3<f64>>> {
    assert_eq!(
        positions.len(),
        mesh.num_vertices(),
        "position count must match the mesh vertex count"
    );

    let field = mean_curvature(mesh, mode)?;
    let areas = mesh.vertex_areas();

    Ok(positions
        .iter()
        .enumerate()
        .map(|(v, p)| p + field.vector(v) * areas[v] * step_factor)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    fn create_icosahedron() -> SurfaceMesh {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let scale = 1.0 / (1.0 + phi * phi).sqrt();

        let positions = vec![
            Point3::new(-1.0, phi, 0.0) * scale,
            Point3::new(1.0, phi, 0.0) * scale,
            Point3::new(-1.0, -phi, 0.0) * scale,
            Point3::new(1.0, -phi, 0.0) * scale,
            Point3::new(0.0, -1.0, phi) * scale,
            Point3::new(0.0, 1.0, phi) * scale,
            Point3::new(0.0, -1.0, -phi) * scale,
            Point3::new(0.0, 1.0, -phi) * scale,
            Point3::new(phi, 0.0, -1.0) * scale,
            Point3::new(phi, 0.0, 1.0) * scale,
            Point3::new(-phi, 0.0, -1.0) * scale,
            Point3::new(-phi, 0.0, 1.0) * scale,
        ];

        let faces = vec![
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        SurfaceMesh::from_triangles(positions, faces).unwrap()
    }

    #[test]
    fn test_zero_step_is_identity() {
        let mesh = create_icosahedron();
        let stepped =
            flow_step(&mesh, mesh.positions(), 0.0, VertexAreaMode::VoronoiMixed).unwrap();

        assert_eq!(stepped.len(), mesh.num_vertices());
        for (p, q) in mesh.positions().iter().zip(&stepped) {
            assert_eq!(p, q);
        }
    }

    #[test]
    fn test_positive_step_shrinks_convex_mesh() {
        let mesh = create_icosahedron();
        let stepped =
            flow_step(&mesh, mesh.positions(), 0.1, VertexAreaMode::VoronoiMixed).unwrap();

        for (p, q) in mesh.positions().iter().zip(&stepped) {
            assert!(q.coords.norm() < p.coords.norm());
            assert!(q.coords.norm() > 0.0);
        }
    }

    #[test]
    fn test_step_area_is_barycentric_in_both_modes() {
        // Icosahedron faces are equilateral, so both modes produce the same
        // curvature field; a diverging step would mean the step area itself
        // depended on the mode.
        let mesh = create_icosahedron();
        let bary =
            flow_step(&mesh, mesh.positions(), 0.05, VertexAreaMode::Barycentric).unwrap();
        let voronoi =
            flow_step(&mesh, mesh.positions(), 0.05, VertexAreaMode::VoronoiMixed).unwrap();

        for (p, q) in bary.iter().zip(&voronoi) {
            assert!((p - q).norm() < 1e-12);
        }
    }

    #[test]
    fn test_flow_integrates_the_provided_positions() {
        let mesh = create_icosahedron();
        let offset: Vec<Point3<f64>> = mesh
            .positions()
            .iter()
            .map(|p| p + nalgebra::Vector3::new(10.0, 0.0, 0.0))
            .collect();

        let field = mean_curvature(&mesh, VertexAreaMode::Barycentric).unwrap();
        let stepped = flow_step(&mesh, &offset, 0.25, VertexAreaMode::Barycentric).unwrap();

        for v in 0..mesh.num_vertices() {
            let expected = offset[v] + field.vector(v) * mesh.vertex_areas()[v] * 0.25;
            assert!((stepped[v] - expected).norm() < 1e-15);
        }
    }

    #[test]
    fn test_repeated_steps_shrink_surface_area() {
        let mut mesh = create_icosahedron();
        let mut previous_area = mesh.surface_area();

        for _ in 0..5 {
            let stepped =
                flow_step(&mesh, mesh.positions(), 0.05, VertexAreaMode::VoronoiMixed).unwrap();
            mesh.set_positions(stepped);

            let area = mesh.surface_area();
            assert!(area < previous_area);
            previous_area = area;
        }
    }

    #[test]
    #[should_panic(expected = "position count must match")]
    fn test_mismatched_positions_panic() {
        let mesh = create_icosahedron();
        let short = vec![Point3::origin(); 3];
        let _ = flow_step(&mesh, &short, 0.1, VertexAreaMode::Barycentric);
    }

    #[test]
    fn test_degenerate_mesh_error_propagates() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let mesh = SurfaceMesh::from_triangles(positions, vec![[0, 1, 2]]).unwrap();

        let err = flow_step(&mesh, mesh.positions(), 0.1, VertexAreaMode::Barycentric)
            .unwrap_err();
        assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
    }
}
