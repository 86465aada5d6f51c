#![cfg(test)]

use crate::error::{Degeneracy, ScatterError};
use crate::mesh::face::Face;
use crate::mesh::TextMesh;
use glam::Vec3;

fn quad() -> (Vec<Vec3>, Vec<u32>) {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(40.0, 0.0, 0.0),
        Vec3::new(40.0, 20.0, 0.0),
        Vec3::new(0.0, 20.0, 0.0),
    ];
    (positions, vec![0, 1, 2, 0, 2, 3])
}

#[test]
fn test_centroid_is_vertex_mean() {
    let face = Face::new(
        0,
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 6.0, 3.0),
        ],
    );
    assert_eq!(face.centroid(), Vec3::new(1.0, 2.0, 1.0));
}

#[test]
fn test_separation_duplicates_shared_vertices() {
    let (positions, indices) = quad();
    let mesh = TextMesh::from_triangles(&positions, &indices).unwrap();
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.vertex_count(), 6, "Shared corners should be duplicated");
    assert_eq!(mesh.faces()[1].index, 1);
    assert_eq!(mesh.faces()[1].vertices[0], positions[0]);
}

#[test]
fn test_separation_rejects_partial_triangle() {
    let (positions, _) = quad();
    let result = TextMesh::from_triangles(&positions, &[0, 1]);
    assert!(matches!(result, Err(ScatterError::InvalidMesh(_))));
}

#[test]
fn test_separation_rejects_out_of_range_index() {
    let (positions, _) = quad();
    let result = TextMesh::from_triangles(&positions, &[0, 1, 9]);
    assert!(matches!(result, Err(ScatterError::InvalidMesh(_))));
}

#[test]
fn test_size_from_bounding_box() {
    let (positions, indices) = quad();
    let mesh = TextMesh::from_triangles(&positions, &indices).unwrap();
    let size = mesh.size();
    assert_eq!(size.width, 40.0);
    assert_eq!(size.height, 20.0);
    assert_eq!(size.depth, 0.0);
}

#[test]
fn test_anchor_centers_title() {
    let (positions, indices) = quad();
    let mesh = TextMesh::from_triangles(&positions, &indices)
        .unwrap()
        .anchored(Vec3::new(0.5, 0.5, 0.0));
    let bounds = mesh.bounds();
    assert_eq!(bounds.min, Vec3::new(-20.0, -10.0, 0.0));
    assert_eq!(bounds.max, Vec3::new(20.0, 10.0, 0.0));
    assert_eq!(mesh.size(), TextMesh::from_triangles(&positions, &indices).unwrap().size());
}

#[test]
fn test_flat_line_is_degenerate_but_checked() {
    let mesh = TextMesh::from_faces([[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
    ]]);
    assert_eq!(mesh.degeneracies(), vec![Degeneracy::ZeroHeight]);
    assert!(matches!(
        mesh.check(),
        Err(ScatterError::DegenerateGeometry(Degeneracy::ZeroHeight))
    ));
}

#[test]
fn test_empty_mesh() {
    let mesh = TextMesh::from_faces(Vec::<[Vec3; 3]>::new());
    assert_eq!(
        mesh.degeneracies(),
        vec![Degeneracy::NoFaces, Degeneracy::ZeroWidth, Degeneracy::ZeroHeight]
    );
    assert_eq!(mesh.rest_positions().count(), 0);
}
