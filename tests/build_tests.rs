mod support;

use nalgebra::Point3;
use wingedge::{MeshRecords, MeshWarning, WingedMesh};

use crate::support::{cube_mesh, quad_mesh, stolen_edge_mesh, two_triangles};

#[test]
fn quad_counts() {
    let mesh = quad_mesh();
    assert_eq!(mesh.num_vertices(), 4);
    assert_eq!(mesh.num_edges(), 4);
    assert_eq!(mesh.num_faces(), 1);
    assert!(mesh.warnings().is_empty());
}

#[test]
fn shared_edge_is_not_duplicated() {
    let mesh = two_triangles();
    assert_eq!(mesh.num_edges(), 5);
    let shared = mesh.edge_between(1, 3).unwrap();
    assert_eq!(shared.left_face, Some(1));
    assert_eq!(shared.right_face, Some(2));
}

#[test]
fn edge_keys_are_canonical_and_unique() {
    let mesh = cube_mesh();
    assert_eq!(mesh.num_edges(), 12);
    let mut keys: Vec<_> = mesh.edges.iter().map(|e| e.key()).collect();
    for &(a, b) in &keys {
        assert!(a < b);
    }
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 12);
}

#[test]
fn cube_is_manifold() {
    let mesh = cube_mesh();
    assert!(mesh.warnings().is_empty());
    for edge in &mesh.edges {
        assert!(edge.left_face.is_some());
        assert!(edge.right_face.is_some());
    }
}

#[test]
fn first_claim_keeps_the_edge_side() {
    let mesh = stolen_edge_mesh();
    assert_eq!(mesh.num_faces(), 3);
    let contested = mesh.edge_between(1, 2).unwrap();
    assert_eq!(contested.left_face, Some(1));
    assert_eq!(contested.right_face, Some(2));
    assert_eq!(mesh.warnings().len(), 1);
    assert_eq!(
        mesh.warnings()[0],
        MeshWarning::NonManifoldEdge {
            edge: (1, 2),
            face: 3
        }
    );
}

#[test]
fn short_face_records_are_skipped() {
    let records = MeshRecords {
        vertices: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ],
        faces: vec![vec![1, 2], vec![1, 2, 3]],
    };
    let mesh = WingedMesh::from_records(records);
    assert_eq!(mesh.num_faces(), 1);
    assert_eq!(mesh.warnings().len(), 1);
    assert_eq!(
        mesh.warnings()[0],
        MeshWarning::TooFewVertices { record: 1, count: 2 }
    );
}

#[test]
fn repeated_references_do_not_count_as_distinct() {
    let records = MeshRecords {
        vertices: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ],
        faces: vec![vec![1, 1, 2]],
    };
    let mesh = WingedMesh::from_records(records);
    assert_eq!(mesh.num_faces(), 0);
    assert_eq!(mesh.num_edges(), 0);
    assert_eq!(
        mesh.warnings()[0],
        MeshWarning::TooFewVertices { record: 1, count: 2 }
    );
}

#[test]
fn unknown_vertex_skips_face_but_not_later_ids() {
    let records = MeshRecords {
        vertices: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ],
        faces: vec![vec![1, 2, 9], vec![1, 2, 3]],
    };
    let mesh = WingedMesh::from_records(records);
    // The bad record is dropped; the next accepted face still gets id 1.
    assert_eq!(mesh.num_faces(), 1);
    assert_eq!(mesh.face(1).unwrap().id, 1);
    assert_eq!(
        mesh.warnings()[0],
        MeshWarning::UnknownVertexRef { record: 1, vertex: 9 }
    );
}

#[test]
fn zero_is_never_a_valid_reference() {
    let records = MeshRecords {
        vertices: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ],
        faces: vec![vec![0, 1, 2]],
    };
    let mesh = WingedMesh::from_records(records);
    assert_eq!(mesh.num_faces(), 0);
    assert_eq!(
        mesh.warnings()[0],
        MeshWarning::UnknownVertexRef { record: 1, vertex: 0 }
    );
}

#[test]
fn faces_may_precede_their_vertices_in_the_source() {
    let mesh = WingedMesh::from_obj_text("f 1 2 3\nv 0 0 0\nv 1 0 0\nv 1 1 0\n");
    assert!(mesh.warnings().is_empty());
    assert_eq!(mesh.num_vertices(), 3);
    assert_eq!(mesh.num_faces(), 1);
    assert_eq!(mesh.edges_of_face(1).unwrap(), vec![(1, 2), (2, 3), (1, 3)]);
}

#[test]
fn entry_edge_is_the_first_boundary_edge() {
    let mesh = quad_mesh();
    let entry = mesh.face(1).unwrap().edge;
    assert_eq!(mesh.edges[entry].key(), (1, 2));
}

#[test]
fn vertices_remember_their_first_incident_edge() {
    let mesh = two_triangles();
    // Edge arena order: (1,2) (2,3) (3,1) (3,4) (4,1).
    assert_eq!(mesh.vertex(1).unwrap().edge, Some(0));
    assert_eq!(mesh.vertex(2).unwrap().edge, Some(0));
    assert_eq!(mesh.vertex(3).unwrap().edge, Some(1));
    assert_eq!(mesh.vertex(4).unwrap().edge, Some(3));
}

#[test]
fn unreferenced_vertices_have_no_incident_edge() {
    let mesh = WingedMesh::from_obj_text("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 5 5 5\nf 1 2 3\n");
    assert_eq!(mesh.vertex(4).unwrap().edge, None);
}
