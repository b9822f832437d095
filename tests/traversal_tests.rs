mod support;

use crate::support::{cube_mesh, quad_mesh, stolen_edge_mesh};

#[test]
fn quad_boundary_closes_in_order() {
    let mesh = quad_mesh();
    let walk = mesh.face_boundary(1).unwrap();
    assert!(walk.complete);
    assert_eq!(walk.edges.len(), 4);
    assert_eq!(mesh.face_vertices(1).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn walks_are_deterministic() {
    let mesh = cube_mesh();
    for face in 1..=mesh.num_faces() {
        let first = mesh.face_boundary(face).unwrap();
        let second = mesh.face_boundary(face).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn cube_boundaries_close_with_record_length() {
    let mesh = cube_mesh();
    for face in 1..=mesh.num_faces() {
        let walk = mesh.face_boundary(face).unwrap();
        assert!(walk.complete, "face {face} boundary did not close");
        assert_eq!(walk.edges.len(), 4);
    }
}

#[test]
fn consecutive_boundary_edges_share_one_vertex() {
    let mesh = cube_mesh();
    for face in 1..=mesh.num_faces() {
        let keys = mesh.edges_of_face(face).unwrap();
        for i in 0..keys.len() {
            let (a1, a2) = keys[i];
            let (b1, b2) = keys[(i + 1) % keys.len()];
            let shared = [b1, b2]
                .iter()
                .filter(|&&v| v == a1 || v == a2)
                .count();
            assert_eq!(shared, 1, "face {face} edges {i} and {}", (i + 1) % keys.len());
        }
    }
}

#[test]
fn rejected_claim_leaves_entry_walk_empty() {
    let mesh = stolen_edge_mesh();
    // Face 3 lost edge (1,2) to face 1; that edge is also its entry.
    let walk = mesh.face_boundary(3).unwrap();
    assert!(!walk.complete);
    assert!(walk.edges.is_empty());
    assert_eq!(mesh.face_vertices(3).unwrap(), Vec::<usize>::new());
}

#[test]
fn degraded_owner_walk_stops_at_foreign_edge() {
    let mesh = stolen_edge_mesh();
    // Face 3's link pass rewrote the left-side chain of edge (1,2), so
    // face 1's walk leaves its own boundary after one step and stops.
    let walk = mesh.face_boundary(1).unwrap();
    assert!(!walk.complete);
    assert_eq!(mesh.edges_of_face(1).unwrap(), vec![(1, 2)]);
}

#[test]
fn untouched_face_still_closes_after_degradation() {
    let mesh = stolen_edge_mesh();
    let walk = mesh.face_boundary(2).unwrap();
    assert!(walk.complete);
    assert_eq!(mesh.face_vertices(2).unwrap(), vec![2, 1, 4]);
}

#[test]
fn walk_is_bounded_on_a_link_cycle_that_skips_start() {
    let mut mesh = quad_mesh();
    // Point the last edge back into the middle of the chain: the walk
    // can loop forever without ever seeing its start edge again.
    mesh.edges[3].next_left = Some(1);
    let walk = mesh.face_boundary(1).unwrap();
    assert!(!walk.complete);
    assert_eq!(walk.edges.len(), mesh.num_edges() + 1);
}

#[test]
fn walk_stops_at_missing_link() {
    let mut mesh = quad_mesh();
    mesh.edges[2].next_left = None;
    let walk = mesh.face_boundary(1).unwrap();
    assert!(!walk.complete);
    assert_eq!(walk.edges.len(), 3);
}

#[test]
fn corrupted_walks_are_still_restartable() {
    let mut mesh = quad_mesh();
    mesh.edges[3].next_left = Some(1);
    let first = mesh.face_boundary(1).unwrap();
    let second = mesh.face_boundary(1).unwrap();
    assert_eq!(first, second);
}
