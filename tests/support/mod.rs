//! Test support library
//! Shared fixtures and helpers for the integration tests.

use wingedge::WingedMesh;
use wingedge::float_types::Real;

/// A single quad face on four corner vertices.
pub fn quad_mesh() -> WingedMesh {
    WingedMesh::from_obj_text("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n")
}

/// A quad split along its diagonal: two triangles sharing edge (1, 3),
/// each traversing it in its own direction.
pub fn two_triangles() -> WingedMesh {
    WingedMesh::from_obj_text("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n")
}

/// A closed unit cube: 8 vertices, 12 edges, 6 quad faces, all edges
/// manifold with consistent outward winding.
pub fn cube_mesh() -> WingedMesh {
    WingedMesh::from_obj_text(concat!(
        "v 0 0 0\n",
        "v 1 0 0\n",
        "v 1 1 0\n",
        "v 0 1 0\n",
        "v 0 0 1\n",
        "v 1 0 1\n",
        "v 1 1 1\n",
        "v 0 1 1\n",
        "f 1 4 3 2\n",
        "f 5 6 7 8\n",
        "f 1 2 6 5\n",
        "f 2 3 7 6\n",
        "f 3 4 8 7\n",
        "f 4 1 5 8\n",
    ))
}

/// Three faces fighting over edge (1, 2): the third face re-traverses it
/// in the same direction as the first, so its left-side claim is
/// rejected and its entry edge belongs to someone else.
pub fn stolen_edge_mesh() -> WingedMesh {
    WingedMesh::from_obj_text(concat!(
        "v 0 0 0\n",
        "v 1 0 0\n",
        "v 1 1 0\n",
        "v 0 1 0\n",
        "v 2 0 0\n",
        "f 1 2 3\n",
        "f 2 1 4\n",
        "f 1 2 5\n",
    ))
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
