//! Winged-edge mesh structure and its build, traversal, query, and
//! transform operations.

use crate::errors::MeshWarning;
use crate::float_types::Real;
use hashbrown::HashMap;
use nalgebra::Point3;

pub mod build;
pub mod edge;
pub mod face;
pub mod query;
pub mod transform;
pub mod traversal;
pub mod vertex;

pub use edge::{Edge, EdgeKey, EdgeSide, edge_key};
pub use face::Face;
pub use traversal::BoundaryWalk;
pub use vertex::Vertex;

/// Raw mesh input: vertex positions and face vertex-reference lists, in
/// file order. Vertex ids are implied by position (first record is vertex
/// 1), and face records reference those 1-based ids.
///
/// Retained by [`WingedMesh`] so the connectivity can be rebuilt from
/// scratch after destructive edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshRecords {
    pub vertices: Vec<Point3<Real>>,
    pub faces: Vec<Vec<usize>>,
}

/// A polygonal mesh in winged-edge form.
///
/// Vertices, edges, and faces live in arenas; vertices and faces carry
/// 1-based ids equal to arena index + 1, edges are addressed by arena
/// index internally and by canonical [`EdgeKey`] externally. Construction
/// never fails: malformed faces are skipped and non-manifold edge claims
/// rejected, each leaving a [`MeshWarning`] behind.
#[derive(Debug, Clone)]
pub struct WingedMesh {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
    /// Canonical key → edge arena index.
    pub(crate) edge_index: HashMap<EdgeKey, usize>,
    /// Pristine input records, kept for [`WingedMesh::reset`].
    pub(crate) source: MeshRecords,
    pub(crate) warnings: Vec<MeshWarning>,
}

impl WingedMesh {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Look up a vertex by 1-based id.
    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        id.checked_sub(1).and_then(|i| self.vertices.get(i))
    }

    /// Look up a face by 1-based id.
    pub fn face(&self, id: usize) -> Option<&Face> {
        id.checked_sub(1).and_then(|i| self.faces.get(i))
    }

    /// Look up an edge by its endpoint vertex ids, in either order.
    pub fn edge_between(&self, v1: usize, v2: usize) -> Option<&Edge> {
        self.edge_index
            .get(&edge_key(v1, v2))
            .map(|&i| &self.edges[i])
    }

    /// Warnings accumulated by construction and later edits, in the order
    /// they were produced.
    pub fn warnings(&self) -> &[MeshWarning] {
        &self.warnings
    }

    /// Discard all edits and rebuild connectivity from the original input
    /// records.
    pub fn reset(&mut self) {
        *self = Self::from_records(self.source.clone());
    }

    pub(crate) fn push_warning(&mut self, warning: MeshWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}
