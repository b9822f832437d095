//! Warnings and query errors

use crate::mesh::edge::EdgeKey;
use std::fmt::Display;

/// Non-fatal degradations recorded while building, transforming, or
/// exporting a mesh. The operation that produced them always completes
/// with a best-effort result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshWarning {
    /// (MalformedRecord) A vertex/face line could not be parsed; the line is skipped
    MalformedRecord { line: usize, reason: String },
    /// (TooFewVertices) A face record names fewer than 3 distinct vertices; the face is skipped
    TooFewVertices { record: usize, count: usize },
    /// (UnknownVertexRef) A face record references a vertex id that does not exist; the face is skipped
    UnknownVertexRef { record: usize, vertex: usize },
    /// (NonManifoldEdge) An edge side was already claimed by an earlier face; the first claim is kept
    NonManifoldEdge { edge: EdgeKey, face: usize },
    /// (DegenerateTransform) The transform maps a vertex to w = 0; that vertex keeps its position
    DegenerateTransform { vertex: usize },
    /// (EmptyFaceBoundary) A face's derived boundary is empty; the face is skipped on export
    EmptyFaceBoundary { face: usize },
}

impl Display for MeshWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshWarning::MalformedRecord { line, reason } => {
                write!(f, "(MalformedRecord) line {} skipped: {}", line, reason)
            },
            MeshWarning::TooFewVertices { record, count } => write!(
                f,
                "(TooFewVertices) face record {} names {} distinct vertices, need at least 3",
                record, count
            ),
            MeshWarning::UnknownVertexRef { record, vertex } => write!(
                f,
                "(UnknownVertexRef) face record {} references unknown vertex {}",
                record, vertex
            ),
            MeshWarning::NonManifoldEdge { edge, face } => write!(
                f,
                "(NonManifoldEdge) edge ({}, {}) side already claimed, face {} not attached",
                edge.0, edge.1, face
            ),
            MeshWarning::DegenerateTransform { vertex } => write!(
                f,
                "(DegenerateTransform) transform sends vertex {} to w = 0, position unchanged",
                vertex
            ),
            MeshWarning::EmptyFaceBoundary { face } => write!(
                f,
                "(EmptyFaceBoundary) face {} has no traversable boundary, skipped",
                face
            ),
        }
    }
}

/// Lookup misses reported by the query layer. Queries never mutate the
/// store and never panic on unknown ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// (VertexNotFound) The queried vertex id is not in the mesh
    VertexNotFound(usize),
    /// (EdgeNotFound) No edge with the canonicalized endpoint pair exists
    EdgeNotFound(usize, usize),
    /// (FaceNotFound) The queried face id is not in the mesh
    FaceNotFound(usize),
    /// (DegenerateEdge) Both endpoints of an edge query are the same vertex
    DegenerateEdge(usize),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::VertexNotFound(id) => {
                write!(f, "(VertexNotFound) vertex {} is not in the mesh", id)
            },
            QueryError::EdgeNotFound(a, b) => {
                write!(f, "(EdgeNotFound) no edge ({}, {}) in the mesh", a, b)
            },
            QueryError::FaceNotFound(id) => {
                write!(f, "(FaceNotFound) face {} is not in the mesh", id)
            },
            QueryError::DegenerateEdge(id) => write!(
                f,
                "(DegenerateEdge) edge endpoints must differ, got vertex {} twice",
                id
            ),
        }
    }
}
