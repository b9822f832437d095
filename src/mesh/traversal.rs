//! Cycle-bounded walks around face boundaries.

use crate::errors::QueryError;
use crate::mesh::WingedMesh;
use crate::mesh::edge::EdgeSide;

/// The outcome of walking a face's boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryWalk {
    /// Edge arena indices in boundary order, starting at the walk's start
    /// edge.
    pub edges: Vec<usize>,
    /// False when the walk stopped before closing the cycle: a missing
    /// next link, an edge this face does not own, or the step bound.
    pub complete: bool,
}

impl WingedMesh {
    /// Walk the boundary of face `face_id` from its entry edge.
    pub fn face_boundary(&self, face_id: usize) -> Result<BoundaryWalk, QueryError> {
        let face = self.face(face_id).ok_or(QueryError::FaceNotFound(face_id))?;
        Ok(self.walk_boundary_from(face_id, face.edge))
    }

    /// Follow next links from `start`, on whichever side `face_id`
    /// occupies of each edge reached, until the walk returns to `start`.
    ///
    /// The walk is bounded to one step more than the mesh's edge count, so
    /// corrupted or non-manifold link chains terminate with a partial
    /// result instead of spinning. Read-only: repeated walks from the same
    /// start are identical.
    pub(crate) fn walk_boundary_from(&self, face_id: usize, start: usize) -> BoundaryWalk {
        let mut edges = Vec::new();
        let mut current = start;
        for _ in 0..self.edges.len() + 1 {
            let Some(side) = self.edges[current].side_of(face_id) else {
                // An edge this face never claimed, or lost to an earlier
                // claimant. Stop before including it.
                return BoundaryWalk {
                    edges,
                    complete: false,
                };
            };
            edges.push(current);
            match self.edges[current].next_on(side) {
                Some(next) if next == start => {
                    return BoundaryWalk {
                        edges,
                        complete: true,
                    };
                },
                Some(next) => current = next,
                None => {
                    return BoundaryWalk {
                        edges,
                        complete: false,
                    };
                },
            }
        }
        BoundaryWalk {
            edges,
            complete: false,
        }
    }

    /// The vertex ids around face `face_id` in boundary order: for each
    /// boundary edge, the endpoint the face leaves it from.
    pub fn face_vertices(&self, face_id: usize) -> Result<Vec<usize>, QueryError> {
        let walk = self.face_boundary(face_id)?;
        Ok(walk
            .edges
            .iter()
            .map(|&i| {
                let edge = &self.edges[i];
                match edge.side_of(face_id) {
                    Some(EdgeSide::Right) => edge.end,
                    _ => edge.start,
                }
            })
            .collect())
    }
}
