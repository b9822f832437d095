//! Adjacency queries. All of them are read-only; unknown ids come back as
//! a [`QueryError`] rather than a panic or a mutation.

use crate::errors::QueryError;
use crate::mesh::WingedMesh;
use crate::mesh::edge::EdgeKey;

impl WingedMesh {
    /// Ids of every face whose boundary passes through vertex
    /// `vertex_id`, in face id order.
    ///
    /// Derived by walking each face's boundary, so a face whose walk no
    /// longer reaches the vertex (after non-manifold degradation) is not
    /// reported.
    pub fn faces_sharing_vertex(&self, vertex_id: usize) -> Result<Vec<usize>, QueryError> {
        if self.vertex(vertex_id).is_none() {
            return Err(QueryError::VertexNotFound(vertex_id));
        }
        let mut found = Vec::new();
        for face in &self.faces {
            if self.face_vertices(face.id)?.contains(&vertex_id) {
                found.push(face.id);
            }
        }
        Ok(found)
    }

    /// Canonical keys of every edge incident to vertex `vertex_id`, in
    /// edge creation order.
    pub fn edges_sharing_vertex(&self, vertex_id: usize) -> Result<Vec<EdgeKey>, QueryError> {
        if self.vertex(vertex_id).is_none() {
            return Err(QueryError::VertexNotFound(vertex_id));
        }
        Ok(self
            .edges
            .iter()
            .filter(|edge| edge.touches(vertex_id))
            .map(|edge| edge.key())
            .collect())
    }

    /// The faces on either side of the edge joining `v1` and `v2`, left
    /// side first: zero, one, or two ids.
    pub fn faces_sharing_edge(&self, v1: usize, v2: usize) -> Result<Vec<usize>, QueryError> {
        if v1 == v2 {
            return Err(QueryError::DegenerateEdge(v1));
        }
        let edge = self
            .edge_between(v1, v2)
            .ok_or(QueryError::EdgeNotFound(v1, v2))?;
        Ok(edge.left_face.into_iter().chain(edge.right_face).collect())
    }

    /// Canonical keys of the boundary edges of face `face_id`, in walk
    /// order from its entry edge.
    pub fn edges_of_face(&self, face_id: usize) -> Result<Vec<EdgeKey>, QueryError> {
        let walk = self.face_boundary(face_id)?;
        Ok(walk.edges.iter().map(|&i| self.edges[i].key()).collect())
    }

    /// Distinct ids of the faces sharing a boundary edge with face
    /// `face_id`, ascending. Unshared boundary edges contribute nothing,
    /// and the face never lists itself.
    pub fn faces_adjacent_to_face(&self, face_id: usize) -> Result<Vec<usize>, QueryError> {
        let walk = self.face_boundary(face_id)?;
        let mut adjacent: Vec<usize> = walk
            .edges
            .iter()
            .filter_map(|&i| {
                let edge = &self.edges[i];
                edge.side_of(face_id).and_then(|side| edge.face_across(side))
            })
            .filter(|&id| id != face_id)
            .collect();
        adjacent.sort_unstable();
        adjacent.dedup();
        Ok(adjacent)
    }
}
