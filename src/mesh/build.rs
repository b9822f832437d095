//! Two-pass mesh construction from raw records.

use crate::errors::MeshWarning;
use crate::mesh::edge::{Edge, EdgeSide, edge_key};
use crate::mesh::face::Face;
use crate::mesh::vertex::Vertex;
use crate::mesh::{MeshRecords, WingedMesh};
use hashbrown::HashMap;

impl WingedMesh {
    /// Build a winged-edge mesh from raw records.
    ///
    /// All vertices are registered before any face is processed, so face
    /// records may reference vertices that appear later in the input.
    /// Malformed face records (fewer than three distinct vertices, or a
    /// reference to an unknown vertex id) are skipped with a warning; face
    /// ids are assigned sequentially to the accepted faces only.
    /// Construction itself never fails.
    pub fn from_records(records: MeshRecords) -> Self {
        let mut mesh = WingedMesh {
            vertices: Vec::with_capacity(records.vertices.len()),
            edges: Vec::new(),
            faces: Vec::with_capacity(records.faces.len()),
            edge_index: HashMap::new(),
            source: MeshRecords::default(),
            warnings: Vec::new(),
        };
        for (i, &position) in records.vertices.iter().enumerate() {
            mesh.vertices.push(Vertex::new(i + 1, position));
        }
        for (i, refs) in records.faces.iter().enumerate() {
            mesh.add_face(i + 1, refs);
        }
        mesh.source = records;
        mesh
    }

    /// Process one face record. `record` is the 1-based position of the
    /// record in the input, used in warnings; the face id is assigned only
    /// if the record is accepted.
    fn add_face(&mut self, record: usize, refs: &[usize]) {
        let mut distinct = refs.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < 3 {
            self.push_warning(MeshWarning::TooFewVertices {
                record,
                count: distinct.len(),
            });
            return;
        }
        if let Some(&vertex) = refs.iter().find(|&&r| r == 0 || r > self.vertices.len())
        {
            self.push_warning(MeshWarning::UnknownVertexRef { record, vertex });
            return;
        }

        let face_id = self.faces.len() + 1;
        let n = refs.len();

        // Identify every boundary edge (and the side this face occupies on
        // it) before writing any links; a face may reach an edge whose
        // links depend on a later pair in the same record.
        let mut boundary = Vec::with_capacity(n);
        for i in 0..n {
            let v1 = refs[i];
            let v2 = refs[(i + 1) % n];
            let index = self.edge_at(v1, v2);
            let side = if self.edges[index].start == v1 {
                EdgeSide::Left
            } else {
                EdgeSide::Right
            };
            let claimed = self.edges[index].claim(side, face_id);
            if !claimed {
                self.push_warning(MeshWarning::NonManifoldEdge {
                    edge: edge_key(v1, v2),
                    face: face_id,
                });
            }
            boundary.push((index, side));
        }

        // Link consecutive boundary edges, wrapping last back to first.
        // Each half of the link is written on the side this face occupies
        // on that particular edge; the two edges of a pair may sit on
        // different sides.
        for i in 0..n {
            let (prev, prev_side) = boundary[i];
            let (curr, curr_side) = boundary[(i + 1) % n];
            self.edges[prev].set_next_on(prev_side, curr);
            self.edges[curr].set_prev_on(curr_side, prev);
        }

        self.faces.push(Face::new(face_id, boundary[0].0));
    }

    /// Fetch the edge joining `v1` and `v2`, creating it oriented
    /// `v1`→`v2` if this vertex pair has not been seen before. Newly
    /// created edges become the incident edge of any endpoint that does
    /// not have one yet.
    fn edge_at(&mut self, v1: usize, v2: usize) -> usize {
        let key = edge_key(v1, v2);
        if let Some(&index) = self.edge_index.get(&key) {
            return index;
        }
        let index = self.edges.len();
        self.edges.push(Edge::new(v1, v2));
        self.edge_index.insert(key, index);
        for v in [v1, v2] {
            let vertex = &mut self.vertices[v - 1];
            if vertex.edge.is_none() {
                vertex.edge = Some(index);
            }
        }
        index
    }
}
