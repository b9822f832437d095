//! Struct and functions for working with the `Vertex` records of a winged-edge mesh.

use crate::float_types::Real;
use nalgebra::Point3;

/// A mesh vertex: stable 1-based id, position, and an optional reference to
/// one incident edge (an index into the mesh's edge arena).
///
/// Ids are assigned in record encounter order at build time and never
/// change; only the position mutates, and only through transform
/// application.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: usize,
    pub position: Point3<Real>,
    /// One incident edge, filled in when the first edge touching this
    /// vertex is created. Stays `None` for vertices no accepted face uses.
    pub edge: Option<usize>,
}

impl Vertex {
    /// Create a new [`Vertex`] with no incident edge yet.
    pub const fn new(id: usize, position: Point3<Real>) -> Self {
        Vertex {
            id,
            position,
            edge: None,
        }
    }
}
