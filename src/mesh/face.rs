//! Face records.

/// A polygonal face, represented by its 1-based id and one entry edge on
/// its boundary. The entry edge is the first boundary edge identified when
/// the face was built; the full boundary is recovered by following the
/// winged links from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub id: usize,
    pub edge: usize,
}

impl Face {
    pub const fn new(id: usize, edge: usize) -> Self {
        Face { id, edge }
    }
}
