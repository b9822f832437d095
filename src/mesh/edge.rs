//! Winged edges: fixed orientation, per-side face ownership, and the four
//! boundary links.

/// Unordered endpoint pair identifying an edge, always stored as
/// (min, max).
pub type EdgeKey = (usize, usize);

/// Canonicalize an endpoint pair into an [`EdgeKey`].
#[inline]
pub const fn edge_key(v1: usize, v2: usize) -> EdgeKey {
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Which side of an edge a face occupies, relative to the edge's stored
/// (start, end) orientation. A face traversing the edge start→end sits on
/// the left; one traversing end→start sits on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    Left,
    Right,
}

/// A winged edge.
///
/// `start`/`end` fix the edge's orientation at creation time (the traversal
/// direction of the first face that referenced it) and never change. Face
/// references are 1-based face ids; the four link fields are indices into
/// the mesh's edge arena. Each side holds at most one face, claimed once
/// and never reassigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
    pub left_face: Option<usize>,
    pub right_face: Option<usize>,
    pub next_left: Option<usize>,
    pub prev_left: Option<usize>,
    pub next_right: Option<usize>,
    pub prev_right: Option<usize>,
}

impl Edge {
    /// Create a new unattached [`Edge`] oriented `start`→`end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Edge {
            start,
            end,
            left_face: None,
            right_face: None,
            next_left: None,
            prev_left: None,
            next_right: None,
            prev_right: None,
        }
    }

    /// Canonical key of this edge.
    pub const fn key(&self) -> EdgeKey {
        edge_key(self.start, self.end)
    }

    /// True if either endpoint is `vertex`.
    pub const fn touches(&self, vertex: usize) -> bool {
        self.start == vertex || self.end == vertex
    }

    /// The side `face` occupies on this edge, if it occupies one.
    pub fn side_of(&self, face: usize) -> Option<EdgeSide> {
        if self.left_face == Some(face) {
            Some(EdgeSide::Left)
        } else if self.right_face == Some(face) {
            Some(EdgeSide::Right)
        } else {
            None
        }
    }

    /// The face attached to the side opposite `side`, if any.
    pub const fn face_across(&self, side: EdgeSide) -> Option<usize> {
        match side {
            EdgeSide::Left => self.right_face,
            EdgeSide::Right => self.left_face,
        }
    }

    /// The next boundary edge on the given side.
    pub const fn next_on(&self, side: EdgeSide) -> Option<usize> {
        match side {
            EdgeSide::Left => self.next_left,
            EdgeSide::Right => self.next_right,
        }
    }

    /// The previous boundary edge on the given side.
    pub const fn prev_on(&self, side: EdgeSide) -> Option<usize> {
        match side {
            EdgeSide::Left => self.prev_left,
            EdgeSide::Right => self.prev_right,
        }
    }

    /// Claim `side` for `face` if it is unclaimed or already held by
    /// `face`. Returns false when a different face holds the side; the
    /// existing owner is never displaced.
    pub fn claim(&mut self, side: EdgeSide, face: usize) -> bool {
        let slot = match side {
            EdgeSide::Left => &mut self.left_face,
            EdgeSide::Right => &mut self.right_face,
        };
        match *slot {
            None => {
                *slot = Some(face);
                true
            },
            Some(owner) => owner == face,
        }
    }

    pub fn set_next_on(&mut self, side: EdgeSide, edge: usize) {
        match side {
            EdgeSide::Left => self.next_left = Some(edge),
            EdgeSide::Right => self.next_right = Some(edge),
        }
    }

    pub fn set_prev_on(&mut self, side: EdgeSide, edge: usize) {
        match side {
            EdgeSide::Left => self.prev_left = Some(edge),
            EdgeSide::Right => self.prev_right = Some(edge),
        }
    }
}
