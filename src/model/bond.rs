use glam::Vec3;

/// A covalent bond between two atoms, addressed by their index in the
/// frame's atom slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// First atom; the bond's depth key is weighted toward this end.
    pub a: usize,
    /// Second atom.
    pub b: usize,
}

impl Bond {
    /// Create a bond between atoms `a` and `b`.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Order-independent identity of the bond, used to reject duplicates.
    #[must_use]
    pub fn key(self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }
}

/// A free-standing line in model space (measurements, cell edges, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    /// Start point in angstroms.
    pub start: Vec3,
    /// End point in angstroms.
    pub end: Vec3,
}

impl Line3 {
    /// Create a line from `start` to `end`.
    #[must_use]
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}
