//! Cartesian grid coordinates.
//!
//! The origin sits in a corner of the grid and both axes grow away from it,
//! so coordinates are unsigned. The Hilbert curve always starts at the origin.

/// A cell position in a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl GridCoord {
    /// Corner where every curve starts.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether both axes are inside a grid of the given side.
    #[inline]
    pub const fn within(&self, side: u32) -> bool {
        self.x < side && self.y < side
    }

    /// Manhattan distance between two cells.
    pub fn grid_distance(&self, other: &Self) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Whether two cells share an edge.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.grid_distance(other) == 1
    }
}

impl From<(u32, u32)> for GridCoord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<GridCoord> for (u32, u32) {
    fn from(value: GridCoord) -> Self {
        (value.x, value.y)
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
