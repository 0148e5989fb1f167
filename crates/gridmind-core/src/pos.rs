#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer tile coordinate, row-major grids, `MoveUp` is +y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn dist_sq(self, other: GridPos) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        dx * dx + dy * dy
    }

    /// Euclidean distance between tile centers.
    pub fn dist(self, other: GridPos) -> f32 {
        self.dist_sq(other).sqrt()
    }
}
