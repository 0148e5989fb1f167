#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dungeon tile classes, reduced to what the field generator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tile {
    Floor,
    Wall,
}

/// Read-only, row-major tile grid.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn from_tiles(width: u32, height: u32, tiles: Vec<Tile>) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty");
        assert!(
            tiles.len() == (width * height) as usize,
            "tile array must be width * height"
        );
        Self {
            width: width as i32,
            height: height as i32,
            tiles,
        }
    }

    /// All-floor grid, the usual test arena.
    pub fn open(width: u32, height: u32) -> Self {
        Self::from_tiles(
            width,
            height,
            vec![Tile::Floor; (width * height) as usize],
        )
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(idx) = self.idx(x, y) {
            self.tiles[idx] = tile;
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Off-grid coordinates are neither floor nor wall.
    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.idx(x, y)
            .map(|idx| self.tiles[idx] == Tile::Floor)
            .unwrap_or(false)
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.idx(x, y)
            .map(|idx| self.tiles[idx] == Tile::Wall)
            .unwrap_or(false)
    }

    pub(crate) fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y * self.width + x) as usize)
    }
}
