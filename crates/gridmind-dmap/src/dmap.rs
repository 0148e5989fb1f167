use gridmind_core::{Action, GridPos, GridWorldView, Marker, TeamId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tiles::TileGrid;

/// Field value for tiles no seed can reach.
pub const UNREACHED: f32 = 1e5;

/// Per-tile scalar field over a [`TileGrid`].
///
/// After [`relax`](Self::relax) every floor tile holds its walkable
/// 4-connected distance to the nearest seed; unreached floor tiles and
/// wall tiles hold [`UNREACHED`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfluenceMap {
    width: i32,
    height: i32,
    values: Vec<f32>,
}

impl InfluenceMap {
    /// All-sentinel field with zeros on every seed that lands on a floor
    /// tile. Seeds off the grid or on walls are dropped. The field is not
    /// relaxed yet.
    pub fn from_seeds<I>(grid: &TileGrid, seeds: I) -> Self
    where
        I: IntoIterator<Item = GridPos>,
    {
        let width = grid.width();
        let height = grid.height();
        let mut values = vec![UNREACHED; (width * height) as usize];
        for seed in seeds {
            if grid.is_floor(seed.x, seed.y) {
                values[(seed.y * width + seed.x) as usize] = 0.0;
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Field value at a tile. Off-grid coordinates read as [`UNREACHED`].
    pub fn at(&self, x: i32, y: i32) -> f32 {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return UNREACHED;
        }
        self.values[(y * self.width + x) as usize]
    }

    pub fn is_reached(&self, x: i32, y: i32) -> bool {
        self.at(x, y) < UNREACHED
    }

    /// One full relaxation sweep. Returns true when any tile improved.
    pub fn relax_pass(&mut self, grid: &TileGrid) -> bool {
        assert!(
            self.width == grid.width() && self.height == grid.height(),
            "map and grid dimensions differ"
        );
        let mut changed = false;
        for y in 0..self.height {
            for x in 0..self.width {
                if !grid.is_floor(x, y) {
                    continue;
                }
                let i = (y * self.width + x) as usize;
                let v = self.values[i];
                let min_nei = self.min_floor_neighbor(grid, x, y, v);
                if min_nei < v - 1.0 {
                    self.values[i] = min_nei + 1.0;
                    changed = true;
                }
            }
        }
        changed
    }

    /// Sweeps until a full pass changes nothing.
    pub fn relax(&mut self, grid: &TileGrid) {
        while self.relax_pass(grid) {}
    }

    fn min_floor_neighbor(&self, grid: &TileGrid, x: i32, y: i32, own: f32) -> f32 {
        let mut min = own;
        for (dx, dy) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let (nx, ny) = (x + dx, y + dy);
            if grid.is_floor(nx, ny) {
                min = min.min(self.values[(ny * self.width + nx) as usize]);
            }
        }
        min
    }

    /// Steepest-descent step from `pos`.
    ///
    /// Scans the four neighbors in a fixed order (up, right, down, left)
    /// and returns the move toward the strictly smallest-valued floor
    /// neighbor, or `None` when no neighbor improves on the current cell.
    pub fn descend(&self, grid: &TileGrid, pos: GridPos) -> Option<Action> {
        const STEPS: [(Action, i32, i32); 4] = [
            (Action::MoveUp, 0, 1),
            (Action::MoveRight, 1, 0),
            (Action::MoveDown, 0, -1),
            (Action::MoveLeft, -1, 0),
        ];
        let mut best = self.at(pos.x, pos.y);
        let mut choice = None;
        for (action, dx, dy) in STEPS {
            let (x, y) = (pos.x + dx, pos.y + dy);
            if !grid.is_floor(x, y) {
                continue;
            }
            let v = self.at(x, y);
            if v < best {
                best = v;
                choice = Some(action);
            }
        }
        choice
    }
}

/// Distance-to-players field, seeded 0 on every tile occupied by an agent
/// of `player_team`.
pub fn approach_map<W>(world: &W, grid: &TileGrid, player_team: TeamId) -> InfluenceMap
where
    W: GridWorldView,
{
    let seeds = world.combatants().filter_map(|agent| {
        if world.team(agent) == Some(player_team) {
            world.position(agent)
        } else {
            None
        }
    });
    let mut map = InfluenceMap::from_seeds(grid, seeds);
    map.relax(grid);
    map
}

/// Repulsion field derived from a relaxed approach map.
///
/// Reached cells scale by -1.2, which steepens the gradient away from the
/// players. Unreached cells keep the sentinel.
pub fn flee_map(approach: &InfluenceMap) -> InfluenceMap {
    let mut map = approach.clone();
    for v in map.values.iter_mut() {
        if *v < UNREACHED {
            *v *= -1.2;
        }
    }
    map
}

/// Distance-to-hive field, seeded from every [`Marker::Hive`] tile.
pub fn hive_map<W>(world: &W, grid: &TileGrid) -> InfluenceMap
where
    W: GridWorldView,
{
    let seeds = world
        .tagged(Marker::Hive)
        .filter_map(|entity| world.position(entity));
    let mut map = InfluenceMap::from_seeds(grid, seeds);
    map.relax(grid);
    map
}

const ARCHER_RADIUS: i32 = 2;

/// Firing-position field, seeded 0 on every standable tile at Chebyshev
/// radius exactly 2 around a `player_team` agent with a clear line of
/// sight to it.
pub fn archer_map<W>(world: &W, grid: &TileGrid, player_team: TeamId) -> InfluenceMap
where
    W: GridWorldView,
{
    let mut seeds = Vec::new();
    for agent in world.combatants() {
        if world.team(agent) != Some(player_team) {
            continue;
        }
        let Some(center) = world.position(agent) else {
            continue;
        };
        for dy in -ARCHER_RADIUS..=ARCHER_RADIUS {
            for dx in -ARCHER_RADIUS..=ARCHER_RADIUS {
                if dx.abs() != ARCHER_RADIUS && dy.abs() != ARCHER_RADIUS {
                    continue;
                }
                let tile = GridPos::new(center.x + dx, center.y + dy);
                if !grid.is_floor(tile.x, tile.y) {
                    continue;
                }
                if view_obstructed(grid, center, tile) {
                    continue;
                }
                seeds.push(tile);
            }
        }
    }
    let mut map = InfluenceMap::from_seeds(grid, seeds);
    map.relax(grid);
    map
}

/// Line-of-sight test along the segment from `tile` toward `center`.
///
/// Walks the segment in fifths, endpoints excluded, and reports an
/// obstruction when any sample rounds into a wall tile.
fn view_obstructed(grid: &TileGrid, center: GridPos, tile: GridPos) -> bool {
    const STEPS: i32 = 5;
    let step_x = (center.x - tile.x) as f32 / STEPS as f32;
    let step_y = (center.y - tile.y) as f32 / STEPS as f32;
    let mut x = tile.x as f32 + step_x;
    let mut y = tile.y as f32 + step_y;
    for _ in 1..STEPS {
        if grid.is_wall(x.round() as i32, y.round() as i32) {
            return true;
        }
        x += step_x;
        y += step_y;
    }
    false
}
