//! What the player remembers of each level

use serde::{Deserialize, Serialize};

use crate::dungeon::{SObject, Tile, TrapKind};
use crate::{MAP_MAX_X, MAP_MAX_Y};

/// Remembered contents of one map position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCell {
    pub tile: Tile,
    pub sobject: SObject,
    pub trap: Option<TrapKind>,
}

/// Player's map of one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMemory {
    cells: Vec<MemoryCell>,
}

impl Default for LevelMemory {
    fn default() -> Self {
        Self {
            cells: vec![MemoryCell::default(); MAP_MAX_X * MAP_MAX_Y],
        }
    }
}

impl LevelMemory {
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= MAP_MAX_X || y as usize >= MAP_MAX_Y {
            None
        } else {
            Some(y as usize * MAP_MAX_X + x as usize)
        }
    }

    pub fn get(&self, x: i32, y: i32) -> MemoryCell {
        Self::index(x, y).map_or_else(MemoryCell::default, |i| self.cells[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut MemoryCell> {
        Self::index(x, y).map(|i| &mut self.cells[i])
    }

    /// Covers the whole map (restored games)
    pub fn is_complete(&self) -> bool {
        self.cells.len() == MAP_MAX_X * MAP_MAX_Y
    }

    /// Number of positions with a known tile
    pub fn known_tiles(&self) -> usize {
        self.cells.iter().filter(|c| c.tile != Tile::Unknown).count()
    }
}
