//! Level storage

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Area;
use crate::monster::Monster;
use crate::object::Item;
use crate::{MAP_MAX_X, MAP_MAX_Y};

/// Ground type of a map position
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tile {
    /// Not known (memory only)
    #[default]
    Unknown,
    Floor,
    Wall,
    Mountain,
    Tree,
    Grass,
    Dirt,
    Water,
    DeepWater,
    Lava,
}

impl Tile {
    /// Can a creature stand here?
    pub const fn is_passable(&self) -> bool {
        matches!(
            self,
            Tile::Floor | Tile::Grass | Tile::Dirt | Tile::Water
        )
    }

    /// Can the pulverization scroll destroy this?
    pub const fn is_rock(&self) -> bool {
        matches!(self, Tile::Wall | Tile::Mountain)
    }
}

/// Stationary objects
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum SObject {
    #[default]
    None,
    Altar,
    Fountain,
    StairsUp,
    StairsDown,
    Statue,
    Throne,
    Door,
}

/// Traps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TrapKind {
    Pit,
    SpikedPit,
    Trapdoor,
    Teleport,
    SleepGas,
    PoisonDart,
    Arrow,
}

/// One dungeon level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Level number
    pub depth: u8,

    tiles: Vec<Tile>,
    sobjects: Vec<SObject>,
    traps: Vec<Option<TrapKind>>,

    /// Items lying on the floor
    pub items: Vec<((i32, i32), Item)>,

    /// Monsters on this level
    pub monsters: Vec<Monster>,
}

impl Level {
    /// An empty room surrounded by walls
    pub fn new(depth: u8) -> Self {
        let mut tiles = vec![Tile::Floor; MAP_MAX_X * MAP_MAX_Y];
        for y in 0..MAP_MAX_Y {
            for x in 0..MAP_MAX_X {
                if x == 0 || y == 0 || x == MAP_MAX_X - 1 || y == MAP_MAX_Y - 1 {
                    tiles[y * MAP_MAX_X + x] = Tile::Wall;
                }
            }
        }
        Self {
            depth,
            tiles,
            sobjects: vec![SObject::None; MAP_MAX_X * MAP_MAX_Y],
            traps: vec![None; MAP_MAX_X * MAP_MAX_Y],
            items: Vec::new(),
            monsters: Vec::new(),
        }
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some(y as usize * MAP_MAX_X + x as usize)
        } else {
            None
        }
    }

    /// Every map layer covers the whole map (restored levels)
    pub fn is_complete(&self) -> bool {
        let cells = MAP_MAX_X * MAP_MAX_Y;
        self.tiles.len() == cells && self.sobjects.len() == cells && self.traps.len() == cells
    }

    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < MAP_MAX_X && (y as usize) < MAP_MAX_Y
    }

    /// Tile type; out of bounds counts as wall
    pub fn tile_at(&self, x: i32, y: i32) -> Tile {
        Self::index(x, y).map_or(Tile::Wall, |i| self.tiles[i])
    }

    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(i) = Self::index(x, y) {
            self.tiles[i] = tile;
        }
    }

    pub fn sobject_at(&self, x: i32, y: i32) -> SObject {
        Self::index(x, y).map_or(SObject::None, |i| self.sobjects[i])
    }

    pub fn set_sobject(&mut self, x: i32, y: i32, sobject: SObject) {
        if let Some(i) = Self::index(x, y) {
            self.sobjects[i] = sobject;
        }
    }

    pub fn trap_at(&self, x: i32, y: i32) -> Option<TrapKind> {
        Self::index(x, y).and_then(|i| self.traps[i])
    }

    pub fn set_trap(&mut self, x: i32, y: i32, trap: Option<TrapKind>) {
        if let Some(i) = Self::index(x, y) {
            self.traps[i] = trap;
        }
    }

    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y).is_passable()
    }

    pub fn monster_at(&self, x: i32, y: i32) -> Option<&crate::monster::Monster> {
        self.monsters.iter().find(|m| m.x == x && m.y == y)
    }

    pub fn monster_index_at(&self, x: i32, y: i32) -> Option<usize> {
        self.monsters.iter().position(|m| m.x == x && m.y == y)
    }

    /// Passable and not occupied by a monster
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.is_passable(x, y) && self.monster_at(x, y).is_none()
    }

    /// Drop an item on the floor
    pub fn drop_item(&mut self, x: i32, y: i32, item: Item) {
        self.items.push(((x, y), item));
    }

    pub fn items_at(&self, x: i32, y: i32) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |(pos, _)| *pos == (x, y))
            .map(|(_, item)| item)
    }

    /// Positions that block movement within `radius` of a point
    pub fn obstacles(&self, x: i32, y: i32, radius: i32) -> Area {
        let mut area = Area::new(x - radius, y - radius, 2 * radius + 1, 2 * radius + 1);
        for ay in area.start_y..area.start_y + area.size_y {
            for ax in area.start_x..area.start_x + area.size_x {
                if !self.is_passable(ax, ay) {
                    area.set(ax, ay, true);
                }
            }
        }
        area
    }

    /// Remove monsters whose hit points are gone; returns how many
    pub fn remove_dead_monsters(&mut self) -> usize {
        let before = self.monsters.len();
        self.monsters.retain(|m| m.is_alive());
        before - self.monsters.len()
    }
}
