//! Dungeon levels

mod area;
mod level;

pub use area::Area;
pub use level::{Level, SObject, Tile, TrapKind};
