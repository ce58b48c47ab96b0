//! Monsters: static templates and live instances

mod monst;
mod permonst;

pub use monst::{Monster, MonsterId};
pub use permonst::{MonsterFlags, MonsterType, PERMONST, PerMonst};
