//! Player state: effects, inventory, knowledge and map memory

mod effects;
mod memory;
mod you;

pub use effects::{EffectAdded, EffectList, StatusEffectKind, TimedEffect};
pub use memory::{LevelMemory, MemoryCell};
pub use you::{DeathCause, Discoveries, KnownSpell, Player, PlayerStats, Position};
