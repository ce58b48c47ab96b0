//! Monster instances

use serde::{Deserialize, Serialize};

use super::MonsterType;

/// Unique identifier for monster instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub const NONE: MonsterId = MonsterId(0);

    pub fn next(self) -> Self {
        MonsterId(self.0 + 1)
    }
}

/// A monster on a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub kind: MonsterType,
    pub hp: i32,
    pub hp_max: i32,
    pub x: i32,
    pub y: i32,
}

impl Monster {
    /// A fresh, unhurt monster of the given type
    pub fn new(id: MonsterId, kind: MonsterType, x: i32, y: i32) -> Self {
        let hp_max = kind.data().hp_max;
        Self {
            id,
            kind,
            hp: hp_max,
            hp_max,
            x,
            y,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_damaged(&self) -> bool {
        self.hp < self.hp_max
    }

    /// Take damage; returns true if this killed the monster
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.hp = self.hp.saturating_sub(amount.max(0));
        was_alive && !self.is_alive()
    }

    /// Restore all hit points; returns false if nothing was missing
    pub fn heal_full(&mut self) -> bool {
        if !self.is_damaged() {
            return false;
        }
        self.hp = self.hp_max;
        true
    }
}
