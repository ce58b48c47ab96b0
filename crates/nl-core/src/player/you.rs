//! The player character

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::{EffectList, LevelMemory, StatusEffectKind};
use crate::object::{Item, ItemId, ItemKind};
use crate::MAP_MAX;

/// Position on a level, `z` being the level number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: u8,
}

impl Position {
    pub const fn new(x: i32, y: i32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Same level, shifted by an offset
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }
}

/// A spell the player has learned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownSpell {
    /// Spell number (book variant)
    pub id: u8,
    /// Knowledge level; higher means stronger casting
    pub knowledge: u32,
}

/// Item types whose identity the player has learned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discoveries {
    known: HashSet<(ItemKind, u8)>,
}

impl Discoveries {
    /// Is the true identity of this type known?
    ///
    /// Categories without hidden identities are always known.
    pub fn is_known(&self, kind: ItemKind, variant: u8) -> bool {
        !kind.has_hidden_identity() || self.known.contains(&(kind, variant))
    }

    /// Learn an item type; returns true if it was new
    pub fn learn(&mut self, kind: ItemKind, variant: u8) -> bool {
        kind.has_hidden_identity() && self.known.insert((kind, variant))
    }

    pub fn count(&self) -> usize {
        self.known.len()
    }
}

/// Counters kept for the end-of-game summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub scrolls_read: u32,
    pub monsters_killed: u32,
    pub items_identified: u32,
}

/// How the player died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum DeathCause {
    /// Killed by an exploding cursed scroll
    #[strum(to_string = "killed by a cursed scroll")]
    Curse,
    /// Wiped out their own kind
    #[strum(to_string = "genocided")]
    Genocide,
    #[strum(to_string = "killed by a monster")]
    Monster,
}

/// Player state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hp: i32,
    pub hp_max: i32,
    pub pos: Position,

    /// Active timed effects
    pub effects: EffectList,

    pub inventory: Vec<Item>,
    /// Wielded weapon
    pub eq_weapon: Option<ItemId>,
    /// Worn armour pieces
    pub eq_armour: Vec<ItemId>,

    pub known_spells: Vec<KnownSpell>,
    pub discoveries: Discoveries,
    pub stats: PlayerStats,

    /// Remembered map of every level
    pub memory: Vec<LevelMemory>,

    /// Set once the player has died
    pub death: Option<DeathCause>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: String::from("Adventurer"),
            hp: 20,
            hp_max: 20,
            pos: Position::default(),
            effects: EffectList::new(),
            inventory: Vec::new(),
            eq_weapon: None,
            eq_armour: Vec::new(),
            known_spells: Vec::new(),
            discoveries: Discoveries::default(),
            stats: PlayerStats::default(),
            memory: (0..MAP_MAX).map(|_| LevelMemory::default()).collect(),
            death: None,
        }
    }
}

impl Player {
    pub fn is_blind(&self) -> bool {
        self.effects.has(StatusEffectKind::Blindness)
    }

    pub fn is_dead(&self) -> bool {
        self.death.is_some()
    }

    /// Take damage; returns true if this killed the player
    pub fn take_damage(&mut self, amount: i32, cause: DeathCause) -> bool {
        if self.is_dead() {
            return false;
        }
        self.hp = self.hp.saturating_sub(amount.max(0));
        if self.hp <= 0 {
            self.die(cause);
            return true;
        }
        false
    }

    pub fn die(&mut self, cause: DeathCause) {
        self.hp = self.hp.min(0);
        self.death = Some(cause);
    }

    /// Has the player discovered this item's type?
    pub fn item_known(&self, item: &Item) -> bool {
        self.discoveries.is_known(item.kind, item.variant)
    }

    /// Does the item still hide something from the player?
    pub fn item_unidentified(&self, item: &Item) -> bool {
        !self.item_known(item)
            || !item.blessed_known
            || (item.kind.is_optimizable() && !item.bonus_known)
    }

    /// Learn everything about an inventory item
    pub fn identify_inventory_item(&mut self, index: usize) {
        let Some(item) = self.inventory.get_mut(index) else {
            return;
        };
        self.discoveries.learn(item.kind, item.variant);
        item.blessed_known = true;
        item.bonus_known = true;
        self.stats.items_identified += 1;
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.inventory.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.inventory.iter_mut().find(|i| i.id == id)
    }

    pub fn spell_known(&self, id: u8) -> bool {
        self.known_spells.iter().any(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_kills() {
        let mut player = Player::default();
        assert!(!player.take_damage(5, DeathCause::Monster));
        assert_eq!(player.hp, 15);
        assert!(player.take_damage(15, DeathCause::Curse));
        assert_eq!(player.death, Some(DeathCause::Curse));
        assert!(!player.take_damage(5, DeathCause::Monster));
        assert_eq!(player.death, Some(DeathCause::Curse));
    }

    #[test]
    fn test_discoveries_only_track_hidden_kinds() {
        let mut found = Discoveries::default();
        assert!(found.is_known(ItemKind::Gem, 3));
        assert!(!found.learn(ItemKind::Gem, 3));
        assert!(!found.is_known(ItemKind::Scroll, 3));
        assert!(found.learn(ItemKind::Scroll, 3));
        assert!(!found.learn(ItemKind::Scroll, 3));
        assert!(found.is_known(ItemKind::Scroll, 3));
        assert_eq!(found.count(), 1);
    }

    #[test]
    fn test_identify_inventory_item() {
        let mut player = Player::default();
        player
            .inventory
            .push(Item::new(ItemId(1), ItemKind::Potion, 4));
        assert!(player.item_unidentified(&player.inventory[0]));

        player.identify_inventory_item(0);

        assert!(!player.item_unidentified(&player.inventory[0]));
        assert_eq!(player.stats.items_identified, 1);
    }

    #[test]
    fn test_memory_covers_all_levels() {
        let player = Player::default();
        assert_eq!(player.memory.len(), MAP_MAX as usize);
    }

    #[test]
    fn test_death_cause_display() {
        assert_eq!(DeathCause::Genocide.to_string(), "genocided");
    }
}
