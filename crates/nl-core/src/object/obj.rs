//! Item instances

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Unique identifier for item instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub const NONE: ItemId = ItemId(0);

    pub fn next(self) -> Self {
        ItemId(self.0 + 1)
    }
}

/// Item categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    Amulet,
    Armour,
    Book,
    Gem,
    Potion,
    Ring,
    Scroll,
    Weapon,
    #[default]
    Other,
}

impl ItemKind {
    /// Categories whose identity is hidden behind a flavor or generic name
    pub const fn has_hidden_identity(&self) -> bool {
        matches!(
            self,
            ItemKind::Amulet | ItemKind::Book | ItemKind::Potion | ItemKind::Ring | ItemKind::Scroll
        )
    }

    /// Categories that carry a meaningful bonus
    pub const fn is_optimizable(&self) -> bool {
        matches!(self, ItemKind::Armour | ItemKind::Ring | ItemKind::Weapon)
    }
}

bitflags! {
    /// Wear and tear on an item
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ItemDamage: u8 {
        const RUSTY = 0x01;
        const BURNT = 0x02;
        const CORRODED = 0x04;
    }
}

/// Item instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,

    /// Category
    pub kind: ItemKind,

    /// Index into the category's table (scroll variant, potion type, ...)
    pub variant: u8,

    /// Stack size
    pub count: u32,

    /// Enchantment, or value for gems
    pub bonus: i32,

    pub cursed: bool,
    pub blessed: bool,

    /// Blessed/cursed status known to the player
    pub blessed_known: bool,

    /// Bonus known to the player
    pub bonus_known: bool,

    /// Rust, burn and corrosion
    pub damage: ItemDamage,

    /// Individual name for items without a table entry (weapons, armour, gems)
    pub name: Option<String>,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: ItemId::NONE,
            kind: ItemKind::Other,
            variant: 0,
            count: 1,
            bonus: 0,
            cursed: false,
            blessed: false,
            blessed_known: false,
            bonus_known: false,
            damage: ItemDamage::empty(),
            name: None,
        }
    }
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind, variant: u8) -> Self {
        Self {
            id,
            kind,
            variant,
            ..Self::default()
        }
    }

    /// Builder: give the item an individual name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the bonus
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Builder: make the item blessed
    pub fn blessed(mut self) -> Self {
        self.blessed = true;
        self.cursed = false;
        self
    }

    /// Builder: make the item cursed
    pub fn cursed(mut self) -> Self {
        self.cursed = true;
        self.blessed = false;
        self
    }

    /// Raise the bonus by one
    pub fn enchant(&mut self) {
        self.bonus = self.bonus.saturating_add(1);
    }

    pub fn remove_curse(&mut self) {
        self.cursed = false;
    }

    /// Clear rust, burn and corrosion
    pub fn repair(&mut self) {
        self.damage = ItemDamage::empty();
    }

    pub fn is_gem(&self) -> bool {
        self.kind == ItemKind::Gem
    }
}
