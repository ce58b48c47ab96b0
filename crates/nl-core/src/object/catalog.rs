//! Static item tables and level-based item generation
//!
//! Entry 0 of every table is a sentinel, so valid ids run from 1 to
//! `max_id(kind) - 1`.

use super::{Item, ItemId, ItemKind};
use crate::magic::scroll_data::{SCROLLS, ScrollVariant};
use crate::rng::GameRng;
use crate::MAP_MAX;

/// Name, base price and availability of one item type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub price: u32,
    pub obtainable: bool,
}

const fn entry(name: &'static str, price: u32, obtainable: bool) -> CatalogEntry {
    CatalogEntry {
        name,
        price,
        obtainable,
    }
}

pub static AMULETS: [CatalogEntry; 7] = [
    entry("", 0, false),
    entry("awareness", 400, true),
    entry("sustainment", 400, true),
    entry("negate spirit", 500, true),
    entry("undead control", 1200, true),
    entry("night vision", 600, true),
    entry("larn", 5000, false),
];

/// Holy water is potion 1
pub const POTION_WATER: u8 = 1;

pub static POTIONS: [CatalogEntry; 15] = [
    entry("", 0, false),
    entry("water", 100, true),
    entry("sleep", 50, false),
    entry("healing", 400, true),
    entry("raise level", 800, true),
    entry("increase ability", 300, true),
    entry("gain wisdom", 500, true),
    entry("gain strength", 500, true),
    entry("charismatic character", 500, true),
    entry("dizziness", 50, false),
    entry("learning", 500, true),
    entry("object detection", 300, true),
    entry("monster detection", 300, true),
    entry("forgetfulness", 50, false),
    entry("blindness", 50, false),
];

/// Spell books; the variant doubles as the spell number
pub static BOOKS: [CatalogEntry; 17] = [
    entry("", 0, false),
    entry("protection", 100, true),
    entry("magic missile", 100, true),
    entry("dexterity", 150, true),
    entry("sleep", 150, true),
    entry("charm monster", 200, true),
    entry("sonic spear", 250, true),
    entry("web", 300, true),
    entry("strength", 300, true),
    entry("enlightenment", 400, true),
    entry("healing", 400, true),
    entry("cure blindness", 400, true),
    entry("fireball", 600, true),
    entry("cone of cold", 700, true),
    entry("vaporize rock", 800, true),
    entry("dehydration", 900, true),
    entry("finger of death", 1500, true),
];

fn table(kind: ItemKind) -> Option<&'static [CatalogEntry]> {
    match kind {
        ItemKind::Amulet => Some(&AMULETS),
        ItemKind::Book => Some(&BOOKS),
        ItemKind::Potion => Some(&POTIONS),
        _ => None,
    }
}

/// One past the highest id of a category with a type table
pub fn max_id(kind: ItemKind) -> u8 {
    match kind {
        ItemKind::Scroll => SCROLLS.len() as u8,
        _ => table(kind).map_or(1, |t| t.len() as u8),
    }
}

/// Base price of an item's type
pub fn base_price(item: &Item) -> u32 {
    if item.kind == ItemKind::Scroll {
        return ScrollVariant::from_item_variant(item.variant).map_or(0, |v| v.price());
    }
    table(item.kind)
        .and_then(|t| t.get(item.variant as usize))
        .map_or(0, |e| e.price)
}

/// May items of this type turn up in shops and random generation?
pub fn obtainable(kind: ItemKind, variant: u8) -> bool {
    if kind == ItemKind::Scroll {
        return ScrollVariant::from_item_variant(variant).is_some_and(|v| v.obtainable());
    }
    table(kind)
        .and_then(|t| t.get(variant as usize))
        .is_some_and(|e| e.obtainable)
}

/// Type name (for identified items)
pub fn type_name(kind: ItemKind, variant: u8) -> &'static str {
    if kind == ItemKind::Scroll {
        return ScrollVariant::from_item_variant(variant).map_or("", |v| v.name());
    }
    table(kind)
        .and_then(|t| t.get(variant as usize))
        .map_or("", |e| e.name)
}

/// Create a random item of a category appropriate for a dungeon level
///
/// Deeper levels allow higher type ids. One in ten items is cursed, one in
/// ten blessed; cursed amulets may carry a negative bonus.
pub fn item_new_by_level(id: ItemId, kind: ItemKind, level: i32, rng: &mut GameRng) -> Item {
    let max = i32::from(max_id(kind));
    let level = level.clamp(0, i32::from(MAP_MAX) - 1);
    let upper = (max * (level + 1) / i32::from(MAP_MAX) + 2).min(max);
    let variant = rng.rand_1n(upper) as u8;

    let mut item = Item::new(id, kind, variant);
    match rng.rn2(10) {
        0 => item.cursed = true,
        1 => item.blessed = true,
        _ => {}
    }
    if kind == ItemKind::Amulet {
        item.bonus = if item.cursed {
            -rng.rand_1n(3)
        } else {
            rng.rn2(3) as i32
        };
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_ids() {
        assert_eq!(max_id(ItemKind::Scroll), 26);
        assert_eq!(max_id(ItemKind::Potion), POTIONS.len() as u8);
        assert_eq!(max_id(ItemKind::Gem), 1);
    }

    #[test]
    fn test_water_is_obtainable() {
        assert_eq!(type_name(ItemKind::Potion, POTION_WATER), "water");
        assert!(obtainable(ItemKind::Potion, POTION_WATER));
    }

    #[test]
    fn test_scroll_lookups_use_scroll_table() {
        let variant = ScrollVariant::Annihilation as u8;
        assert_eq!(type_name(ItemKind::Scroll, variant), "annihilation");
        assert!(!obtainable(ItemKind::Scroll, variant));
        let item = Item::new(ItemId(1), ItemKind::Scroll, variant);
        assert_eq!(base_price(&item), 3000);
    }

    #[test]
    fn test_generated_ids_in_range() {
        let mut rng = GameRng::new(17);
        for kind in [ItemKind::Amulet, ItemKind::Book, ItemKind::Potion, ItemKind::Scroll] {
            for level in [0, 5, 13, 40] {
                let item = item_new_by_level(ItemId(1), kind, level, &mut rng);
                assert!(item.variant >= 1 && item.variant < max_id(kind));
                assert!(!(item.cursed && item.blessed));
            }
        }
    }
}
