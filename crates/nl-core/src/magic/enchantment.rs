//! Enchant armour and enchant weapon scrolls
//!
//! Blessed scrolls repair the item first and never raise its bonus past the
//! configured cap. Unblessed scrolls have no cap.

use crate::object::{Item, ItemKind};
use crate::{ARMOUR_MAX_BONUS, GameState};

fn display_name(item: &Item) -> String {
    item.name.clone().unwrap_or_else(|| item.kind.to_string())
}

/// Inventory indices of worn armour that can still be enchanted
fn enchantable_armour(state: &GameState) -> Vec<usize> {
    state
        .player
        .eq_armour
        .iter()
        .filter_map(|id| state.player.inventory.iter().position(|i| i.id == *id))
        .filter(|&idx| {
            let item = &state.player.inventory[idx];
            item.kind == ItemKind::Armour && item.bonus < ARMOUR_MAX_BONUS
        })
        .collect()
}

/// Scroll of enchant armour: enchants a random worn piece
pub fn scroll_enchant_armour(state: &mut GameState, scroll: &Item) -> bool {
    let candidates = enchantable_armour(state);
    let Some(&idx) = state.rng.choose(&candidates) else {
        return false;
    };

    let cap = state.options.blessed_enchant_cap;
    let armour = &mut state.player.inventory[idx];
    let name = display_name(armour);

    if scroll.blessed {
        state.log.add(format!("Your {name} glows brightly for a moment."));
        armour.repair();
        if armour.bonus < 0 {
            armour.bonus = 0;
            if state.rng.chance(50) {
                return true;
            }
        } else if state.rng.chance(50) && armour.bonus < cap {
            armour.enchant();
        }
    } else {
        state.log.add(format!("Your {name} glows for a moment."));
    }

    if !scroll.blessed || armour.bonus < cap {
        armour.enchant();
    }

    tracing::debug!(armour = %name, bonus = armour.bonus, "armour enchanted");
    true
}

/// Scroll of enchant weapon: enchants the wielded weapon
pub fn scroll_enchant_weapon(state: &mut GameState, scroll: &Item) -> bool {
    let Some(weapon_id) = state.player.eq_weapon else {
        return false;
    };
    let cap = state.options.blessed_enchant_cap;
    let Some(weapon) = state.player.inventory.iter_mut().find(|i| i.id == weapon_id) else {
        return false;
    };
    let name = display_name(weapon);

    if scroll.blessed {
        state.log.add(format!("Your {name} glows brightly for a moment."));
        weapon.repair();
        if weapon.bonus < 0 {
            weapon.bonus = 0;
            return true;
        }
    } else {
        state.log.add(format!("Your {name} glisters for a moment."));
    }

    if !scroll.blessed || weapon.bonus < cap {
        weapon.enchant();
    }

    tracing::debug!(weapon = %name, bonus = weapon.bonus, "weapon enchanted");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magic::scroll_data::ScrollVariant;
    use crate::object::{ItemDamage, ItemId};

    fn scroll(variant: ScrollVariant) -> Item {
        Item::new(ItemId(1000), ItemKind::Scroll, variant as u8)
    }

    fn wear(state: &mut GameState, bonus: i32) -> ItemId {
        let id = state.give_item(
            Item::new(ItemId::NONE, ItemKind::Armour, 0)
                .with_name("leather armour")
                .with_bonus(bonus),
        );
        state.player.eq_armour.push(id);
        id
    }

    fn wield(state: &mut GameState, bonus: i32) -> ItemId {
        let id = state.give_item(
            Item::new(ItemId::NONE, ItemKind::Weapon, 0)
                .with_name("dagger")
                .with_bonus(bonus),
        );
        state.player.eq_weapon = Some(id);
        id
    }

    fn bonus(state: &GameState, id: ItemId) -> i32 {
        state.player.item(id).map_or(i32::MIN, |i| i.bonus)
    }

    #[test]
    fn test_armour_noop_without_armour() {
        let mut state = GameState::new(1);
        assert!(!scroll_enchant_armour(&mut state, &scroll(ScrollVariant::EnchantArmour)));
        assert!(state.log.is_empty());
    }

    #[test]
    fn test_armour_at_maximum_is_skipped() {
        let mut state = GameState::new(1);
        wear(&mut state, ARMOUR_MAX_BONUS);
        assert!(!scroll_enchant_armour(&mut state, &scroll(ScrollVariant::EnchantArmour)));
    }

    #[test]
    fn test_unblessed_armour_has_no_cap() {
        let mut state = GameState::new(1);
        let id = wear(&mut state, 5);
        assert!(scroll_enchant_armour(&mut state, &scroll(ScrollVariant::EnchantArmour)));
        assert_eq!(bonus(&state, id), 6);
        assert!(state.log.contains("Your leather armour glows for a moment."));
    }

    #[test]
    fn test_blessed_armour_never_exceeds_cap() {
        for seed in 0..40 {
            let mut state = GameState::new(seed);
            let id = wear(&mut state, 2);
            let blessed = scroll(ScrollVariant::EnchantArmour).blessed();
            for _ in 0..5 {
                scroll_enchant_armour(&mut state, &blessed);
                assert!(bonus(&state, id) <= 3);
            }
            assert_eq!(bonus(&state, id), 3);
        }
    }

    #[test]
    fn test_blessed_armour_repairs() {
        for seed in 0..20 {
            let mut state = GameState::new(seed);
            let id = wear(&mut state, -3);
            if let Some(item) = state.player.item_mut(id) {
                item.damage = ItemDamage::RUSTY;
            }
            scroll_enchant_armour(&mut state, &scroll(ScrollVariant::EnchantArmour).blessed());
            let item = state.player.item(id).cloned().unwrap_or_default();
            assert!(item.damage.is_empty());
            assert!((0..=1).contains(&item.bonus));
        }
    }

    #[test]
    fn test_weapon_noop_without_weapon() {
        let mut state = GameState::new(1);
        assert!(!scroll_enchant_weapon(&mut state, &scroll(ScrollVariant::EnchantWeapon)));
    }

    #[test]
    fn test_blessed_weapon_stops_at_zero() {
        let mut state = GameState::new(1);
        let id = wield(&mut state, -2);
        assert!(scroll_enchant_weapon(&mut state, &scroll(ScrollVariant::EnchantWeapon).blessed()));
        assert_eq!(bonus(&state, id), 0);
        assert!(state.log.contains("Your dagger glows brightly for a moment."));
    }

    #[test]
    fn test_weapon_cap_only_for_blessed() {
        let mut state = GameState::new(1);
        let id = wield(&mut state, 3);
        scroll_enchant_weapon(&mut state, &scroll(ScrollVariant::EnchantWeapon).blessed());
        assert_eq!(bonus(&state, id), 3);
        scroll_enchant_weapon(&mut state, &scroll(ScrollVariant::EnchantWeapon));
        assert_eq!(bonus(&state, id), 4);
        assert!(state.log.contains("Your dagger glisters for a moment."));
    }
}
