//! Scroll of create artifact

use crate::object::catalog::{self, POTION_WATER};
use crate::object::objname::describe;
use crate::object::{Item, ItemKind};
use crate::{GameState, MAP_MAX};

const MAGIC_ITEM_KINDS: [ItemKind; 4] =
    [ItemKind::Amulet, ItemKind::Book, ItemKind::Potion, ItemKind::Scroll];

/// Re-roll cheap junk and dull books for blessed scrolls
fn improve(state: &mut GameState, item: &mut Item, level: i32) {
    if item.bonus < 1 && item.kind.is_optimizable() {
        item.bonus = state.rng.rand_1n(3);
    }
    item.repair();

    let max = i32::from(catalog::max_id(item.kind));
    match item.kind {
        ItemKind::Potion | ItemKind::Scroll => {
            while catalog::base_price(item) < 200 && !catalog::obtainable(item.kind, item.variant) {
                item.variant = state.rng.rand_1n(max) as u8;
            }
            if item.kind == ItemKind::Potion && item.variant == POTION_WATER {
                item.blessed = true;
            }
        }
        ItemKind::Book => {
            let threshold = max * level / (i32::from(MAP_MAX) - 1);
            while (state.player.spell_known(item.variant) && state.rng.chance(80))
                || (i32::from(item.variant) < threshold && state.rng.chance(50))
            {
                item.variant = state.rng.rand_1n(max) as u8;
            }
        }
        _ => {}
    }
}

/// Create a random magic item at the player's feet
pub fn scroll_create_artifact(state: &mut GameState, scroll: &Item) -> bool {
    let kind = MAGIC_ITEM_KINDS[state.rng.rn2(MAGIC_ITEM_KINDS.len() as u32) as usize];

    let depth = i32::from(state.player.pos.z);
    let level = if !scroll.blessed {
        depth
    } else if kind == ItemKind::Amulet {
        depth.max(10)
    } else {
        state.rng.rand_m_n(depth, i32::from(MAP_MAX))
    };

    let id = state.new_item_id();
    let mut item = catalog::item_new_by_level(id, kind, level, &mut state.rng);
    item.cursed = false;
    item.bonus = item.bonus.max(0);

    if scroll.blessed {
        improve(state, &mut item, level);
    }

    let known = state.player.item_known(&item);
    let desc = describe(&item, known, &state.codebook);
    let (x, y) = (state.player.pos.x, state.player.pos.y);
    state.current_level_mut().drop_item(x, y, item);
    state.log.add(format!("You find {desc} below your feet."));

    true
}
