//! Identify and remove curse scrolls

use crate::object::objname::{capitalize, describe};
use crate::object::{Item, ItemKind};
use crate::player::Player;
use crate::ui::Interface;
use crate::GameState;

fn indices_where(player: &Player, pred: impl Fn(&Player, &Item) -> bool) -> Vec<usize> {
    player
        .inventory
        .iter()
        .enumerate()
        .filter(|(_, item)| pred(player, item))
        .map(|(idx, _)| idx)
        .collect()
}

fn unidentified(player: &Player) -> Vec<usize> {
    indices_where(player, |p, item| p.item_unidentified(item))
}

fn cursed(player: &Player) -> Vec<usize> {
    indices_where(player, |_, item| item.cursed)
}

/// Let the player pick one of the items at `indices`
fn choose_among(
    player: &Player,
    ui: &mut dyn Interface,
    prompt: &str,
    indices: &[usize],
) -> Option<usize> {
    let candidates: Vec<&Item> = indices.iter().map(|&i| &player.inventory[i]).collect();
    ui.choose_item(prompt, &candidates)
        .and_then(|choice| indices.get(choice).copied())
}

/// Mark the scroll being read as fully known, in the pack if it is there
fn identify_scroll(state: &mut GameState, scroll: &Item) {
    state.player.discoveries.learn(ItemKind::Scroll, scroll.variant);
    if let Some(item) = state.player.item_mut(scroll.id) {
        item.blessed_known = true;
    }
}

/// Scroll of identify
pub fn scroll_identify(state: &mut GameState, ui: &mut dyn Interface, scroll: &Item) -> bool {
    let pending = unidentified(&state.player);
    if pending.is_empty() {
        return false;
    }

    state.log.add("This is a scroll of identify.");

    if scroll.blessed {
        state.log.add("You identify your possessions.");
        for idx in pending {
            state.player.identify_inventory_item(idx);
        }
        return true;
    }

    identify_scroll(state, scroll);

    let tries = state.rng.rand_1n(state.options.identify_picks);
    for _ in 0..tries {
        let pending = unidentified(&state.player);
        if pending.is_empty() {
            break;
        }
        let Some(idx) = choose_among(&state.player, ui, "Choose an item to identify", &pending)
        else {
            break;
        };

        let item = &state.player.inventory[idx];
        let before = describe(item, false, &state.codebook);
        state.log.add(format!("You identify {before}."));

        state.player.identify_inventory_item(idx);

        let item = &state.player.inventory[idx];
        let after = describe(item, true, &state.codebook);
        let lead = if item.count > 1 { "These are" } else { "This is" };
        state.log.add(format!("{lead} {after}."));
    }

    true
}

fn uncurse(state: &mut GameState, idx: usize) {
    let item = &state.player.inventory[idx];
    let known = state.player.item_known(item);
    let desc = capitalize(&describe(item, known, &state.codebook));
    let suffix = if item.count == 1 { "s" } else { "" };
    state.log.add(format!("{desc} glow{suffix} in a white light."));
    state.player.inventory[idx].remove_curse();
}

/// Scroll of remove curse
pub fn scroll_remove_curse(state: &mut GameState, ui: &mut dyn Interface, scroll: &Item) -> bool {
    let cursed_items = cursed(&state.player);
    if cursed_items.is_empty() {
        return false;
    }

    state.log.add("This is a scroll of remove curse.");

    if scroll.blessed {
        state.log.add("You remove curses on your possessions.");
        for idx in cursed_items {
            uncurse(state, idx);
        }
        return true;
    }

    let suspects = indices_where(&state.player, |_, item| item.cursed || !item.blessed_known);
    if let Some(idx) = choose_among(&state.player, ui, "Choose an item to uncurse", &suspects) {
        if state.player.inventory[idx].cursed {
            uncurse(state, idx);
        } else {
            state.log.add("Nothing happens.");
        }
    }

    true
}
