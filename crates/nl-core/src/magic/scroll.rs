//! Scroll reading
//!
//! [`read_scroll`] performs the checks every scroll shares (blindness, known
//! curses, the reading turn, exploding cursed scrolls) and then hands over to
//! the handler for the variant. Handlers return whether reading taught the
//! player what the scroll is.

use super::annihilation::scroll_annihilate;
use super::creation::scroll_create_artifact;
use super::enchantment::{scroll_enchant_armour, scroll_enchant_weapon};
use super::genocide::scroll_genocide_monster;
use super::identification::{scroll_identify, scroll_remove_curse};
use super::mapping::scroll_mapping;
use super::scroll_data::ScrollVariant;
use super::timewarp::scroll_timewarp;
use crate::dungeon::{SObject, Tile};
use crate::monster::{Monster, MonsterType};
use crate::object::objname::describe;
use crate::object::{Item, ItemKind};
use crate::player::{DeathCause, EffectAdded, StatusEffectKind, TimedEffect};
use crate::ui::Interface;
use crate::{GameState, MAP_DMAX, MAP_MAX};

/// Outcome of reading a scroll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumeResult {
    /// One scroll of the stack is used up
    pub consumed: bool,
    /// The player now knows the scroll type
    pub identified: bool,
}

/// Log "This is a scroll of X." unless the player already knows the type
pub(crate) fn first_identification(state: &mut GameState, scroll: &Item) {
    if !state.player.discoveries.is_known(ItemKind::Scroll, scroll.variant)
        && let Some(variant) = ScrollVariant::from_item_variant(scroll.variant)
    {
        state.log.add(format!("This is a scroll of {}.", variant.name()));
    }
}

/// Read a scroll.
///
/// The caller owns the scroll and is responsible for removing it when the
/// result says it was consumed; see [`read_scroll_from_inventory`].
///
/// # Panics
///
/// If `scroll` is not a scroll or carries no valid scroll variant.
pub fn read_scroll(state: &mut GameState, ui: &mut dyn Interface, scroll: &Item) -> ConsumeResult {
    assert_eq!(scroll.kind, ItemKind::Scroll, "{} is not a scroll", scroll.kind);
    let variant = match ScrollVariant::from_item_variant(scroll.variant) {
        Some(ScrollVariant::None) | None => panic!("invalid scroll variant {}", scroll.variant),
        Some(variant) => variant,
    };

    let _span = tracing::debug_span!("read_scroll", %variant, blessed = scroll.blessed).entered();

    let mut result = ConsumeResult::default();
    let known = state.player.item_known(scroll);
    let desc = describe(scroll, known, &state.codebook);

    if state.player.is_blind() {
        state.log.add(format!("As you are blind you can't read {desc}."));
        return result;
    }

    if scroll.cursed && scroll.blessed_known {
        state.log.add("You'd rather not read this cursed scroll.");
        return result;
    }

    state.log.add(format!("You read {desc}."));

    if !ui.spend_turn(state.options.reading_cost, true, &format!("reading {desc}")) {
        tracing::debug!("reading interrupted");
        return result;
    }

    result.consumed = true;
    state.player.stats.scrolls_read += 1;

    if scroll.cursed {
        let damage = state.rng.rand_1n(state.player.hp);
        state.log.add("The scroll explodes!");
        let died = state.player.take_damage(damage, DeathCause::Curse);
        tracing::debug!(damage, died, "cursed scroll exploded");
        return result;
    }

    result.identified = match variant {
        ScrollVariant::None => unreachable!("sentinel rejected above"),
        ScrollVariant::EnchantArmour => scroll_enchant_armour(state, scroll),
        ScrollVariant::EnchantWeapon => scroll_enchant_weapon(state, scroll),
        ScrollVariant::Blank => {
            result.consumed = false;
            state.log.add("This scroll is blank.");
            true
        }
        ScrollVariant::CreateMonster => scroll_create_monster(state),
        ScrollVariant::CreateArtifact => scroll_create_artifact(state, scroll),
        ScrollVariant::TimeWarp => scroll_timewarp(state, scroll),
        ScrollVariant::Teleport => scroll_teleport(state),
        ScrollVariant::HealMonster => scroll_heal_monster(state),
        ScrollVariant::Mapping => {
            state.log.add("There is a map on the scroll!");
            scroll_mapping(state, Some(scroll))
        }
        ScrollVariant::GemPerfection => scroll_gem_perfection(state, ui, scroll),
        ScrollVariant::SpellExtension => scroll_spell_extension(state, scroll),
        ScrollVariant::Identify => scroll_identify(state, ui, scroll),
        ScrollVariant::RemoveCurse => scroll_remove_curse(state, ui, scroll),
        ScrollVariant::Annihilation => scroll_annihilate(state, scroll),
        ScrollVariant::Pulverization => {
            first_identification(state, scroll);
            scroll_pulverize(state, ui);
            true
        }
        ScrollVariant::GenocideMonster => {
            scroll_genocide_monster(state, ui, scroll);
            true
        }
        ScrollVariant::Enlightenment
        | ScrollVariant::AggravateMonster
        | ScrollVariant::Awareness
        | ScrollVariant::Speed
        | ScrollVariant::SpiritProtection
        | ScrollVariant::UndeadProtection
        | ScrollVariant::Stealth
        | ScrollVariant::HoldMonster
        | ScrollVariant::LifeProtection => scroll_with_effect(state, variant, scroll),
    };

    if !result.identified {
        state.log.add("Nothing happens.");
    }

    tracing::debug!(
        consumed = result.consumed,
        identified = result.identified,
        "scroll resolved"
    );
    result
}

/// Read the scroll at `index` in the player's pack.
///
/// Learns the scroll type when identified and removes one scroll from the
/// stack when consumed. Returns `None` if there is no scroll at `index`.
pub fn read_scroll_from_inventory(
    state: &mut GameState,
    ui: &mut dyn Interface,
    index: usize,
) -> Option<ConsumeResult> {
    let scroll = state
        .player
        .inventory
        .get(index)
        .filter(|item| item.kind == ItemKind::Scroll && item.variant != ScrollVariant::None as u8)
        .cloned()?;

    let result = read_scroll(state, ui, &scroll);

    if result.identified {
        state.player.discoveries.learn(ItemKind::Scroll, scroll.variant);
    }

    if result.consumed {
        // handlers may have reordered or removed items
        if let Some(pos) = state.player.inventory.iter().position(|i| i.id == scroll.id) {
            let stack = &mut state.player.inventory[pos];
            if stack.count > 1 {
                stack.count -= 1;
            } else {
                state.player.inventory.remove(pos);
            }
        }
    }

    Some(result)
}

/// Scrolls that grant a status effect
fn scroll_with_effect(state: &mut GameState, variant: ScrollVariant, scroll: &Item) -> bool {
    let Some(kind) = variant.effect() else {
        return false;
    };

    let mut effect = TimedEffect::new(kind, state.turn);
    if scroll.blessed {
        effect.turns = if kind == StatusEffectKind::LifeProtection {
            0
        } else {
            effect.turns.saturating_mul(2)
        };
    }

    match state.player.effects.add(effect) {
        EffectAdded::New => match kind.start_message() {
            Some(msg) => {
                state.log.add(msg);
                true
            }
            None => false,
        },
        EffectAdded::Extended => true,
    }
}

/// Summon a monster next to the player
fn scroll_create_monster(state: &mut GameState) -> bool {
    let pos = state.player.pos;
    let level = &state.levels[pos.z as usize];

    let mut free: Vec<(i32, i32)> = (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (pos.x + dx, pos.y + dy)))
        .filter(|&(x, y)| (x, y) != (pos.x, pos.y) && level.is_free(x, y))
        .collect();
    let kinds: Vec<MonsterType> = MonsterType::candidates_for_depth(pos.z)
        .filter(|t| !state.monster_vitals.is_genocided(*t))
        .collect();

    state.rng.shuffle(&mut free);
    let (Some(&(x, y)), Some(&kind)) = (free.first(), state.rng.choose(&kinds)) else {
        return false;
    };

    let id = state.new_monster_id();
    state.current_level_mut().monsters.push(Monster::new(id, kind, x, y));
    tracing::debug!(monster = kind.name(), x, y, "monster created");
    true
}

/// Move the player to a random level
fn scroll_teleport(state: &mut GameState) -> bool {
    let z = state.player.pos.z;
    let target = if z == 0 {
        0
    } else if z < MAP_DMAX {
        state.rng.rn2(u32::from(MAP_DMAX)) as u8
    } else {
        state.rng.rand_m_n(i32::from(MAP_DMAX), i32::from(MAP_MAX)) as u8
    };

    if target == z {
        return false;
    }
    state.enter_level(target);
    true
}

/// Fully heal every hurt monster on the player's level
fn scroll_heal_monster(state: &mut GameState) -> bool {
    let healed = state
        .current_level_mut()
        .monsters
        .iter_mut()
        .filter(|m| m.is_alive())
        .map(Monster::heal_full)
        .filter(|healed| *healed)
        .count();

    if healed > 0 {
        state.log.add("You feel uneasy.");
    }
    healed > 0
}

/// Double the value of one gem, or of every gem when blessed
fn scroll_gem_perfection(state: &mut GameState, ui: &mut dyn Interface, scroll: &Item) -> bool {
    let gems: Vec<usize> = state
        .player
        .inventory
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_gem())
        .map(|(idx, _)| idx)
        .collect();
    if gems.is_empty() {
        return false;
    }

    state.log.add("This is a scroll of gem perfection.");

    if scroll.blessed {
        for idx in gems {
            let gem = &mut state.player.inventory[idx];
            gem.bonus = gem.bonus.saturating_mul(2);
        }
        state.log.add("You bring all your gems to perfection.");
        return true;
    }

    let candidates: Vec<&Item> = gems.iter().map(|&i| &state.player.inventory[i]).collect();
    let choice = ui
        .choose_item("Choose a gem to make perfect", &candidates)
        .and_then(|c| gems.get(c).copied());

    if let Some(idx) = choice {
        let desc = describe(&state.player.inventory[idx], true, &state.codebook);
        state.log.add(format!("You make {desc} perfect."));
        let gem = &mut state.player.inventory[idx];
        gem.bonus = gem.bonus.saturating_mul(2);
    }

    true
}

/// Improve every known spell
fn scroll_spell_extension(state: &mut GameState, scroll: &Item) -> bool {
    if state.player.known_spells.is_empty() {
        return false;
    }

    for spell in &mut state.player.known_spells {
        spell.knowledge = if scroll.blessed {
            spell.knowledge.saturating_mul(2)
        } else {
            spell.knowledge.saturating_add(1)
        };
    }

    state.log.add("You feel your magic skills improve.");
    true
}

/// Vaporize rock next to the player; returns whether anything was destroyed
fn scroll_pulverize(state: &mut GameState, ui: &mut dyn Interface) -> bool {
    let Some(dir) = ui.choose_direction("In which direction?") else {
        return false;
    };
    let (dx, dy) = dir.offset();
    let target = state.player.pos.offset(dx, dy);
    let level = &mut state.levels[target.z as usize];

    let vaporized = if level.tile_at(target.x, target.y).is_rock() {
        let tile = level.tile_at(target.x, target.y);
        level.set_tile(target.x, target.y, Tile::Floor);
        tile.to_string()
    } else if level.sobject_at(target.x, target.y) == SObject::Statue {
        level.set_sobject(target.x, target.y, SObject::None);
        SObject::Statue.to_string()
    } else {
        return false;
    };

    if let Some(cell) = state.player.memory[target.z as usize].get_mut(target.x, target.y) {
        cell.tile = level.tile_at(target.x, target.y);
        cell.sobject = level.sobject_at(target.x, target.y);
    }
    state.log.add(format!("You vaporize the {vaporized}."));
    true
}
