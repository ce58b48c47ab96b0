//! Scroll reading behavioral tests
//!
//! Covers the shared reading rules (blindness, curses, blank paper) and the
//! blessed/unblessed policy of the individual scrolls.

mod common;

use common::{TestUi, make_scroll};
use nl_core::GameState;
use nl_core::magic::{ConsumeResult, ScrollVariant, read_scroll, read_scroll_from_inventory};
use nl_core::monster::{Monster, MonsterType};
use nl_core::object::{Item, ItemId, ItemKind};
use nl_core::player::{DeathCause, StatusEffectKind, TimedEffect};

// ============================================================================
// Helpers
// ============================================================================

fn blind(state: &mut GameState) {
    state
        .player
        .effects
        .add(TimedEffect::new(StatusEffectKind::Blindness, state.turn));
}

fn wear_armour(state: &mut GameState, bonus: i32) -> ItemId {
    let id = state.give_item(
        Item::new(ItemId::NONE, ItemKind::Armour, 0)
            .with_name("plate mail")
            .with_bonus(bonus),
    );
    state.player.eq_armour.push(id);
    id
}

fn snapshot(state: &GameState) -> String {
    serde_json::to_string(&state.player).unwrap_or_default()
}

// ============================================================================
// Shared reading rules
// ============================================================================

#[test]
fn test_blind_player_cannot_read_any_scroll() {
    for variant in ScrollVariant::readable() {
        let mut state = GameState::new(5);
        blind(&mut state);
        let before = snapshot(&state);
        let mut ui = TestUi::new();

        let result = read_scroll(&mut state, &mut ui, &make_scroll(variant));

        assert_eq!(result, ConsumeResult::default(), "{variant}");
        assert_eq!(snapshot(&state), before, "{variant}");
        assert_eq!(ui.turns, 0);
        assert_eq!(state.log.len(), 1);
        assert!(state.log.contains("As you are blind you can't read"));
    }
}

#[test]
fn test_known_cursed_scroll_is_refused() {
    for variant in ScrollVariant::readable() {
        let mut state = GameState::new(5);
        let mut scroll = make_scroll(variant).cursed();
        scroll.blessed_known = true;
        let mut ui = TestUi::new();

        let result = read_scroll(&mut state, &mut ui, &scroll);

        assert_eq!(result, ConsumeResult::default(), "{variant}");
        assert_eq!(state.player.stats.scrolls_read, 0);
        assert_eq!(state.log.last(), Some("You'd rather not read this cursed scroll."));
    }
}

#[test]
fn test_unknown_cursed_scroll_explodes() {
    for variant in ScrollVariant::readable() {
        let mut state = GameState::new(u64::from(variant as u8));
        let hp = state.player.hp;
        let mut ui = TestUi::new();

        let result = read_scroll(&mut state, &mut ui, &make_scroll(variant).cursed());

        assert_eq!(result, ConsumeResult { consumed: true, identified: false }, "{variant}");
        assert!(state.player.hp < hp);
        assert!(state.player.hp >= 1);
        assert!(state.log.contains("The scroll explodes!"));
        assert!(!state.log.contains("Nothing happens."));
        assert!(state.player.effects.is_empty());
    }
}

#[test]
fn test_cursed_explosion_can_kill() {
    let mut state = GameState::new(1);
    state.player.hp = 2;
    let mut ui = TestUi::new();
    read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::Identify).cursed());
    assert_eq!(state.player.hp, 1);

    // rand_1n(1) always deals 1
    read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::Identify).cursed());
    assert_eq!(state.player.death, Some(DeathCause::Curse));
}

#[test]
fn test_blank_scroll_never_consumed() {
    for blessed in [false, true] {
        let mut state = GameState::new(2);
        let mut scroll = make_scroll(ScrollVariant::Blank);
        scroll.blessed = blessed;
        let mut ui = TestUi::new();

        let result = read_scroll(&mut state, &mut ui, &scroll);

        assert_eq!(result, ConsumeResult { consumed: false, identified: true });
        assert_eq!(ui.turns, 2);
    }
}

#[test]
fn test_noop_logs_nothing_happens_once() {
    let mut state = GameState::new(2);
    let mut ui = TestUi::new();

    let result = read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::RemoveCurse));

    assert_eq!(result, ConsumeResult { consumed: true, identified: false });
    assert_eq!(state.log.count("Nothing happens."), 1);
}

#[test]
fn test_unknown_scroll_read_message_uses_flavor() {
    let mut state = GameState::new(8);
    let flavor = state.codebook.flavor(ScrollVariant::Stealth);
    let mut ui = TestUi::new();

    read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::Stealth));

    assert_eq!(
        state.log.entries()[0],
        format!("You read a scroll labeled \"{flavor}\".")
    );
}

// ============================================================================
// Enchantment
// ============================================================================

#[test]
fn test_blessed_enchant_armour_never_above_three() {
    for seed in 0..25 {
        let mut state = GameState::new(seed);
        let id = wear_armour(&mut state, 0);
        let scroll = make_scroll(ScrollVariant::EnchantArmour).blessed();
        let mut ui = TestUi::new();
        for _ in 0..6 {
            read_scroll(&mut state, &mut ui, &scroll);
            let bonus = state.player.item(id).map(|i| i.bonus);
            assert!(bonus.is_some_and(|b| b <= 3));
        }
    }
}

#[test]
fn test_unblessed_enchant_armour_unbounded() {
    let mut state = GameState::new(3);
    let id = wear_armour(&mut state, 3);
    let mut ui = TestUi::new();
    for _ in 0..4 {
        read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::EnchantArmour));
    }
    assert_eq!(state.player.item(id).map(|i| i.bonus), Some(7));
}

#[test]
fn test_enchant_armour_without_armour_is_noop() {
    let mut state = GameState::new(3);
    let mut ui = TestUi::new();
    let result = read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::EnchantArmour));
    assert!(!result.identified);
    assert_eq!(state.log.last(), Some("Nothing happens."));
}

// ============================================================================
// Remove curse / identify
// ============================================================================

#[test]
fn test_remove_curse_on_clean_item_still_identifies() {
    let mut state = GameState::new(4);
    state.give_item(Item::new(ItemId::NONE, ItemKind::Ring, 1).cursed());
    state.give_item(Item::new(ItemId::NONE, ItemKind::Ring, 2));
    let mut ui = TestUi::new();
    ui.items.push_back(1);

    let result = read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::RemoveCurse));

    assert_eq!(result, ConsumeResult { consumed: true, identified: true });
    assert!(state.player.inventory[0].cursed);
    assert!(!state.player.inventory[1].cursed);
    assert_eq!(state.log.count("Nothing happens."), 1);
}

#[test]
fn test_identify_with_nothing_unknown() {
    let mut state = GameState::new(4);
    let mut gem = Item::new(ItemId::NONE, ItemKind::Gem, 0);
    gem.blessed_known = true;
    state.give_item(gem);
    let mut ui = TestUi::new();

    let result = read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::Identify));

    assert!(!result.identified);
    assert_eq!(state.log.count("Nothing happens."), 1);
}

#[test]
fn test_identify_from_pack_identifies_itself() {
    let mut state = GameState::new(4);
    state.give_item(make_scroll(ScrollVariant::Identify));
    let mut ui = TestUi::new();

    let result = read_scroll_from_inventory(&mut state, &mut ui, 0);

    assert_eq!(result, Some(ConsumeResult { consumed: true, identified: true }));
    assert!(state.player.inventory.is_empty());
    assert!(state
        .player
        .discoveries
        .is_known(ItemKind::Scroll, ScrollVariant::Identify as u8));
}

// ============================================================================
// Genocide
// ============================================================================

#[test]
fn test_genocide_town_person_kills_player() {
    for blessed in [false, true] {
        let mut state = GameState::new(6);
        let mut scroll = make_scroll(ScrollVariant::GenocideMonster);
        scroll.blessed = blessed;
        let mut ui = TestUi::new();
        ui.letters.push_back('@');

        let result = read_scroll(&mut state, &mut ui, &scroll);

        assert!(result.identified);
        assert!(state.player.is_dead());
        assert_eq!(state.player.death, Some(DeathCause::Genocide));
        assert!(state.monster_vitals.is_genocided(MonsterType::TOWN_PERSON));
    }
}

#[test]
fn test_genocide_other_kind_spares_player() {
    let mut state = GameState::new(6);
    let id = state.new_monster_id();
    state
        .current_level_mut()
        .monsters
        .push(Monster::new(id, MonsterType::ORC, 10, 5));
    let mut ui = TestUi::new();
    ui.letters.push_back('O');

    let result = read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::GenocideMonster));

    assert!(result.identified);
    assert!(!state.player.is_dead());
    assert!(state.current_level().monsters.is_empty());
}

#[test]
fn test_genocide_cancel_still_identified() {
    let mut state = GameState::new(6);
    let mut ui = TestUi::new();

    let result = read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::GenocideMonster));

    assert_eq!(result, ConsumeResult { consumed: true, identified: true });
    assert!(state.log.contains("You chose not to genocide any monster."));
    assert!(!state.log.contains("Nothing happens."));
}

// ============================================================================
// Time warp
// ============================================================================

#[test]
fn test_time_warp_keeps_clock_positive() {
    for seed in 0..200 {
        let mut state = GameState::new(seed);
        state.turn = 30;
        let mut ui = TestUi::new();
        let scroll = make_scroll(ScrollVariant::TimeWarp).blessed();

        let result = read_scroll(&mut state, &mut ui, &scroll);

        assert!(state.turn >= 1);
        if !result.identified {
            assert_eq!(state.turn, 30);
        }
    }
}

#[test]
fn test_time_warp_identified_iff_clock_moved() {
    for seed in 0..100 {
        let mut state = GameState::new(seed);
        state.turn = 5000;
        let mut ui = TestUi::new();

        let result = read_scroll(&mut state, &mut ui, &make_scroll(ScrollVariant::TimeWarp));

        assert_eq!(result.identified, state.turn != 5000);
        assert!(state.log.contains("in time by"));
    }
}
