//! Scroll of time warp
//!
//! Moves the game clock by a random number of turns and brings the player's
//! timed effects in line with the new clock.

use crate::object::Item;
use crate::rng::GameRng;
use crate::{GameState, ScrollOptions};

/// Roll the clock shift for a time warp.
///
/// The result lies in `[-bias, roll - bias)` and is never 0. Blessed scrolls
/// take the lowest of three rolls.
pub fn roll_turns(rng: &mut GameRng, blessed: bool, options: &ScrollOptions) -> i64 {
    let mut roll = || i64::from(rng.rn2(options.time_warp_roll)) - options.time_warp_bias;

    let mut turns = roll();
    if blessed {
        turns = turns.min(roll()).min(roll());
    }

    if turns == 0 { 1 } else { turns }
}

/// Keep the clock from going below zero: a shift that would land before turn
/// 0 lands on turn 1 instead.
pub fn clamp_to_clock(turns: i64, clock: u64) -> i64 {
    let clock = i64::try_from(clock).unwrap_or(i64::MAX);
    if clock.saturating_add(turns) < 0 {
        1 - clock
    } else {
        turns
    }
}

/// Whole mobuls in a turn count, rounded away from zero
pub fn turns_to_mobuls(turns: i64, turns_per_mobul: i64) -> i64 {
    let per = turns_per_mobul.max(1);
    let mobuls = (turns.unsigned_abs() + per.unsigned_abs() - 1) / per.unsigned_abs();
    let mobuls = i64::try_from(mobuls).unwrap_or(i64::MAX);
    if turns < 0 { -mobuls } else { mobuls }
}

/// Shift the game clock by `turns` and reconcile the player's effects.
///
/// Returns false, leaving the clock alone, when the shift amounts to no
/// whole mobul.
pub fn warp_time(state: &mut GameState, turns: i64) -> bool {
    let turns = clamp_to_clock(turns, state.turn);
    let mobuls = turns_to_mobuls(turns, state.options.turns_per_mobul);
    if mobuls == 0 {
        return false;
    }

    let clock = i64::try_from(state.turn).unwrap_or(i64::MAX);
    state.turn = u64::try_from(clock.saturating_add(turns)).unwrap_or(0);

    let count = mobuls.unsigned_abs();
    state.log.add(format!(
        "You go {}ward in time by {} mobul{}.",
        if mobuls < 0 { "back" } else { "for" },
        count,
        if count == 1 { "" } else { "s" }
    ));

    let dropped = state.player.effects.time_warp(turns, state.turn);
    tracing::debug!(turns, clock = state.turn, dropped = dropped.len(), "time warp");
    for effect in dropped {
        tracing::trace!(effect = %effect.kind, start = effect.start, "effect lost in time warp");
    }

    true
}

/// Scroll of time warp
pub fn scroll_timewarp(state: &mut GameState, scroll: &Item) -> bool {
    let turns = roll_turns(&mut state.rng, scroll.blessed, &state.options);
    warp_time(state, turns)
}
