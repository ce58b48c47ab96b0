//! Genocide of monster species
//!
//! A genocided monster type is gone for the rest of the game: living
//! instances are purged from every level and the type is never generated
//! again.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::scroll::first_identification;
use crate::monster::MonsterType;
use crate::object::Item;
use crate::player::DeathCause;
use crate::ui::Interface;
use crate::GameState;

/// Game-wide record of extinct monster types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterVitals {
    genocided: HashSet<MonsterType>,
}

impl MonsterVitals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_genocided(&self, kind: MonsterType) -> bool {
        self.genocided.contains(&kind)
    }

    /// Mark a type extinct; returns false if it already was
    pub fn mark_genocided(&mut self, kind: MonsterType) -> bool {
        self.genocided.insert(kind)
    }

    pub fn num_genocides(&self) -> usize {
        self.genocided.len()
    }
}

/// Types that a genocide of `glyph` could target, in table order
pub fn genocide_candidates(vitals: &MonsterVitals, glyph: char, limit: usize) -> Vec<MonsterType> {
    MonsterType::all()
        .filter(|t| t.glyph() == glyph && !vitals.is_genocided(*t))
        .take(limit)
        .collect()
}

/// Wipe out a monster type. Returns the number of living monsters removed.
///
/// Genociding town people kills the player.
pub fn do_genocide(state: &mut GameState, kind: MonsterType) -> usize {
    state.monster_vitals.mark_genocided(kind);

    let mut removed = 0;
    for level in &mut state.levels {
        let before = level.monsters.len();
        level.monsters.retain(|m| m.kind != kind);
        removed += before - level.monsters.len();
    }

    state.log.add(format!("Wiped out all {}.", kind.plural()));
    tracing::debug!(monster = kind.name(), removed, "genocide");

    if kind == MonsterType::TOWN_PERSON {
        state.player.die(DeathCause::Genocide);
    }

    removed
}

/// Scroll of genocide monster
///
/// Returns whether a type was wiped out. The scroll is identified either way.
pub fn scroll_genocide_monster(
    state: &mut GameState,
    ui: &mut dyn Interface,
    scroll: &Item,
) -> bool {
    first_identification(state, scroll);

    let Some(glyph) = ui.choose_letter("Which monster do you want to genocide (type letter)?")
    else {
        state.log.add("You chose not to genocide any monster.");
        return false;
    };

    let candidates =
        genocide_candidates(&state.monster_vitals, glyph, state.options.genocide_candidates);

    let which = match candidates.as_slice() {
        [] => {
            state.log.add("No such monster.");
            return false;
        }
        [only] => *only,
        [first, ..] if !scroll.blessed => *first,
        _ => {
            let names: Vec<String> = candidates.iter().map(|t| t.name().to_string()).collect();
            match ui
                .choose_from_list("Genocide which monster?", &names)
                .and_then(|i| candidates.get(i))
            {
                Some(kind) => *kind,
                None => {
                    state.log.add("You chose not to genocide any monster.");
                    return false;
                }
            }
        }
    };

    do_genocide(state, which);
    true
}
