//! Scroll of annihilation

use crate::dungeon::Area;
use crate::object::Item;
use crate::GameState;

/// Blast every monster near the player.
///
/// Demons caught in the blast take massive damage; everything else loses
/// half its hit points. Returns whether anything was killed.
pub fn scroll_annihilate(state: &mut GameState, _scroll: &Item) -> bool {
    let radius = state.options.annihilation_radius;
    let demon_damage = state.options.annihilation_demon_damage;
    let (px, py) = (state.player.pos.x, state.player.pos.y);

    let z = state.player.pos.z as usize;
    let level = &mut state.levels[z];
    let obstacles = level.obstacles(px, py, radius);
    let blast = Area::circle_flooded(px, py, radius, &obstacles);

    let mut killed = 0u32;
    for (x, y) in blast.positions() {
        let Some(idx) = level.monster_index_at(x, y) else {
            continue;
        };
        let monster = &mut level.monsters[idx];
        if monster.kind.is_demon() {
            if monster.take_damage(demon_damage) {
                killed += 1;
            }
        } else {
            state
                .log
                .add(format!("The {} barely escapes being annihilated.", monster.name()));
            let half = monster.hp / 2;
            monster.take_damage(half);
        }
    }

    level.remove_dead_monsters();
    state.player.stats.monsters_killed += killed;

    tracing::debug!(killed, area = blast.count(), "annihilation");

    if killed > 0 {
        state.log.add("You hear loud screams of agony!");
    }

    killed > 0
}
