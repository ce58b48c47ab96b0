//! Magic mapping

use crate::object::Item;
use crate::dungeon::Tile;
use crate::{GameState, MAP_MAX_X, MAP_MAX_Y};

/// Copy the current level into the player's memory.
///
/// With a scroll, floor tiles are left as they were remembered and traps are
/// revealed only by a blessed one. Without a scroll every tile is copied.
pub fn scroll_mapping(state: &mut GameState, scroll: Option<&Item>) -> bool {
    let z = state.player.pos.z as usize;
    let level = &state.levels[z];
    let memory = &mut state.player.memory[z];
    let map_traps = scroll.is_some_and(|s| s.blessed);

    for y in 0..MAP_MAX_Y as i32 {
        for x in 0..MAP_MAX_X as i32 {
            let Some(cell) = memory.get_mut(x, y) else {
                continue;
            };
            let tile = level.tile_at(x, y);
            if scroll.is_none() || tile != Tile::Floor {
                cell.tile = tile;
            }
            cell.sobject = level.sobject_at(x, y);

            if map_traps && let Some(trap) = level.trap_at(x, y) {
                cell.trap = Some(trap);
            }
        }
    }

    true
}

/// Reveal the whole current level without a scroll
pub fn reveal_level(state: &mut GameState) {
    scroll_mapping(state, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{SObject, TrapKind};
    use crate::magic::scroll_data::ScrollVariant;
    use crate::object::{ItemId, ItemKind};

    fn state_with_features() -> GameState {
        let mut state = GameState::new(2);
        let level = state.current_level_mut();
        level.set_sobject(5, 5, SObject::Altar);
        level.set_trap(6, 5, Some(TrapKind::Pit));
        state
    }

    fn mapping_scroll() -> Item {
        Item::new(ItemId(1), ItemKind::Scroll, ScrollVariant::Mapping as u8)
    }

    #[test]
    fn test_reveal_level_copies_floor() {
        let mut state = state_with_features();
        reveal_level(&mut state);
        let memory = &state.player.memory[0];
        assert_eq!(memory.get(5, 5).tile, Tile::Floor);
        assert_eq!(memory.get(0, 0).tile, Tile::Wall);
        assert_eq!(memory.get(5, 5).sobject, SObject::Altar);
        assert_eq!(memory.get(6, 5).trap, None);
    }

    #[test]
    fn test_unblessed_scroll_skips_floor_and_traps() {
        let mut state = state_with_features();
        scroll_mapping(&mut state, Some(&mapping_scroll()));
        let memory = &state.player.memory[0];
        assert_eq!(memory.get(5, 5).tile, Tile::Unknown);
        assert_eq!(memory.get(0, 0).tile, Tile::Wall);
        assert_eq!(memory.get(5, 5).sobject, SObject::Altar);
        assert_eq!(memory.get(6, 5).trap, None);
    }

    #[test]
    fn test_blessed_scroll_reveals_traps() {
        let mut state = state_with_features();
        scroll_mapping(&mut state, Some(&mapping_scroll().blessed()));
        assert_eq!(state.player.memory[0].get(6, 5).trap, Some(TrapKind::Pit));
    }

    #[test]
    fn test_maps_only_current_level() {
        let mut state = state_with_features();
        reveal_level(&mut state);
        assert_eq!(state.player.memory[1].known_tiles(), 0);
    }
}
