//! Monster templates

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Monster flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MonsterFlags: u16 {
        const FLY = 0x0001;
        const UNDEAD = 0x0002;
        const DEMON = 0x0004;
        const DRAGON = 0x0008;
        const INVISIBLE = 0x0010;
        /// Lives in the town; never appears in the dungeon
        const TOWNSFOLK = 0x0020;
        /// Never produced by random generation
        const NO_RANDOM = 0x0040;
    }
}

/// Monster template (static data for each monster type)
#[derive(Debug, Clone)]
pub struct PerMonst {
    pub name: &'static str,
    pub plural: &'static str,

    /// Display glyph
    pub glyph: char,

    /// Difficulty level
    pub level: u8,

    /// Hit points of a new instance
    pub hp_max: i32,

    pub flags: MonsterFlags,
}

const fn mon(
    name: &'static str,
    plural: &'static str,
    glyph: char,
    level: u8,
    hp_max: i32,
    flags: MonsterFlags,
) -> PerMonst {
    PerMonst {
        name,
        plural,
        glyph,
        level,
        hp_max,
        flags,
    }
}

const NONE: MonsterFlags = MonsterFlags::empty();
const FLY: MonsterFlags = MonsterFlags::FLY;
const UNDEAD: MonsterFlags = MonsterFlags::UNDEAD;
const DRAGON: MonsterFlags = MonsterFlags::DRAGON;
const DEMON: MonsterFlags = MonsterFlags::DEMON.union(MonsterFlags::NO_RANDOM);

/// All monster templates; indexed by [`MonsterType`]
pub static PERMONST: [PerMonst; 34] = [
    mon("town person", "town people", '@', 1, 5, MonsterFlags::TOWNSFOLK.union(MonsterFlags::NO_RANDOM)),
    mon("giant bat", "giant bats", 'B', 1, 4, FLY),
    mon("gnome", "gnomes", 'G', 1, 6, NONE),
    mon("hobgoblin", "hobgoblins", 'H', 1, 8, NONE),
    mon("jackal", "jackals", 'J', 1, 4, NONE),
    mon("kobold", "kobolds", 'K', 1, 5, NONE),
    mon("orc", "orcs", 'O', 2, 12, NONE),
    mon("snake", "snakes", 'S', 2, 10, NONE),
    mon("giant centipede", "giant centipedes", 'c', 2, 8, NONE),
    mon("floating eye", "floating eyes", 'E', 2, 12, FLY),
    mon("giant ant", "giant ants", 'A', 3, 14, NONE),
    mon("hell hound", "hell hounds", 'h', 3, 22, NONE),
    mon("troglodyte", "troglodytes", 't', 3, 20, NONE),
    mon("giant beetle", "giant beetles", 'b', 4, 25, NONE),
    mon("zombie", "zombies", 'Z', 4, 32, UNDEAD),
    mon("dwarf", "dwarves", 'd', 4, 28, NONE),
    mon("lemming", "lemmings", 'L', 5, 2, NONE),
    mon("gnome king", "gnome kings", 'G', 5, 50, NONE),
    mon("troll", "trolls", 'T', 6, 60, NONE),
    mon("wraith", "wraiths", 'W', 6, 45, UNDEAD),
    mon("vampire", "vampires", 'V', 7, 70, UNDEAD.union(FLY)),
    mon("xorn", "xorns", 'X', 7, 80, NONE),
    mon("white dragon", "white dragons", 'D', 8, 120, DRAGON.union(FLY)),
    mon("bronze dragon", "bronze dragons", 'D', 9, 140, DRAGON.union(FLY)),
    mon("green dragon", "green dragons", 'D', 9, 150, DRAGON.union(FLY)),
    mon("red dragon", "red dragons", 'D', 11, 200, DRAGON.union(FLY)),
    mon("platinum dragon", "platinum dragons", 'D', 12, 250, DRAGON.union(FLY)),
    mon("silver dragon", "silver dragons", 'D', 12, 230, DRAGON.union(FLY)),
    mon("lich", "liches", 'L', 12, 180, UNDEAD),
    mon("type I demon lord", "type I demon lords", '&', 13, 300, DEMON),
    mon("type II demon lord", "type II demon lords", '&', 13, 350, DEMON),
    mon("type III demon lord", "type III demon lords", '&', 14, 400, DEMON),
    mon("demon prince", "demon princes", '&', 15, 800, DEMON),
    mon("God of Hellfire", "Gods of Hellfire", '&', 16, 10_000, DEMON.union(MonsterFlags::INVISIBLE)),
];

/// Index into the template table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterType(pub u8);

impl MonsterType {
    pub const TOWN_PERSON: MonsterType = MonsterType(0);
    pub const GIANT_BAT: MonsterType = MonsterType(1);
    pub const GNOME: MonsterType = MonsterType(2);
    pub const ORC: MonsterType = MonsterType(6);
    pub const ZOMBIE: MonsterType = MonsterType(14);
    pub const WHITE_DRAGON: MonsterType = MonsterType(22);
    pub const DEMON_LORD: MonsterType = MonsterType(29);
    pub const DEMON_PRINCE: MonsterType = MonsterType(32);

    /// Every monster type, in table order
    pub fn all() -> impl Iterator<Item = MonsterType> {
        (0..PERMONST.len() as u8).map(MonsterType)
    }

    /// Template data; out-of-range ids fall back to the first entry
    pub fn data(self) -> &'static PerMonst {
        PERMONST.get(self.0 as usize).unwrap_or(&PERMONST[0])
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    pub fn plural(self) -> &'static str {
        self.data().plural
    }

    pub fn glyph(self) -> char {
        self.data().glyph
    }

    pub fn level(self) -> u8 {
        self.data().level
    }

    pub fn is_demon(self) -> bool {
        self.data().flags.contains(MonsterFlags::DEMON)
    }

    pub fn is_undead(self) -> bool {
        self.data().flags.contains(MonsterFlags::UNDEAD)
    }

    /// Types that may be generated at random on a level of the given depth
    pub fn candidates_for_depth(depth: u8) -> impl Iterator<Item = MonsterType> {
        let max_level = depth / 2 + 2;
        Self::all().filter(move |t| {
            let data = t.data();
            !data.flags.contains(MonsterFlags::NO_RANDOM) && data.level <= max_level
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_constants() {
        assert_eq!(MonsterType::TOWN_PERSON.glyph(), '@');
        assert_eq!(MonsterType::GIANT_BAT.name(), "giant bat");
        assert_eq!(MonsterType::ORC.name(), "orc");
        assert_eq!(MonsterType::ZOMBIE.name(), "zombie");
        assert_eq!(MonsterType::WHITE_DRAGON.name(), "white dragon");
        assert!(MonsterType::DEMON_LORD.is_demon());
        assert!(MonsterType::DEMON_PRINCE.is_demon());
        assert!(!MonsterType::GNOME.is_demon());
    }

    #[test]
    fn test_only_demons_use_ampersand() {
        for t in MonsterType::all() {
            assert_eq!(t.glyph() == '&', t.is_demon(), "{}", t.name());
        }
    }

    #[test]
    fn test_town_person_unique_glyph() {
        assert_eq!(MonsterType::all().filter(|t| t.glyph() == '@').count(), 1);
    }

    #[test]
    fn test_candidates_respect_depth() {
        let shallow: Vec<_> = MonsterType::candidates_for_depth(0).collect();
        assert!(!shallow.is_empty());
        assert!(shallow.iter().all(|t| t.level() <= 2));
        assert!(!shallow.contains(&MonsterType::TOWN_PERSON));

        assert!(MonsterType::candidates_for_depth(13).all(|t| !t.is_demon()));
    }
}
