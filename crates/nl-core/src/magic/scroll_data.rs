//! Scroll table and per-game flavor names
//!
//! The metadata table is constant for the process. The flavor codebook is
//! rolled once per game and travels with the game state.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoEnumIterator};

use crate::player::StatusEffectKind;
use crate::rng::GameRng;

/// Scroll identities
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
    FromRepr,
)]
#[repr(u8)]
pub enum ScrollVariant {
    None = 0,
    EnchantArmour,
    EnchantWeapon,
    Enlightenment,
    Blank,
    CreateMonster,
    CreateArtifact,
    AggravateMonster,
    TimeWarp,
    Teleport,
    Awareness,
    Speed,
    HealMonster,
    SpiritProtection,
    UndeadProtection,
    Stealth,
    Mapping,
    HoldMonster,
    GemPerfection,
    SpellExtension,
    Identify,
    RemoveCurse,
    Annihilation,
    Pulverization,
    LifeProtection,
    GenocideMonster,
}

/// Static description of a scroll variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetadata {
    pub variant: ScrollVariant,
    pub name: &'static str,
    /// Status effect granted when read
    pub effect: Option<StatusEffectKind>,
    pub price: u32,
    /// May be produced by random generation
    pub obtainable: bool,
}

const fn scroll(
    variant: ScrollVariant,
    name: &'static str,
    effect: Option<StatusEffectKind>,
    price: u32,
    obtainable: bool,
) -> ScrollMetadata {
    ScrollMetadata {
        variant,
        name,
        effect,
        price,
        obtainable,
    }
}

use ScrollVariant as S;
use StatusEffectKind as E;

/// One entry per variant, in discriminant order
pub static SCROLLS: [ScrollMetadata; ScrollVariant::COUNT] = [
    scroll(S::None, "", None, 0, false),
    scroll(S::EnchantArmour, "enchant armour", None, 100, true),
    scroll(S::EnchantWeapon, "enchant weapon", None, 100, true),
    scroll(S::Enlightenment, "enlightenment", Some(E::Enlightenment), 800, true),
    scroll(S::Blank, "blank paper", None, 100, false),
    scroll(S::CreateMonster, "create monster", None, 100, false),
    scroll(S::CreateArtifact, "create artifact", None, 400, false),
    scroll(S::AggravateMonster, "aggravate monsters", Some(E::AggravateMonster), 100, false),
    scroll(S::TimeWarp, "time warp", None, 800, false),
    scroll(S::Teleport, "teleportation", None, 250, true),
    scroll(S::Awareness, "expanded awareness", Some(E::Awareness), 250, true),
    scroll(S::Speed, "speed", Some(E::Speed), 250, false),
    scroll(S::HealMonster, "monster healing", None, 100, false),
    scroll(S::SpiritProtection, "spirit protection", Some(E::SpiritProtection), 400, true),
    scroll(S::UndeadProtection, "undead protection", Some(E::UndeadProtection), 400, true),
    scroll(S::Stealth, "stealth", Some(E::Stealth), 400, true),
    scroll(S::Mapping, "magic mapping", None, 250, true),
    scroll(S::HoldMonster, "hold monsters", Some(E::HoldMonster), 800, false),
    scroll(S::GemPerfection, "gem perfection", None, 3000, false),
    scroll(S::SpellExtension, "spell extension", None, 800, false),
    scroll(S::Identify, "identify", None, 400, true),
    scroll(S::RemoveCurse, "remove curse", None, 250, true),
    scroll(S::Annihilation, "annihilation", None, 3000, false),
    scroll(S::Pulverization, "pulverization", None, 800, true),
    scroll(S::LifeProtection, "life protection", Some(E::LifeProtection), 3000, false),
    scroll(S::GenocideMonster, "genocide monster", None, 3000, false),
];

impl ScrollVariant {
    /// Look up a variant from an item's variant byte
    pub fn from_item_variant(variant: u8) -> Option<Self> {
        Self::from_repr(variant)
    }

    pub fn metadata(self) -> &'static ScrollMetadata {
        &SCROLLS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.metadata().name
    }

    pub fn effect(self) -> Option<StatusEffectKind> {
        self.metadata().effect
    }

    pub fn price(self) -> u32 {
        self.metadata().price
    }

    pub fn obtainable(self) -> bool {
        self.metadata().obtainable
    }

    /// Every variant except the sentinel
    pub fn readable() -> impl Iterator<Item = ScrollVariant> {
        Self::iter().filter(|v| *v != ScrollVariant::None)
    }
}

/// Number of real scroll variants
pub const SCROLL_VARIANTS: usize = ScrollVariant::COUNT - 1;

const FLAVORS: [&str; SCROLL_VARIANTS] = [
    "Ssyliir Wyleeum",
    "Etzak Biqolix",
    "Tzaqa Chanim",
    "Lanaj Lanyesaj",
    "Azayal Ixasich",
    "Assossasda",
    "Sondassasta",
    "Mindim Lanak",
    "Sudecke Chadosia",
    "L'sal Chaj Izjen",
    "Assosiala",
    "Lassostisda",
    "Bloerdadarsya",
    "Chadosia",
    "Iskim Namaj",
    "Chamote Ajaqa",
    "Lirtilsa",
    "Undim Jiskistast",
    "Lirtosiala",
    "Frichassaya",
    "Undast Kabich",
    "Fril Ajich Lsosa",
    "Chados Azil Tzos",
    "Ixos Tzek Ajak",
    "Xodil Keterulo",
];

/// Per-game assignment of flavor names to scroll variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorCodebook {
    /// `mapping[variant - 1]` is an index into the flavor list
    mapping: Vec<u8>,
}

impl FlavorCodebook {
    /// Roll a fresh permutation
    pub fn new(rng: &mut GameRng) -> Self {
        let mut mapping: Vec<u8> = (0..SCROLL_VARIANTS as u8).collect();
        rng.shuffle(&mut mapping);
        Self { mapping }
    }

    /// Identity mapping, for tests and tools
    pub fn identity() -> Self {
        Self {
            mapping: (0..SCROLL_VARIANTS as u8).collect(),
        }
    }

    /// Flavor name shown for an unidentified scroll
    ///
    /// Panics for the sentinel variant.
    pub fn flavor(&self, variant: ScrollVariant) -> &'static str {
        assert!(
            variant != ScrollVariant::None,
            "the sentinel scroll has no flavor"
        );
        FLAVORS[self.mapping[variant as usize - 1] as usize]
    }

    /// Check that the codebook is a permutation (restored saves)
    pub fn is_valid(&self) -> bool {
        if self.mapping.len() != SCROLL_VARIANTS {
            return false;
        }
        let mut seen = [false; SCROLL_VARIANTS];
        for &idx in &self.mapping {
            match seen.get_mut(idx as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl Default for FlavorCodebook {
    fn default() -> Self {
        Self::identity()
    }
}
