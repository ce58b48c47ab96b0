//! Game state shared by all item effects

use serde::{Deserialize, Serialize};

use crate::dungeon::Level;
use crate::magic::genocide::MonsterVitals;
use crate::magic::scroll_data::FlavorCodebook;
use crate::monster::MonsterId;
use crate::object::{Item, ItemId};
use crate::player::{Player, Position};
use crate::rng::GameRng;
use crate::{MAP_MAX, MAP_MAX_X, MAP_MAX_Y, ScrollOptions};

/// Messages shown to the player, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::trace!(message = %text, "log entry");
        self.entries.push(text);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Was a message containing `needle` logged?
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.contains(needle))
    }

    /// How many messages equal `text` exactly
    pub fn count(&self, text: &str) -> usize {
        self.entries.iter().filter(|e| *e == text).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything an item effect may read or change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,

    /// Every level, indexed by depth
    pub levels: Vec<Level>,

    /// Game clock
    pub turn: u64,

    /// Scroll flavor names for this game
    pub codebook: FlavorCodebook,

    /// Genocided monster types
    pub monster_vitals: MonsterVitals,

    /// Random number generator
    pub rng: GameRng,

    pub options: ScrollOptions,

    #[serde(skip)]
    pub log: MessageLog,

    next_item_id: ItemId,
    next_monster_id: MonsterId,
}

impl GameState {
    /// A new game with default options
    pub fn new(seed: u64) -> Self {
        Self::with_options(seed, ScrollOptions::default())
    }

    pub fn with_options(seed: u64, options: ScrollOptions) -> Self {
        let mut rng = GameRng::new(seed);
        let codebook = FlavorCodebook::new(&mut rng);
        let mut player = Player::default();
        player.pos = Position::new(MAP_MAX_X as i32 / 2, MAP_MAX_Y as i32 / 2, 0);

        Self {
            player,
            levels: (0..MAP_MAX).map(Level::new).collect(),
            turn: 1,
            codebook,
            monster_vitals: MonsterVitals::new(),
            rng,
            options,
            log: MessageLog::new(),
            next_item_id: ItemId(1),
            next_monster_id: MonsterId(1),
        }
    }

    pub fn new_item_id(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id = id.next();
        id
    }

    pub fn new_monster_id(&mut self) -> MonsterId {
        let id = self.next_monster_id;
        self.next_monster_id = id.next();
        id
    }

    /// Level the player is on
    pub fn current_level(&self) -> &Level {
        &self.levels[self.player.pos.z as usize]
    }

    pub fn current_level_mut(&mut self) -> &mut Level {
        let z = self.player.pos.z as usize;
        &mut self.levels[z]
    }

    /// Add an item to the player's inventory, assigning a fresh id
    pub fn give_item(&mut self, mut item: Item) -> ItemId {
        item.id = self.new_item_id();
        let id = item.id;
        self.player.inventory.push(item);
        id
    }

    /// Move the player to a random free position on another level
    pub fn enter_level(&mut self, depth: u8) {
        let depth = depth.min(MAP_MAX - 1);
        let (x, y) = self.random_free_position(depth);
        tracing::debug!(from = self.player.pos.z, to = depth, "entering level");
        self.player.pos = Position::new(x, y, depth);
    }

    fn random_free_position(&mut self, depth: u8) -> (i32, i32) {
        let level = &self.levels[depth as usize];
        for _ in 0..100 {
            let x = self.rng.rn2(MAP_MAX_X as u32) as i32;
            let y = self.rng.rn2(MAP_MAX_Y as u32) as i32;
            if level.is_free(x, y) {
                return (x, y);
            }
        }
        (0..MAP_MAX_Y as i32)
            .flat_map(|y| (0..MAP_MAX_X as i32).map(move |x| (x, y)))
            .find(|&(x, y)| level.is_free(x, y))
            .unwrap_or((1, 1))
    }
}
