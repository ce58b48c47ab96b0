//! Shared helpers for integration tests

use std::collections::VecDeque;

use nl_core::magic::ScrollVariant;
use nl_core::object::{Item, ItemId, ItemKind};
use nl_core::ui::{Direction, Interface};

/// Front end that picks queued items and glyphs and cancels every other prompt
#[derive(Debug, Default)]
pub struct TestUi {
    pub items: VecDeque<usize>,
    pub letters: VecDeque<char>,
    pub turns: u32,
}

impl TestUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Interface for TestUi {
    fn spend_turn(&mut self, cost: u32, _cancellable: bool, _description: &str) -> bool {
        self.turns += cost;
        true
    }

    fn choose_item(&mut self, _prompt: &str, candidates: &[&Item]) -> Option<usize> {
        self.items.pop_front().filter(|&i| i < candidates.len())
    }

    fn choose_letter(&mut self, _prompt: &str) -> Option<char> {
        self.letters.pop_front()
    }

    fn choose_from_list(&mut self, _prompt: &str, _options: &[String]) -> Option<usize> {
        None
    }

    fn choose_direction(&mut self, _prompt: &str) -> Option<Direction> {
        None
    }
}

pub fn make_scroll(variant: ScrollVariant) -> Item {
    Item::new(ItemId(700), ItemKind::Scroll, variant as u8)
}
