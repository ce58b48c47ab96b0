//! Test doubles

use std::collections::VecDeque;

use crate::object::Item;
use crate::ui::{Direction, Interface};

/// An [`Interface`] that answers prompts from prepared queues.
///
/// Prompts without a queued answer are cancelled.
#[derive(Debug, Default)]
pub struct ScriptedInterface {
    items: VecDeque<usize>,
    letters: VecDeque<char>,
    lists: VecDeque<usize>,
    directions: VecDeque<Direction>,
    interrupt: bool,
    prompts: Vec<String>,
    pub turns_spent: u32,
}

impl ScriptedInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, index: usize) -> Self {
        self.items.push_back(index);
        self
    }

    pub fn letter(mut self, letter: char) -> Self {
        self.letters.push_back(letter);
        self
    }

    pub fn list(mut self, index: usize) -> Self {
        self.lists.push_back(index);
        self
    }

    pub fn direction(mut self, dir: Direction) -> Self {
        self.directions.push_back(dir);
        self
    }

    /// Interrupt the next cancellable action
    pub fn interrupted(mut self) -> Self {
        self.interrupt = true;
        self
    }

    /// Every prompt shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Interface for ScriptedInterface {
    fn spend_turn(&mut self, cost: u32, cancellable: bool, _description: &str) -> bool {
        if cancellable && self.interrupt {
            self.interrupt = false;
            return false;
        }
        self.turns_spent += cost;
        true
    }

    fn choose_item(&mut self, prompt: &str, candidates: &[&Item]) -> Option<usize> {
        self.prompts.push(prompt.to_string());
        self.items.pop_front().filter(|&i| i < candidates.len())
    }

    fn choose_letter(&mut self, prompt: &str) -> Option<char> {
        self.prompts.push(prompt.to_string());
        self.letters.pop_front()
    }

    fn choose_from_list(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        self.prompts.push(prompt.to_string());
        self.lists.pop_front().filter(|&i| i < options.len())
    }

    fn choose_direction(&mut self, prompt: &str) -> Option<Direction> {
        self.prompts.push(prompt.to_string());
        self.directions.pop_front()
    }
}
