//! Front end seam
//!
//! Everything that needs the player's input goes through [`Interface`]. Every
//! method may be cancelled; cancellation is reported as `false` / `None`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::object::Item;

/// The eight compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Map offset for one step in this direction
    pub const fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Interactive services provided by the front end
pub trait Interface {
    /// Spend `cost` turns on an action. Returns false if the player
    /// interrupted a cancellable action.
    fn spend_turn(&mut self, cost: u32, cancellable: bool, description: &str) -> bool;

    /// Let the player pick one of `candidates`. Returns the index into the slice.
    fn choose_item(&mut self, prompt: &str, candidates: &[&Item]) -> Option<usize>;

    /// Ask for a single character
    fn choose_letter(&mut self, prompt: &str) -> Option<char>;

    /// Let the player pick one line of `options`
    fn choose_from_list(&mut self, prompt: &str, options: &[String]) -> Option<usize>;

    /// Ask for a direction
    fn choose_direction(&mut self, prompt: &str) -> Option<Direction>;
}
