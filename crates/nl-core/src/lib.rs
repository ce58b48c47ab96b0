//! nl-core: Core item-effect logic for a Larn-style roguelike
//!
//! This crate contains the scroll effect engine and the minimal game state it
//! operates on. It performs no I/O of its own: prompts and turn spending go
//! through the [`ui::Interface`] trait, messages are collected in the
//! [`world::MessageLog`].

pub mod dungeon;
pub mod magic;
pub mod monster;
pub mod object;
pub mod options;
pub mod player;
pub mod ui;
pub mod world;

mod consts;
mod rng;

#[cfg(test)]
pub(crate) mod testing;

pub use consts::*;
pub use options::{OptionsError, ScrollOptions};
pub use rng::GameRng;
pub use world::{GameState, MessageLog};
