//! Timed status effects on the player
//!
//! An effect's `turns` counts the remaining duration, 0 meaning permanent.
//! `start` is the game turn at which it was acquired.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Kinds of status effects
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum StatusEffectKind {
    AggravateMonster,
    Awareness,
    Blindness,
    Confusion,
    Enlightenment,
    HoldMonster,
    LifeProtection,
    Poison,
    Speed,
    SpiritProtection,
    Stealth,
    UndeadProtection,
}

impl StatusEffectKind {
    /// Default duration when the effect is acquired
    pub const fn base_duration(&self) -> u32 {
        match self {
            StatusEffectKind::AggravateMonster => 800,
            StatusEffectKind::Awareness => 250,
            StatusEffectKind::Blindness => 250,
            StatusEffectKind::Confusion => 10,
            StatusEffectKind::Enlightenment => 250,
            StatusEffectKind::HoldMonster => 30,
            StatusEffectKind::LifeProtection => 500,
            StatusEffectKind::Poison => 100,
            StatusEffectKind::Speed => 250,
            StatusEffectKind::SpiritProtection => 250,
            StatusEffectKind::Stealth => 250,
            StatusEffectKind::UndeadProtection => 250,
        }
    }

    /// Message shown when the effect starts; effects without one go unnoticed
    pub const fn start_message(&self) -> Option<&'static str> {
        match self {
            StatusEffectKind::AggravateMonster => Some("You sense anger."),
            StatusEffectKind::Awareness => Some("You become more aware of your surroundings."),
            StatusEffectKind::Blindness => Some("You have been blinded!"),
            StatusEffectKind::Confusion => Some("You become confused."),
            StatusEffectKind::Enlightenment => Some("You have been granted enlightenment!"),
            StatusEffectKind::HoldMonster => None,
            StatusEffectKind::LifeProtection => Some("You have a feeling of reassurance."),
            StatusEffectKind::Poison => Some("You feel poison running through your veins."),
            StatusEffectKind::Speed => Some("You are now moving quickly."),
            StatusEffectKind::SpiritProtection => Some("You feel safe from ghosts."),
            StatusEffectKind::Stealth => Some("You start to move stealthily."),
            StatusEffectKind::UndeadProtection => Some("You feel safe from undead."),
        }
    }
}

/// An active effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEffect {
    pub kind: StatusEffectKind,
    /// Remaining turns, 0 = permanent
    pub turns: u32,
    /// Game turn the effect was acquired
    pub start: u64,
}

impl TimedEffect {
    /// A new effect with its base duration, starting now
    pub fn new(kind: StatusEffectKind, now: u64) -> Self {
        Self {
            kind,
            turns: kind.base_duration(),
            start: now,
        }
    }

    pub fn with_turns(mut self, turns: u32) -> Self {
        self.turns = turns;
        self
    }

    pub const fn is_permanent(&self) -> bool {
        self.turns == 0
    }
}

/// Outcome of adding an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectAdded {
    /// A new entry was created
    New,
    /// An existing entry of the same kind absorbed the new one
    Extended,
}

/// The player's active effects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectList {
    effects: Vec<TimedEffect>,
}

impl EffectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect, merging it into an existing one of the same kind
    pub fn add(&mut self, effect: TimedEffect) -> EffectAdded {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            if !existing.is_permanent() {
                existing.turns = if effect.is_permanent() {
                    0
                } else {
                    existing.turns.saturating_add(effect.turns)
                };
            }
            return EffectAdded::Extended;
        }
        self.effects.push(effect);
        EffectAdded::New
    }

    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn get(&self, kind: StatusEffectKind) -> Option<&TimedEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimedEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Count down one turn, dropping effects that run out
    pub fn tick(&mut self) -> Vec<StatusEffectKind> {
        let mut expired = Vec::new();
        self.effects.retain_mut(|e| {
            if e.is_permanent() {
                return true;
            }
            e.turns -= 1;
            if e.turns == 0 {
                expired.push(e.kind);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Reconcile remaining durations after the game clock moved by `delta`
    /// turns and now reads `now`.
    ///
    /// Permanent effects are untouched. Going forward, effects with fewer
    /// remaining turns than `delta` are dropped and the rest shortened. Going
    /// backward, effects that start after `now` are dropped and the rest
    /// lengthened. Returns the dropped effects.
    ///
    /// An effect with exactly `delta` turns left ends at 0 and so becomes
    /// permanent.
    pub fn time_warp(&mut self, delta: i64, now: u64) -> Vec<TimedEffect> {
        let mut dropped = Vec::new();
        let shift = delta.unsigned_abs();

        self.effects.retain_mut(|e| {
            if e.is_permanent() {
                return true;
            }

            let keep = if delta > 0 {
                if u64::from(e.turns) < shift {
                    false
                } else {
                    // shift <= turns, so this fits
                    e.turns -= shift as u32;
                    true
                }
            } else if delta < 0 {
                if e.start > now {
                    false
                } else {
                    e.turns = u32::try_from(u64::from(e.turns) + shift).unwrap_or(u32::MAX);
                    true
                }
            } else {
                true
            };

            if !keep {
                dropped.push(*e);
            }
            keep
        });

        dropped
    }
}
