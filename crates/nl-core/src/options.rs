//! Rule options for item effects
//!
//! All values default to the standard game rules. A front end may load a JSON
//! file to override individual fields; anything missing keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Could not read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables consulted by the scroll handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollOptions {
    /// Turns spent reading a scroll
    pub reading_cost: u32,
    /// Blessed enchantment never raises a bonus beyond this
    pub blessed_enchant_cap: i32,
    /// Radius of the annihilation blast
    pub annihilation_radius: i32,
    /// Damage dealt to demons caught in the blast
    pub annihilation_demon_damage: i32,
    /// Maximum number of same-glyph genocide candidates
    pub genocide_candidates: usize,
    /// Game turns in one mobul
    pub turns_per_mobul: i64,
    /// Upper bound (exclusive) of the time warp roll
    pub time_warp_roll: u32,
    /// Subtracted from the time warp roll; larger values favour the past
    pub time_warp_bias: i64,
    /// Unblessed identify picks up to `identify_picks - 1` extra items
    pub identify_picks: i32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            reading_cost: 2,
            blessed_enchant_cap: 3,
            annihilation_radius: 2,
            annihilation_demon_damage: 2000,
            genocide_candidates: 10,
            turns_per_mobul: 100,
            time_warp_roll: 1000,
            time_warp_bias: 850,
            identify_picks: 4,
        }
    }
}

impl ScrollOptions {
    /// Load options from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a JSON string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(contents)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values the handlers cannot work with
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.turns_per_mobul <= 0 {
            return Err(OptionsError::Invalid {
                field: "turns_per_mobul",
                reason: format!("must be positive, got {}", self.turns_per_mobul),
            });
        }
        if self.time_warp_roll == 0 {
            return Err(OptionsError::Invalid {
                field: "time_warp_roll",
                reason: "must be positive".to_string(),
            });
        }
        if self.genocide_candidates == 0 {
            return Err(OptionsError::Invalid {
                field: "genocide_candidates",
                reason: "must allow at least one candidate".to_string(),
            });
        }
        if self.annihilation_radius < 0 {
            return Err(OptionsError::Invalid {
                field: "annihilation_radius",
                reason: format!("must not be negative, got {}", self.annihilation_radius),
            });
        }
        Ok(())
    }
}
