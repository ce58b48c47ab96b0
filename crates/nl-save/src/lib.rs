//! nl-save: Save/restore for the Larn-style roguelike core
//!
//! Games are stored as JSON with a small versioned header. The flavor
//! codebook travels with the game so scroll labels stay stable across
//! restores.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use nl_core::GameState;

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found")]
    NotFound,

    #[error("Save file corrupted: {0}")]
    Corrupted(String),

    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid save file header")]
    InvalidHeader,
}

/// Save file header for versioning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Magic identifier
    pub magic: String,
    /// Save format version
    pub version: u32,
    pub player_name: String,
    /// Game clock at save time
    pub turn: u64,
    /// Level the player was on
    pub depth: u8,
    /// Seconds since the epoch
    pub timestamp: u64,
}

impl SaveHeader {
    const MAGIC: &'static str = "NLRS";

    pub fn new(state: &GameState) -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: SAVE_VERSION,
            player_name: state.player.name.clone(),
            turn: state.turn,
            depth: state.player.pos.z,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SaveFileRef<'a> {
    header: SaveHeader,
    state: &'a GameState,
}

/// Complete save file structure
#[derive(Deserialize)]
pub struct SaveFile {
    pub header: SaveHeader,
    pub state: GameState,
}

#[derive(Deserialize)]
struct HeaderOnly {
    header: SaveHeader,
}

/// Reject restored state the game cannot run with
fn check_state(state: &GameState) -> Result<(), SaveError> {
    if !state.codebook.is_valid() {
        return Err(SaveError::Corrupted("scroll flavor table".to_string()));
    }
    if state.levels.len() != usize::from(nl_core::MAP_MAX) {
        return Err(SaveError::Corrupted(format!(
            "expected {} levels, found {}",
            nl_core::MAP_MAX,
            state.levels.len()
        )));
    }
    if let Some(depth) = state.levels.iter().position(|level| !level.is_complete()) {
        return Err(SaveError::Corrupted(format!("level {depth} map is truncated")));
    }
    if state.player.memory.len() != state.levels.len() {
        return Err(SaveError::Corrupted(format!(
            "expected map memory for {} levels, found {}",
            state.levels.len(),
            state.player.memory.len()
        )));
    }
    if let Some(depth) = state.player.memory.iter().position(|memory| !memory.is_complete()) {
        return Err(SaveError::Corrupted(format!("map memory of level {depth} is truncated")));
    }
    if usize::from(state.player.pos.z) >= state.levels.len() {
        return Err(SaveError::Corrupted("player outside the dungeon".to_string()));
    }
    state
        .options
        .validate()
        .map_err(|e| SaveError::Corrupted(e.to_string()))
}

/// Serialize a game to a JSON string
pub fn save_to_string(state: &GameState) -> Result<String, SaveError> {
    let save_file = SaveFileRef {
        header: SaveHeader::new(state),
        state,
    };
    Ok(serde_json::to_string(&save_file)?)
}

/// Restore a game from a JSON string
pub fn load_from_str(json: &str) -> Result<GameState, SaveError> {
    let save_file: SaveFile = serde_json::from_str(json)?;
    save_file.header.validate()?;
    check_state(&save_file.state)?;
    Ok(save_file.state)
}

/// Save game state to a file
pub fn save_game(state: &GameState, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let save_file = SaveFileRef {
        header: SaveHeader::new(state),
        state,
    };

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, &save_file)?;
    tracing::debug!(path = %path.display(), turn = state.turn, "game saved");
    Ok(())
}

/// Load game state from a file
pub fn load_game(path: impl AsRef<Path>) -> Result<GameState, SaveError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| SaveError::NotFound)?;
    let reader = BufReader::new(file);
    let save_file: SaveFile = serde_json::from_reader(reader)?;

    save_file.header.validate()?;
    check_state(&save_file.state)?;
    tracing::debug!(path = %path.display(), turn = save_file.state.turn, "game loaded");
    Ok(save_file.state)
}

/// Load only the header from a save file
pub fn load_header(path: impl AsRef<Path>) -> Result<SaveHeader, SaveError> {
    let file = File::open(path).map_err(|_| SaveError::NotFound)?;
    let reader = BufReader::new(file);
    let save: HeaderOnly = serde_json::from_reader(reader)?;
    save.header.validate()?;
    Ok(save.header)
}

/// Check if a save file exists
pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Delete a save file
pub fn delete_save(path: impl AsRef<Path>) -> Result<(), SaveError> {
    std::fs::remove_file(path)?;
    Ok(())
}
