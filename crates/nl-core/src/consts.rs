//! Core game constants
//!
//! Map geometry and dungeon layout shared by every module.

/// Map dimensions
pub const MAP_MAX_X: usize = 67;
pub const MAP_MAX_Y: usize = 17;

/// Number of levels in the main dungeon (level 0 is the town)
pub const MAP_DMAX: u8 = 11;

/// Number of volcano levels below the dungeon
pub const MAP_VMAX: u8 = 3;

/// Total number of levels
pub const MAP_MAX: u8 = MAP_DMAX + MAP_VMAX;

/// Highest bonus a worn armour piece can be enchanted to
pub const ARMOUR_MAX_BONUS: i32 = 10;
