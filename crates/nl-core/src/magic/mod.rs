//! Magic items: scrolls and their effects

pub mod annihilation;
pub mod creation;
pub mod enchantment;
pub mod genocide;
pub mod identification;
pub mod mapping;
pub mod scroll;
pub mod scroll_data;
pub mod timewarp;

pub use genocide::MonsterVitals;
pub use mapping::reveal_level;
pub use scroll::{ConsumeResult, read_scroll, read_scroll_from_inventory};
pub use scroll_data::{FlavorCodebook, SCROLLS, ScrollMetadata, ScrollVariant};
