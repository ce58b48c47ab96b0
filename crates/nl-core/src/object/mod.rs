//! Items: instances, type tables and naming

pub mod catalog;
mod obj;
pub mod objname;

pub use obj::{Item, ItemDamage, ItemId, ItemKind};
