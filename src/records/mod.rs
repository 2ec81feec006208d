//! Typed game records: players, entities, inventory items and positions.
//!
//! Records are plain values. Derived metrics are methods computed on demand
//! and never stored back. Untyped JSON records are converted through
//! [`FromRecord`], which rejects malformed records instead of guessing.

pub mod entity;
pub mod item;
pub mod player;
pub mod raw;

pub use entity::{Entity, EntityKind, Position};
pub use item::{InventoryItem, ItemKind, Rarity};
pub use player::Player;
pub use raw::{validate_records, FromRecord, Rejection, Validated};
