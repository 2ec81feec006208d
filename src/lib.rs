//! # game-utility
//!
//! Closure-driven transformations over small game data collections.
//!
//! ## Design Principles
//!
//! 1. **Fresh Data**: Sample collections come from factory functions. Each
//!    call builds new values. There is no shared global state.
//!
//! 2. **Named Formulas**: Every game formula (effective health, damage, XP
//!    curve, ...) is a named pure function over typed records.
//!
//! 3. **Validate, Then Compute**: Untyped records pass through
//!    [`records::FromRecord`]. Malformed records are skipped and reported.
//!    The demonstrations only ever see well-formed values.
//!
//! ## Modules
//!
//! - `records`: Players, entities, inventory items, positions, validation
//! - `data`: Sample providers and dataset loading
//! - `config`: Demonstration parameters
//! - `demos`: The seven demonstrations and their reports
//! - `runner`: Sequencing and output
//! - `error`: Error types

pub mod config;
pub mod data;
pub mod demos;
pub mod error;
pub mod records;
pub mod runner;

// Re-export commonly used types
pub use crate::config::{AbilityConfig, CombatConfig, DemoConfig, FilterConfig, LevelConfig};
pub use crate::data::Dataset;
pub use crate::demos::{DemoKind, Report};
pub use crate::error::{ConfigError, DataError, Error, RecordError};
pub use crate::records::{
    Entity, EntityKind, FromRecord, InventoryItem, ItemKind, Player, Position, Rarity,
};
pub use crate::runner::run;
