//! The seven demonstrations.
//!
//! Each demonstration is a pure function. It borrows its inputs and returns
//! a report. A report renders through `Display`, starting with its section
//! banner, so an empty input still prints the banner and sub-headers.
//!
//! | Demo | Function | Operations |
//! |------|----------|------------|
//! | players | [`player_transformations`] | map |
//! | entities | [`entity_filtering`] | filter |
//! | inventory | [`item_sorting`] | stable sort, filter + sort |
//! | calculations | [`game_calculations`] | pairwise map, sum |
//! | abilities | [`ability_system`] | level-parameterized formulas |
//! | combat | [`combat_system`] | filter + map |
//! | levels | [`level_system`] | map over level ranges |

use std::fmt;

pub mod abilities;
pub mod calculations;
pub mod combat;
pub mod entities;
pub mod inventory;
pub mod levels;
pub mod players;

pub use abilities::{ability_system, can_use, Ability, AbilityReport, AbilityStats, StatKind, UsabilityCheck};
pub use calculations::{
    damage, damage_matrix, game_calculations, movement_speed, path_legs, CalculationReport,
    DamageRow, Leg,
};
pub use combat::{combat_system, hit_chance, ranged_damage, xp_reward, CombatReport, Engagement};
pub use entities::{active_of_kind, active_within, entity_filtering, EntityReport};
pub use inventory::{
    equipped_by_value, item_sorting, sort_by_rarity, sort_by_type_then_value, sort_by_value,
    InventoryReport,
};
pub use levels::{level_system, projected_stats, xp_required, LevelReport, Progression, StatLine};
pub use players::{player_transformations, PlayerMetrics, PlayerReport};

/// Names a demonstration. Declaration order is the canonical run order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum DemoKind {
    Players,
    Entities,
    Inventory,
    Calculations,
    Abilities,
    Combat,
    Levels,
}

impl DemoKind {
    /// Every demonstration in canonical order.
    pub const ALL: [DemoKind; 7] = [
        DemoKind::Players,
        DemoKind::Entities,
        DemoKind::Inventory,
        DemoKind::Calculations,
        DemoKind::Abilities,
        DemoKind::Combat,
        DemoKind::Levels,
    ];
}

/// A rendered demonstration section.
pub trait Report: fmt::Display {
    /// Section banner text.
    fn title(&self) -> &'static str;
}

/// Write the `===== TITLE =====` banner preceded by a blank line.
pub(crate) fn write_banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "===== {title} =====")
}
