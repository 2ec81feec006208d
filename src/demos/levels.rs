//! XP curve and stat projection.
//!
//! Each level adds 10 health and 5 mana. A player's base stats are their
//! current stats minus that growth, so projecting to level `L` is
//! `base + L * growth`.

use std::fmt;

use super::{write_banner, Report};
use crate::config::LevelConfig;
use crate::records::Player;

const HEALTH_PER_LEVEL: i64 = 10;
const MANA_PER_LEVEL: i64 = 5;

/// XP needed to advance from `level` to the next: `100 * level^1.5`.
///
/// ```
/// use game_utility::demos::xp_required;
///
/// assert_eq!(xp_required(1), 100.0);
/// assert_eq!(xp_required(4), 800.0);
/// ```
pub fn xp_required(level: u32) -> f64 {
    100.0 * f64::from(level).powf(1.5)
}

/// Health and mana at a given level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatLine {
    pub level: u32,
    pub health: i64,
    pub mana: i64,
}

/// Stats `player` would have at `level`.
pub fn projected_stats(player: &Player, level: u32) -> StatLine {
    let current = i64::from(player.level);
    let target = i64::from(level);
    StatLine {
        level,
        health: i64::from(player.health) + (target - current) * HEALTH_PER_LEVEL,
        mana: i64::from(player.mana) + (target - current) * MANA_PER_LEVEL,
    }
}

/// A player's projection over the next few levels.
#[derive(Clone, Debug, PartialEq)]
pub struct Progression<'a> {
    pub player: &'a Player,
    pub projections: Vec<StatLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelReport<'a> {
    /// `(level, xp to next level)` rows.
    pub xp_table: Vec<(u32, f64)>,
    pub progressions: Vec<Progression<'a>>,
}

pub fn level_system<'a>(players: &'a [Player], config: &LevelConfig) -> LevelReport<'a> {
    tracing::debug!(players = players.len(), "level system");

    let table_max = config.xp_table_max.min(LevelConfig::MAX_XP_TABLE_LEVEL);
    let steps = config
        .projection_levels
        .min(LevelConfig::MAX_PROJECTION_LEVELS);

    let xp_table = (1..=table_max)
        .map(|level| (level, xp_required(level)))
        .collect();

    let progressions = players
        .iter()
        .map(|player| Progression {
            player,
            projections: (1..=steps)
                .filter_map(|step| player.level.checked_add(step))
                .map(|level| projected_stats(player, level))
                .collect(),
        })
        .collect();

    LevelReport {
        xp_table,
        progressions,
    }
}

impl Report for LevelReport<'_> {
    fn title(&self) -> &'static str {
        "LEVEL SYSTEM"
    }
}

impl fmt::Display for LevelReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, self.title())?;

        writeln!(f, "XP required for next level:")?;
        for (level, xp) in &self.xp_table {
            writeln!(f, "  Level {level} -> {}: {xp:.0} XP", level.saturating_add(1))?;
        }

        writeln!(f, "\nStat progression for players:")?;
        for progression in &self.progressions {
            let p = progression.player;
            writeln!(f, "\n  {} (currently level {}):", p.name, p.level)?;
            writeln!(f, "    Current stats: Health={}, Mana={}", p.health, p.mana)?;
            for line in &progression.projections {
                writeln!(
                    f,
                    "    At level {}: Health={}, Mana={}",
                    line.level, line.health, line.mana
                )?;
            }
        }
        Ok(())
    }
}
