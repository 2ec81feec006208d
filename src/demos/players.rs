//! Per-player derived metrics.

use std::fmt;

use super::{write_banner, Report};
use crate::records::Player;

/// Derived metrics for one player.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerMetrics {
    pub name: String,
    pub effective_health: u64,
    pub mana_regen: f64,
    pub normalized_score: Option<f64>,
    pub power_index: f64,
}

impl PlayerMetrics {
    pub fn of(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            effective_health: player.effective_health(),
            mana_regen: player.mana_regen(),
            normalized_score: player.normalized_score(),
            power_index: player.power_index(),
        }
    }
}

/// Metrics for every player, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerReport {
    pub metrics: Vec<PlayerMetrics>,
}

/// Map every player to its derived metrics.
pub fn player_transformations(players: &[Player]) -> PlayerReport {
    tracing::debug!(players = players.len(), "player transformations");
    PlayerReport {
        metrics: players.iter().map(PlayerMetrics::of).collect(),
    }
}

impl Report for PlayerReport {
    fn title(&self) -> &'static str {
        "PLAYER TRANSFORMATIONS"
    }
}

impl fmt::Display for PlayerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, self.title())?;

        writeln!(f, "Player effective health:")?;
        for m in &self.metrics {
            writeln!(f, "  {}: {}", m.name, m.effective_health)?;
        }

        writeln!(f, "\nPlayer mana regeneration:")?;
        for m in &self.metrics {
            writeln!(f, "  {}: {:.1} per turn", m.name, m.mana_regen)?;
        }

        writeln!(f, "\nPlayer normalized scores:")?;
        for m in &self.metrics {
            match m.normalized_score {
                Some(score) => writeln!(f, "  {}: {score:.1}", m.name)?,
                None => writeln!(f, "  {}: n/a (level 0)", m.name)?,
            }
        }

        writeln!(f, "\nPlayer power index:")?;
        for m in &self.metrics {
            writeln!(f, "  {}: {:.1}", m.name, m.power_index)?;
        }
        Ok(())
    }
}
