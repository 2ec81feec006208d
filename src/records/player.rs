//! Player records and their derived metrics.
//!
//! A player stores only its base stats. Effective health, mana regeneration,
//! normalized score, power index and attack power are all computed from
//! those fields on demand.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{Fields, FromRecord};
use crate::error::RecordError;

/// A player's base stats.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub mana: u32,
    pub score: u32,
}

impl Player {
    /// Create a new player.
    pub fn new(name: impl Into<String>, level: u32, health: u32, mana: u32, score: u32) -> Self {
        Self {
            name: name.into(),
            level,
            health,
            mana,
            score,
        }
    }

    /// Health plus ten per level.
    ///
    /// ```
    /// use game_utility::records::Player;
    ///
    /// let wizard = Player::new("Wizard1", 5, 80, 100, 2500);
    /// assert_eq!(wizard.effective_health(), 130);
    /// ```
    #[must_use]
    pub fn effective_health(&self) -> u64 {
        u64::from(self.health) + u64::from(self.level) * 10
    }

    /// Mana regained per turn.
    #[must_use]
    pub fn mana_regen(&self) -> f64 {
        f64::from(self.mana) * 0.1 * f64::from(self.level)
    }

    /// Score per level. `None` for a level 0 player.
    #[must_use]
    pub fn normalized_score(&self) -> Option<f64> {
        (self.level != 0).then(|| f64::from(self.score) / f64::from(self.level))
    }

    /// `(health * 0.5 + mana * 0.3) * level`.
    #[must_use]
    pub fn power_index(&self) -> f64 {
        (f64::from(self.health) * 0.5 + f64::from(self.mana) * 0.3) * f64::from(self.level)
    }

    /// Raw offensive output before any defence or falloff: `level * 5 + mana * 0.2`.
    #[must_use]
    pub fn attack_power(&self) -> f64 {
        f64::from(self.level) * 5.0 + f64::from(self.mana) * 0.2
    }
}

impl FromRecord for Player {
    const COLLECTION: &'static str = "players";

    fn from_value(value: &Value) -> Result<Self, RecordError> {
        let fields = Fields::of(value)?;
        Ok(Self {
            name: fields.text("name")?,
            level: fields.uint("level")?,
            health: fields.uint("health")?,
            mana: fields.uint("mana")?,
            score: fields.uint("score")?,
        })
    }
}
