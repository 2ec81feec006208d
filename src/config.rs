//! Demonstration configuration.
//!
//! Every parameter the demonstrations use lives here with its default.
//! A config file only needs the fields it overrides. Missing fields and
//! sections fall back to `Default`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::records::{Player, Position};

/// Parameters for the entity filtering demonstration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Position distances are measured from.
    pub reference: Position,

    /// Entities strictly closer than this are "nearby".
    pub nearby_radius: f64,

    /// Quadrant filter: enemies must have x strictly above this.
    pub quadrant_min_x: f64,

    /// Quadrant filter: enemies must have y strictly above this.
    pub quadrant_min_y: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            reference: Position::new(100.0, 100.0),
            nearby_radius: 100.0,
            quadrant_min_x: 150.0,
            quadrant_min_y: 200.0,
        }
    }
}

/// Parameters for the combat demonstration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Where the attacking player stands.
    pub reference: Position,

    /// Enemies at or within this distance can be attacked.
    pub attack_range: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            reference: Position::new(100.0, 100.0),
            attack_range: 150.0,
        }
    }
}

/// Parameters for the ability demonstration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityConfig {
    /// Ability levels to tabulate.
    pub levels: Vec<u32>,

    /// Ability level used for the usability check.
    pub check_level: u32,

    /// Player whose mana is checked against ability costs.
    pub test_player: Player,
}

impl Default for AbilityConfig {
    fn default() -> Self {
        Self {
            levels: vec![1, 3, 5],
            check_level: 3,
            test_player: Player::new("TestWizard", 4, 70, 50, 0),
        }
    }
}

/// Parameters for the level demonstration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// The XP table covers levels `1..=xp_table_max`.
    pub xp_table_max: u32,

    /// How many levels beyond the current one to project stats for.
    pub projection_levels: u32,
}

impl LevelConfig {
    /// Largest accepted `xp_table_max`.
    pub const MAX_XP_TABLE_LEVEL: u32 = 100;

    /// Largest accepted `projection_levels`.
    pub const MAX_PROJECTION_LEVELS: u32 = 100;

    /// Reject table sizes above the limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("xp_table_max", self.xp_table_max, Self::MAX_XP_TABLE_LEVEL),
            ("projection_levels", self.projection_levels, Self::MAX_PROJECTION_LEVELS),
        ];
        for (field, value, max) in checks {
            if value > max {
                return Err(ConfigError::OutOfRange { field, value, max });
            }
        }
        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            xp_table_max: 10,
            projection_levels: 3,
        }
    }
}

/// Complete demonstration configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub filter: FilterConfig,
    pub combat: CombatConfig,
    pub abilities: AbilityConfig,
    pub levels: LevelConfig,
}

impl DemoConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.levels.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Use a different reference position for both filtering and combat.
    #[must_use]
    pub fn with_reference(mut self, reference: Position) -> Self {
        self.filter.reference = reference;
        self.combat.reference = reference;
        self
    }

    /// Use a different attack range.
    #[must_use]
    pub fn with_attack_range(mut self, range: f64) -> Self {
        self.combat.attack_range = range;
        self
    }

    /// Use a different test player for the ability check.
    #[must_use]
    pub fn with_test_player(mut self, player: Player) -> Self {
        self.abilities.test_player = player;
        self
    }

    /// Use a different number of projected levels.
    #[must_use]
    pub fn with_projection_levels(mut self, levels: u32) -> Self {
        self.levels.projection_levels = levels;
        self
    }
}
