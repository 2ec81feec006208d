//! Level-scaled abilities.
//!
//! Each ability maps a level to a short, ordered list of stats. Stats are
//! linear in the level. An ability without a `mana_cost` stat is free to use.

use std::fmt;

use smallvec::SmallVec;

use super::{write_banner, Report};
use crate::config::AbilityConfig;
use crate::records::Player;

/// A stat an ability can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Damage,
    Healing,
    Defense,
    ManaCost,
    Duration,
}

impl StatKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatKind::Damage => "damage",
            StatKind::Healing => "healing",
            StatKind::Defense => "defense",
            StatKind::ManaCost => "mana_cost",
            StatKind::Duration => "duration",
        }
    }
}

/// Stats for one ability at one level, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityStats(SmallVec<[(StatKind, i64); 4]>);

impl AbilityStats {
    /// Look up a stat.
    #[must_use]
    pub fn get(&self, kind: StatKind) -> Option<i64> {
        self.0.iter().find(|(k, _)| *k == kind).map(|&(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i64)> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<(StatKind, i64)> for AbilityStats {
    fn from_iter<I: IntoIterator<Item = (StatKind, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for AbilityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (kind, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {value}", kind.as_str())?;
        }
        Ok(())
    }
}

/// The ability catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ability {
    Fireball,
    Heal,
    Shield,
    Lightning,
}

impl Ability {
    /// Every ability in catalogue order.
    pub const ALL: [Ability; 4] = [
        Ability::Fireball,
        Ability::Heal,
        Ability::Shield,
        Ability::Lightning,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Ability::Fireball => "fireball",
            Ability::Heal => "heal",
            Ability::Shield => "shield",
            Ability::Lightning => "lightning",
        }
    }

    /// Capitalized name for headings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Ability::Fireball => "Fireball",
            Ability::Heal => "Heal",
            Ability::Shield => "Shield",
            Ability::Lightning => "Lightning",
        }
    }

    /// Stats at `level`.
    ///
    /// ```
    /// use game_utility::demos::{Ability, StatKind};
    ///
    /// let fireball = Ability::Fireball.stats(3);
    /// assert_eq!(fireball.get(StatKind::Damage), Some(35));
    /// assert_eq!(fireball.get(StatKind::ManaCost), Some(16));
    /// assert_eq!(Ability::Shield.stats(3).get(StatKind::Duration), Some(3));
    /// ```
    #[must_use]
    pub fn stats(self, level: u32) -> AbilityStats {
        let l = i64::from(level);
        let stats: [(StatKind, i64); 2] = match self {
            Ability::Fireball => [(StatKind::Damage, 20 + l * 5), (StatKind::ManaCost, 10 + l * 2)],
            Ability::Heal => [(StatKind::Healing, 15 + l * 5), (StatKind::ManaCost, 15 + l * 3)],
            Ability::Shield => [(StatKind::Defense, 10 + l * 3), (StatKind::Duration, 2 + l / 2)],
            Ability::Lightning => [(StatKind::Damage, 15 + l * 7), (StatKind::ManaCost, 20 + l * 4)],
        };
        stats.into_iter().collect()
    }

    /// Mana needed at `level`. Zero for abilities with no mana cost.
    #[must_use]
    pub fn mana_cost(self, level: u32) -> i64 {
        self.stats(level).get(StatKind::ManaCost).unwrap_or(0)
    }
}

/// Whether `player` has enough mana for `ability` at `level`.
pub fn can_use(player: &Player, ability: Ability, level: u32) -> bool {
    i64::from(player.mana) >= ability.mana_cost(level)
}

/// Usability of one ability for the test player.
#[derive(Clone, Debug, PartialEq)]
pub struct UsabilityCheck {
    pub ability: Ability,
    pub cost: i64,
    pub usable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AbilityReport {
    /// Per ability, the stats at each configured level.
    pub tables: Vec<(Ability, Vec<(u32, AbilityStats)>)>,
    pub check_level: u32,
    pub player: Player,
    pub checks: Vec<UsabilityCheck>,
}

pub fn ability_system(config: &AbilityConfig) -> AbilityReport {
    tracing::debug!(levels = ?config.levels, check_level = config.check_level, "ability system");

    let tables = Ability::ALL
        .into_iter()
        .map(|ability| {
            let rows = config
                .levels
                .iter()
                .map(|&level| (level, ability.stats(level)))
                .collect();
            (ability, rows)
        })
        .collect();

    let checks = Ability::ALL
        .into_iter()
        .map(|ability| UsabilityCheck {
            ability,
            cost: ability.mana_cost(config.check_level),
            usable: can_use(&config.test_player, ability, config.check_level),
        })
        .collect();

    AbilityReport {
        tables,
        check_level: config.check_level,
        player: config.test_player.clone(),
        checks,
    }
}

impl Report for AbilityReport {
    fn title(&self) -> &'static str {
        "ABILITY SYSTEM"
    }
}

impl fmt::Display for AbilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, self.title())?;

        for (ability, rows) in &self.tables {
            writeln!(f, "\n{} ability stats:", ability.title())?;
            for (level, stats) in rows {
                writeln!(f, "  Level {level}: {stats}")?;
            }
        }

        writeln!(
            f,
            "\nAbility usage test for {} with {} mana:",
            self.player.name, self.player.mana
        )?;
        for check in &self.checks {
            writeln!(
                f,
                "  Can use {} (level {}, cost {}): {}",
                check.ability.name(),
                self.check_level,
                check.cost,
                check.usable
            )?;
        }
        Ok(())
    }
}
