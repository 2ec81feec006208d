//! One-shot combat preview for the lead player.

use std::fmt;

use super::{write_banner, Report};
use crate::config::CombatConfig;
use crate::records::{Entity, EntityKind, Player};

/// Chance to hit, as a percentage clamped to `0..=100`.
pub fn hit_chance(distance: f64) -> f64 {
    (100.0 - distance * 0.5).clamp(0.0, 100.0)
}

/// Attack power scaled down linearly with distance, never below 1.
pub fn ranged_damage(attacker: &Player, distance: f64, attack_range: f64) -> f64 {
    (attacker.attack_power() * (1.0 - distance / attack_range)).max(1.0)
}

/// XP for defeating an enemy at `distance`.
pub fn xp_reward(distance: f64) -> f64 {
    50.0 - distance * 0.2
}

/// Projected outcome of attacking one enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct Engagement<'a> {
    pub enemy: &'a Entity,
    pub distance: f64,
    pub hit_chance: f64,
    pub damage: f64,
    pub xp_reward: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CombatReport<'a> {
    /// The first player, if there is one.
    pub attacker: Option<&'a Player>,
    pub attack_range: f64,
    pub engagements: Vec<Engagement<'a>>,
}

/// Preview attacks by the first player on every active enemy in range.
pub fn combat_system<'a>(
    players: &'a [Player],
    entities: &'a [Entity],
    config: &CombatConfig,
) -> CombatReport<'a> {
    tracing::debug!(players = players.len(), entities = entities.len(), "combat system");

    let Some(attacker) = players.first() else {
        return CombatReport {
            attacker: None,
            attack_range: config.attack_range,
            engagements: Vec::new(),
        };
    };

    let engagements = entities
        .iter()
        .filter(|e| e.is_active_kind(EntityKind::Enemy))
        .map(|e| (e, e.distance_to(config.reference)))
        .filter(|&(_, distance)| distance <= config.attack_range)
        .map(|(enemy, distance)| Engagement {
            enemy,
            distance,
            hit_chance: hit_chance(distance),
            damage: ranged_damage(attacker, distance, config.attack_range),
            xp_reward: xp_reward(distance),
        })
        .collect();

    CombatReport {
        attacker: Some(attacker),
        attack_range: config.attack_range,
        engagements,
    }
}

impl Report for CombatReport<'_> {
    fn title(&self) -> &'static str {
        "COMBAT SYSTEM"
    }
}

impl fmt::Display for CombatReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, self.title())?;

        let Some(attacker) = self.attacker else {
            return writeln!(f, "No players available to attack.");
        };

        writeln!(
            f,
            "Enemies in attack range ({} units) of {}:",
            self.attack_range, attacker.name
        )?;
        for e in &self.engagements {
            writeln!(f, "  {} at distance {:.1}", e.enemy.id, e.distance)?;
        }

        writeln!(f, "\nSimulated combat results:")?;
        for e in &self.engagements {
            writeln!(f, "  Attack on {}:", e.enemy.id)?;
            writeln!(f, "    Distance: {:.1} units", e.distance)?;
            writeln!(f, "    Hit chance: {:.1}%", e.hit_chance)?;
            writeln!(f, "    Potential damage: {:.1}", e.damage)?;
            writeln!(f, "    XP reward: {:.1}", e.xp_reward)?;
        }
        Ok(())
    }
}
