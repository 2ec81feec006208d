//! Path geometry and pairwise player formulas.

use std::fmt;

use super::{write_banner, Report};
use crate::records::{Player, Position};

/// One segment of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leg {
    pub from: Position,
    pub to: Position,
    pub distance: f64,
}

/// Damage one player would deal to another.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageRow<'a> {
    pub attacker: &'a Player,
    pub defender: &'a Player,
    pub damage: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalculationReport<'a> {
    pub legs: Vec<Leg>,
    pub total_distance: f64,
    pub damage: Vec<DamageRow<'a>>,
    pub speeds: Vec<(&'a Player, f64)>,
}

/// Segments between consecutive points: `n - 1` legs for `n` points.
///
/// ```
/// use game_utility::demos::path_legs;
/// use game_utility::records::Position;
///
/// let legs = path_legs(&[Position::new(0.0, 0.0), Position::new(3.0, 4.0)]);
/// assert_eq!(legs.len(), 1);
/// assert_eq!(legs[0].distance, 5.0);
/// assert!(path_legs(&[Position::new(1.0, 1.0)]).is_empty());
/// ```
pub fn path_legs(points: &[Position]) -> Vec<Leg> {
    points
        .windows(2)
        .map(|pair| Leg {
            from: pair[0],
            to: pair[1],
            distance: pair[0].distance(pair[1]),
        })
        .collect()
}

/// `max(0, attacker.level * 5 + attacker.mana * 0.2 - defender.level * 2)`.
pub fn damage(attacker: &Player, defender: &Player) -> f64 {
    (attacker.attack_power() - f64::from(defender.level) * 2.0).max(0.0)
}

/// `5 + level * 0.5 - health * 0.01`.
pub fn movement_speed(player: &Player) -> f64 {
    5.0 + f64::from(player.level) * 0.5 - f64::from(player.health) * 0.01
}

/// Damage for every ordered pair of distinct players, attacker-major.
pub fn damage_matrix(players: &[Player]) -> Vec<DamageRow<'_>> {
    players
        .iter()
        .enumerate()
        .flat_map(move |(i, attacker)| {
            players
                .iter()
                .enumerate()
                .filter(move |&(j, _)| j != i)
                .map(move |(_, defender)| DamageRow {
                    attacker,
                    defender,
                    damage: damage(attacker, defender),
                })
        })
        .collect()
}

pub fn game_calculations<'a>(points: &[Position], players: &'a [Player]) -> CalculationReport<'a> {
    tracing::debug!(points = points.len(), players = players.len(), "game calculations");

    let legs = path_legs(points);
    let total_distance = legs.iter().fold(0.0, |acc, leg| acc + leg.distance);
    CalculationReport {
        legs,
        total_distance,
        damage: damage_matrix(players),
        speeds: players.iter().map(|p| (p, movement_speed(p))).collect(),
    }
}

impl Report for CalculationReport<'_> {
    fn title(&self) -> &'static str {
        "GAME CALCULATIONS"
    }
}

impl fmt::Display for CalculationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, self.title())?;

        writeln!(f, "Distances between consecutive coordinates:")?;
        for leg in &self.legs {
            writeln!(f, "  From {} to {}: {:.2} units", leg.from, leg.to, leg.distance)?;
        }
        writeln!(f, "\nTotal path length: {:.2} units", self.total_distance)?;

        writeln!(f, "\nDamage calculations:")?;
        for row in &self.damage {
            writeln!(
                f,
                "  {} would deal {:.1} damage to {}",
                row.attacker.name, row.damage, row.defender.name
            )?;
        }

        writeln!(f, "\nMovement speeds:")?;
        for (player, speed) in &self.speeds {
            writeln!(f, "  {}: {speed:.1} units per second", player.name)?;
        }
        Ok(())
    }
}
