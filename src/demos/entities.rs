//! Entity selection by kind, activity, distance and quadrant.
//!
//! Every selection is a stable filter: matches keep their input order.

use std::fmt;

use super::{write_banner, Report};
use crate::config::FilterConfig;
use crate::records::{Entity, EntityKind, Position};

/// The four entity selections.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityReport<'a> {
    pub active_enemies: Vec<&'a Entity>,
    pub collectible_items: Vec<&'a Entity>,
    /// Active entities strictly inside `nearby_radius`, with their distance.
    pub nearby: Vec<(&'a Entity, f64)>,
    pub quadrant_targets: Vec<&'a Entity>,
    pub nearby_radius: f64,
}

/// Active entities of one kind.
pub fn active_of_kind(entities: &[Entity], kind: EntityKind) -> Vec<&Entity> {
    entities.iter().filter(|e| e.is_active_kind(kind)).collect()
}

/// Active entities strictly closer than `radius` to `from`.
pub fn active_within(entities: &[Entity], from: Position, radius: f64) -> Vec<(&Entity, f64)> {
    entities
        .iter()
        .filter(|e| e.active)
        .map(|e| (e, e.distance_to(from)))
        .filter(|&(_, distance)| distance < radius)
        .collect()
}

/// Run all four selections.
pub fn entity_filtering<'a>(entities: &'a [Entity], config: &FilterConfig) -> EntityReport<'a> {
    tracing::debug!(entities = entities.len(), reference = %config.reference, "entity filtering");

    let quadrant_targets = entities
        .iter()
        .filter(|e| {
            e.is_active_kind(EntityKind::Enemy)
                && e.position_x > config.quadrant_min_x
                && e.position_y > config.quadrant_min_y
        })
        .collect();

    EntityReport {
        active_enemies: active_of_kind(entities, EntityKind::Enemy),
        collectible_items: active_of_kind(entities, EntityKind::Item),
        nearby: active_within(entities, config.reference, config.nearby_radius),
        quadrant_targets,
        nearby_radius: config.nearby_radius,
    }
}

impl Report for EntityReport<'_> {
    fn title(&self) -> &'static str {
        "ENTITY FILTERING"
    }
}

fn write_positions(f: &mut fmt::Formatter<'_>, entities: &[&Entity]) -> fmt::Result {
    for e in entities {
        writeln!(f, "  {} at position {}", e.id, e.position())?;
    }
    Ok(())
}

impl fmt::Display for EntityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, self.title())?;

        writeln!(f, "Active enemies: {}", self.active_enemies.len())?;
        write_positions(f, &self.active_enemies)?;

        writeln!(f, "\nCollectible items: {}", self.collectible_items.len())?;
        write_positions(f, &self.collectible_items)?;

        writeln!(
            f,
            "\nEntities within {} units of player: {}",
            self.nearby_radius,
            self.nearby.len()
        )?;
        for (e, distance) in &self.nearby {
            writeln!(f, "  {} ({}) at distance {distance:.1}", e.id, e.kind)?;
        }

        writeln!(
            f,
            "\nEnemy targets in northeast quadrant: {}",
            self.quadrant_targets.len()
        )?;
        write_positions(f, &self.quadrant_targets)
    }
}
