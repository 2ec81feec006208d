//! End-to-end demonstration tests.
//!
//! These tests run the demonstrations against the sample data and against
//! degenerate inputs (empty lists, malformed records), checking both computed
//! values and rendered text.

use game_utility::data::{sample_entities, sample_inventory, sample_players, Dataset};
use game_utility::demos::{
    self, combat_system, entity_filtering, game_calculations, item_sorting, level_system,
    player_transformations, DemoKind,
};
use game_utility::{run, CombatConfig, DemoConfig, FilterConfig, LevelConfig};

fn render_all(dataset: &Dataset) -> String {
    let mut out = Vec::new();
    run(dataset, &DemoConfig::default(), &DemoKind::ALL, &mut out).expect("run should succeed");
    String::from_utf8(out).expect("report is UTF-8")
}

// =============================================================================
// Sample Scenarios
// =============================================================================

/// Sorting the sample inventory by value puts the potion first and the shield last.
#[test]
fn test_inventory_value_extremes() {
    let inventory = sample_inventory();
    let report = item_sorting(&inventory);

    let first = report.by_value.first().expect("non-empty");
    let last = report.by_value.last().expect("non-empty");
    assert_eq!((first.name.as_str(), first.value), ("Health Potion", 50));
    assert_eq!((last.name.as_str(), last.value), ("Dragon Shield", 800));
    assert_eq!(report.by_value.len(), inventory.len());
}

/// The sample world has three active enemies and two active items.
#[test]
fn test_entity_counts() {
    let entities = sample_entities();
    let report = entity_filtering(&entities, &FilterConfig::default());

    assert_eq!(report.active_enemies.len(), 3);
    assert_eq!(report.collectible_items.len(), 2);

    let all_enemies = entities
        .iter()
        .filter(|e| e.kind == game_utility::EntityKind::Enemy)
        .count();
    assert!(report.active_enemies.len() <= all_enemies);
}

/// Every player's effective health exceeds their raw health.
#[test]
fn test_effective_health_exceeds_health() {
    for player in sample_players() {
        assert!(player.effective_health() > u64::from(player.health));
    }
}

/// Damage is computed for every ordered pair of distinct players.
#[test]
fn test_damage_pairs() {
    let players = sample_players();
    let report = game_calculations(&[], &players);
    assert_eq!(report.damage.len(), 5 * 4);
    assert_eq!(report.speeds.len(), 5);
}

/// Combat and level demos agree on the sample roster.
#[test]
fn test_combat_and_levels() {
    let players = sample_players();
    let entities = sample_entities();

    let combat = combat_system(&players, &entities, &CombatConfig::default());
    assert_eq!(combat.engagements.len(), 2);
    for engagement in &combat.engagements {
        assert!(engagement.distance <= combat.attack_range);
        assert!((0.0..=100.0).contains(&engagement.hit_chance));
        assert!(engagement.damage >= 1.0);
    }

    let levels = level_system(&players, &LevelConfig::default());
    for progression in &levels.progressions {
        assert_eq!(progression.projections.len(), 3);
        let first = progression.projections[0];
        assert_eq!(first.level, progression.player.level + 1);
        assert_eq!(first.health, i64::from(progression.player.health) + 10);
        assert_eq!(first.mana, i64::from(progression.player.mana) + 5);
    }
}

// =============================================================================
// Degenerate Inputs
// =============================================================================

/// Every demonstration renders at least its banner when given nothing.
#[test]
fn test_empty_inputs_render_banners() {
    let empty = Dataset::default();
    let config = DemoConfig::default();
    for kind in DemoKind::ALL {
        let report = game_utility::runner::build_report(kind, &empty, &config);
        let text = report.to_string();
        assert!(
            text.starts_with(&format!("\n===== {} =====\n", report.title())),
            "{kind:?} did not start with its banner"
        );
    }
}

/// A dataset with malformed records still runs every demonstration.
#[test]
fn test_malformed_dataset_runs() {
    let json = r#"{
        "players": [
            {"name": "Valid", "level": 5, "health": 100, "mana": 50, "score": 1000},
            {"name": "Invalid"},
            "not a dict",
            {"name": "Another Valid", "level": 3, "health": 80, "mana": 40, "score": 800}
        ],
        "entities": [{"id": "E999"}],
        "inventory": [{"name": "Broken Item"}],
        "coordinates": ["not", "coordinates"]
    }"#;
    let dataset = Dataset::from_json_str(json).expect("collections are lists");

    assert_eq!(dataset.players.len(), 2);
    assert!(dataset.entities.is_empty());
    assert!(dataset.inventory.is_empty());
    assert!(dataset.coordinates.is_empty());
    assert_eq!(dataset.rejections.len(), 6);

    let text = render_all(&dataset);
    assert!(text.contains("Rejected records: 6\n"));
    assert!(text.contains("  Valid: 150\n"));
    assert!(text.contains("  Another Valid: 110\n"));
    assert!(text.contains("Total path length: 0.00 units\n"));
    assert!(text.contains("Enemies in attack range (150 units) of Valid:\n"));
}

/// Zero-level players never divide by zero.
#[test]
fn test_zero_level_player() {
    let players = vec![game_utility::Player::new("Rookie", 0, 40, 10, 90)];
    let report = player_transformations(&players);
    assert_eq!(report.metrics[0].normalized_score, None);
    assert_eq!(report.metrics[0].effective_health, 40);
}

/// Full default run starts and ends with the program banners.
#[test]
fn test_full_sample_run() {
    let text = render_all(&Dataset::sample());
    assert!(text.starts_with(game_utility::runner::OPENING_BANNER));
    assert!(text.ends_with(&format!("{}\n", game_utility::runner::CLOSING_BANNER)));
    assert!(!text.contains("Rejected records"));

    let ability = demos::ability_system(&DemoConfig::default().abilities);
    assert!(text.contains(&ability.to_string()));
}
