//! Sequences the demonstrations and writes their reports.

use std::io::Write;

use crate::config::DemoConfig;
use crate::data::Dataset;
use crate::demos::{self, DemoKind, Report};
use crate::error::Error;

pub const OPENING_BANNER: &str = "===== GAME DEVELOPMENT UTILITY SYSTEM =====";
pub const CLOSING_BANNER: &str = "===== DEMONSTRATION COMPLETED =====";

/// Build the report for one demonstration.
pub fn build_report<'a>(
    kind: DemoKind,
    dataset: &'a Dataset,
    config: &DemoConfig,
) -> Box<dyn Report + 'a> {
    match kind {
        DemoKind::Players => Box::new(demos::player_transformations(&dataset.players)),
        DemoKind::Entities => Box::new(demos::entity_filtering(&dataset.entities, &config.filter)),
        DemoKind::Inventory => Box::new(demos::item_sorting(&dataset.inventory)),
        DemoKind::Calculations => Box::new(demos::game_calculations(
            &dataset.coordinates,
            &dataset.players,
        )),
        DemoKind::Abilities => Box::new(demos::ability_system(&config.abilities)),
        DemoKind::Combat => Box::new(demos::combat_system(
            &dataset.players,
            &dataset.entities,
            &config.combat,
        )),
        DemoKind::Levels => Box::new(demos::level_system(&dataset.players, &config.levels)),
    }
}

/// Run the selected demonstrations in canonical order and write them to `out`.
///
/// An empty selection runs nothing but still writes both banners.
pub fn run<W: Write>(
    dataset: &Dataset,
    config: &DemoConfig,
    selection: &[DemoKind],
    out: &mut W,
) -> Result<(), Error> {
    writeln!(out, "{OPENING_BANNER}")?;

    if !dataset.rejections.is_empty() {
        writeln!(out, "\nRejected records: {}", dataset.rejections.len())?;
        for rejection in &dataset.rejections {
            writeln!(out, "  {rejection}")?;
        }
    }

    for kind in DemoKind::ALL.into_iter().filter(|k| selection.contains(k)) {
        let report = build_report(kind, dataset, config);
        tracing::debug!(demo = ?kind, title = report.title(), "running demonstration");
        write!(out, "{report}")?;
    }

    writeln!(out, "\n{CLOSING_BANNER}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::records::Rejection;

    fn render(dataset: &Dataset, selection: &[DemoKind]) -> String {
        let mut out = Vec::new();
        run(dataset, &DemoConfig::default(), selection, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banners() {
        let text = render(&Dataset::sample(), &[]);
        assert_eq!(text, format!("{OPENING_BANNER}\n\n{CLOSING_BANNER}\n"));
    }

    #[test]
    fn test_canonical_order() {
        let text = render(&Dataset::sample(), &[DemoKind::Levels, DemoKind::Players]);
        let players = text.find("===== PLAYER TRANSFORMATIONS =====").unwrap();
        let levels = text.find("===== LEVEL SYSTEM =====").unwrap();
        assert!(players < levels);
        assert!(!text.contains("===== COMBAT SYSTEM ====="));
    }

    #[test]
    fn test_all_sections_present() {
        let text = render(&Dataset::sample(), &DemoKind::ALL);
        for kind in DemoKind::ALL {
            let dataset = Dataset::sample();
            let title = build_report(kind, &dataset, &DemoConfig::default()).title();
            assert!(text.contains(&format!("===== {title} =====")), "missing {title}");
        }
        assert!(text.ends_with(&format!("\n{CLOSING_BANNER}\n")));
    }

    #[test]
    fn test_empty_dataset_prints_headers() {
        let text = render(&Dataset::default(), &DemoKind::ALL);
        assert!(text.contains("===== PLAYER TRANSFORMATIONS =====\nPlayer effective health:\n"));
        assert!(text.contains("Active enemies: 0\n"));
        assert!(text.contains("No players available to attack.\n"));
    }

    #[test]
    fn test_rejections_listed() {
        let dataset = Dataset {
            rejections: vec![Rejection {
                collection: "players",
                index: 1,
                error: RecordError::MissingField { field: "level" },
            }],
            ..Dataset::sample()
        };
        let text = render(&dataset, &[]);
        assert!(text.contains(
            "\nRejected records: 1\n  players[1]: missing required field `level`\n"
        ));
    }
}
