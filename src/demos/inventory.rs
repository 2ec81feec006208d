//! Inventory orderings.
//!
//! All sorts are stable (`slice::sort_by_key`), so items with equal keys keep
//! their inventory order.

use std::cmp::Reverse;
use std::fmt;

use super::{write_banner, Report};
use crate::records::InventoryItem;

/// The four inventory orderings.
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryReport<'a> {
    pub by_value: Vec<&'a InventoryItem>,
    pub by_rarity: Vec<&'a InventoryItem>,
    pub by_type_then_value: Vec<&'a InventoryItem>,
    pub equipped_by_value: Vec<&'a InventoryItem>,
}

/// Items ordered by ascending value.
pub fn sort_by_value(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut sorted: Vec<_> = items.iter().collect();
    sorted.sort_by_key(|item| item.value);
    sorted
}

/// Items ordered from common to legendary.
pub fn sort_by_rarity(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut sorted: Vec<_> = items.iter().collect();
    sorted.sort_by_key(|item| item.rarity.rank());
    sorted
}

/// Items grouped by type name, most valuable first within each type.
pub fn sort_by_type_then_value(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut sorted: Vec<_> = items.iter().collect();
    sorted.sort_by_key(|item| (item.kind.as_str(), Reverse(item.value)));
    sorted
}

/// Equipped items only, by ascending value.
pub fn equipped_by_value(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut equipped: Vec<_> = items.iter().filter(|item| item.equipped).collect();
    equipped.sort_by_key(|item| item.value);
    equipped
}

/// Compute every ordering.
pub fn item_sorting(items: &[InventoryItem]) -> InventoryReport<'_> {
    tracing::debug!(items = items.len(), "inventory sorting");
    InventoryReport {
        by_value: sort_by_value(items),
        by_rarity: sort_by_rarity(items),
        by_type_then_value: sort_by_type_then_value(items),
        equipped_by_value: equipped_by_value(items),
    }
}

impl Report for InventoryReport<'_> {
    fn title(&self) -> &'static str {
        "INVENTORY SORTING"
    }
}

impl fmt::Display for InventoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_banner(f, self.title())?;

        writeln!(f, "Items sorted by value (ascending):")?;
        for item in &self.by_value {
            writeln!(f, "  {}: {} gold", item.name, item.value)?;
        }

        writeln!(f, "\nItems sorted by rarity:")?;
        for item in &self.by_rarity {
            writeln!(f, "  {}: {}", item.name, item.rarity)?;
        }

        writeln!(f, "\nItems sorted by type then value (descending):")?;
        for item in &self.by_type_then_value {
            writeln!(f, "  {}: {}, {} gold", item.name, item.kind, item.value)?;
        }

        writeln!(f, "\nEquipped items sorted by value:")?;
        for item in &self.equipped_by_value {
            writeln!(f, "  {}: {} gold", item.name, item.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_inventory;
    use crate::records::{ItemKind, Rarity};

    fn names<'a>(items: &[&'a InventoryItem]) -> Vec<&'a str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_by_value() {
        let inventory = sample_inventory();
        let sorted = sort_by_value(&inventory);
        assert_eq!(sorted.len(), inventory.len());
        assert_eq!(sorted.first().map(|i| i.name.as_str()), Some("Health Potion"));
        assert_eq!(sorted.first().map(|i| i.value), Some(50));
        assert_eq!(sorted.last().map(|i| i.name.as_str()), Some("Dragon Shield"));
        assert_eq!(sorted.last().map(|i| i.value), Some(800));
    }

    #[test]
    fn test_by_rarity_is_stable() {
        let inventory = sample_inventory();
        assert_eq!(
            names(&sort_by_rarity(&inventory)),
            [
                "Health Potion",
                "Mana Crystal",
                "Mystic Robe",
                "Magic Sword",
                "Ancient Bow",
                "Dragon Shield"
            ]
        );
    }

    #[test]
    fn test_by_type_then_value() {
        let inventory = sample_inventory();
        assert_eq!(
            names(&sort_by_type_then_value(&inventory)),
            [
                "Dragon Shield",
                "Mystic Robe",
                "Mana Crystal",
                "Health Potion",
                "Ancient Bow",
                "Magic Sword"
            ]
        );
    }

    #[test]
    fn test_equipped_by_value() {
        let inventory = sample_inventory();
        assert_eq!(
            names(&equipped_by_value(&inventory)),
            ["Ancient Bow", "Dragon Shield"]
        );
    }

    #[test]
    fn test_equal_values_keep_order() {
        let inventory = vec![
            InventoryItem::new("First", ItemKind::Weapon, 10, Rarity::Epic, false),
            InventoryItem::new("Second", ItemKind::Weapon, 10, Rarity::Epic, false),
            InventoryItem::new("Cheap", ItemKind::Armor, 1, Rarity::Epic, false),
        ];
        assert_eq!(names(&sort_by_value(&inventory)), ["Cheap", "First", "Second"]);
        assert_eq!(names(&sort_by_rarity(&inventory)), ["First", "Second", "Cheap"]);
    }

    #[test]
    fn test_type_and_equipped_sorts_keep_tie_order() {
        let inventory = vec![
            InventoryItem::new("B", ItemKind::Weapon, 10, Rarity::Rare, true),
            InventoryItem::new("A", ItemKind::Weapon, 10, Rarity::Common, true),
            InventoryItem::new("Plate", ItemKind::Armor, 10, Rarity::Rare, false),
            InventoryItem::new("C", ItemKind::Weapon, 20, Rarity::Epic, true),
        ];
        assert_eq!(
            names(&sort_by_type_then_value(&inventory)),
            ["Plate", "C", "B", "A"]
        );
        assert_eq!(names(&equipped_by_value(&inventory)), ["B", "A", "C"]);
    }

    #[test]
    fn test_render() {
        let inventory = sample_inventory();
        let text = item_sorting(&inventory).to_string();
        assert!(text.contains("Items sorted by value (ascending):\n  Health Potion: 50 gold\n"));
        assert!(text.contains("Items sorted by rarity:\n  Health Potion: common\n"));
        assert!(text.contains("  Dragon Shield: armor, 800 gold\n"));
        assert!(text.ends_with(
            "Equipped items sorted by value:\n  Ancient Bow: 600 gold\n  Dragon Shield: 800 gold\n"
        ));
    }

    #[test]
    fn test_empty() {
        let text = item_sorting(&[]).to_string();
        assert!(text.starts_with("\n===== INVENTORY SORTING =====\n"));
        assert!(text.ends_with("Equipped items sorted by value:\n"));
    }
}
