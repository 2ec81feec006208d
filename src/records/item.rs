//! Inventory items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{Fields, FromRecord};
use crate::error::RecordError;

/// Item category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
}

impl ItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Consumable => "consumable",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "weapon" => Some(ItemKind::Weapon),
            "armor" => Some(ItemKind::Armor),
            "consumable" => Some(ItemKind::Consumable),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item rarity, declared from least to most rare.
///
/// The derived ordering follows [`Rarity::rank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Fixed sort rank: common 0 up to legendary 4.
    ///
    /// ```
    /// use game_utility::records::Rarity;
    ///
    /// assert_eq!(Rarity::Common.rank(), 0);
    /// assert_eq!(Rarity::Legendary.rank(), 4);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Parse a lowercase name. Unknown names have no rank and yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item in a player's inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub value: u32,
    pub rarity: Rarity,
    pub equipped: bool,
}

impl InventoryItem {
    /// Create a new item.
    pub fn new(
        name: impl Into<String>,
        kind: ItemKind,
        value: u32,
        rarity: Rarity,
        equipped: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
            rarity,
            equipped,
        }
    }
}

impl FromRecord for InventoryItem {
    const COLLECTION: &'static str = "inventory";

    fn from_value(value: &Value) -> Result<Self, RecordError> {
        let fields = Fields::of(value)?;
        Ok(Self {
            name: fields.text("name")?,
            kind: fields.variant("type", ItemKind::from_name)?,
            value: fields.uint("value")?,
            rarity: fields.variant("rarity", Rarity::from_name)?,
            equipped: fields.flag("equipped")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rarity_rank_matches_ordering() {
        let all = [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ];
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
        for rarity in all {
            assert_eq!(Rarity::from_name(rarity.as_str()), Some(rarity));
        }
    }

    #[test]
    fn test_unknown_rarity_rejects_record() {
        let value = json!({"name": "Odd Relic", "type": "armor", "value": 10, "rarity": "mythic", "equipped": false});
        assert_eq!(
            InventoryItem::from_value(&value),
            Err(RecordError::UnknownVariant {
                field: "rarity",
                value: "mythic".into()
            })
        );
    }

    #[test]
    fn test_from_value() {
        let value = json!({"name": "Magic Sword", "type": "weapon", "value": 500, "rarity": "rare", "equipped": false});
        assert_eq!(
            InventoryItem::from_value(&value),
            Ok(InventoryItem::new("Magic Sword", ItemKind::Weapon, 500, Rarity::Rare, false))
        );
        assert_eq!(
            InventoryItem::from_value(&json!({"name": "Broken Item"})),
            Err(RecordError::MissingField { field: "type" })
        );
        let bad_flag = json!({"name": "X", "type": "armor", "value": 1, "rarity": "common", "equipped": "yes"});
        assert_eq!(
            InventoryItem::from_value(&bad_flag),
            Err(RecordError::WrongType {
                field: "equipped",
                expected: "a boolean"
            })
        );
    }
}
