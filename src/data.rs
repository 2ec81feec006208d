//! Sample data providers and dataset loading.
//!
//! Every provider builds a fresh collection on each call. Nothing is shared
//! between callers.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::DataError;
use crate::records::{
    validate_records, Entity, EntityKind, FromRecord, InventoryItem, ItemKind, Player, Position,
    Rarity, Rejection,
};

/// Five sample players of differing levels.
pub fn sample_players() -> Vec<Player> {
    vec![
        Player::new("Wizard1", 5, 80, 100, 2500),
        Player::new("Warrior2", 8, 120, 40, 3200),
        Player::new("Archer3", 6, 90, 60, 2800),
        Player::new("Healer4", 4, 70, 120, 2100),
        Player::new("Tank5", 7, 150, 30, 2700),
    ]
}

/// Eight sample entities: four enemies, two NPCs, two items.
pub fn sample_entities() -> Vec<Entity> {
    use EntityKind::{Enemy, Item, Npc};

    vec![
        Entity::new("E001", Enemy, 100.0, 200.0, true),
        Entity::new("E002", Npc, 150.0, 250.0, true),
        Entity::new("E003", Enemy, 200.0, 300.0, false),
        Entity::new("E004", Item, 120.0, 220.0, true),
        Entity::new("E005", Enemy, 180.0, 150.0, true),
        Entity::new("E006", Npc, 90.0, 180.0, false),
        Entity::new("E007", Item, 210.0, 270.0, true),
        Entity::new("E008", Enemy, 160.0, 240.0, true),
    ]
}

/// Six sample inventory items.
pub fn sample_inventory() -> Vec<InventoryItem> {
    use ItemKind::{Armor, Consumable, Weapon};

    vec![
        InventoryItem::new("Magic Sword", Weapon, 500, Rarity::Rare, false),
        InventoryItem::new("Health Potion", Consumable, 50, Rarity::Common, false),
        InventoryItem::new("Dragon Shield", Armor, 800, Rarity::Epic, true),
        InventoryItem::new("Mana Crystal", Consumable, 100, Rarity::Uncommon, false),
        InventoryItem::new("Ancient Bow", Weapon, 600, Rarity::Rare, true),
        InventoryItem::new("Mystic Robe", Armor, 400, Rarity::Uncommon, false),
    ]
}

/// Five waypoints forming a path.
pub fn sample_coordinates() -> Vec<Position> {
    [(10.0, 20.0), (50.0, 60.0), (30.0, 40.0), (70.0, 80.0), (90.0, 10.0)]
        .into_iter()
        .map(Position::from)
        .collect()
}

/// All four collections the demonstrations draw from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub players: Vec<Player>,
    pub entities: Vec<Entity>,
    pub inventory: Vec<InventoryItem>,
    pub coordinates: Vec<Position>,

    /// Records skipped while loading. Always empty for the samples.
    pub rejections: Vec<Rejection>,
}

impl Dataset {
    /// The built-in sample data.
    pub fn sample() -> Self {
        Self {
            players: sample_players(),
            entities: sample_entities(),
            inventory: sample_inventory(),
            coordinates: sample_coordinates(),
            rejections: Vec::new(),
        }
    }

    /// Parse a dataset document.
    ///
    /// The document is an object with optional `players`, `entities`,
    /// `inventory` and `coordinates` lists. A missing list falls back to the
    /// sample collection. A list that is present is validated record by record.
    ///
    /// ```
    /// use game_utility::data::Dataset;
    ///
    /// let dataset = Dataset::from_json_str(r#"{"players": []}"#).unwrap();
    /// assert!(dataset.players.is_empty());
    /// assert_eq!(dataset.entities.len(), 8);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let root: Value = serde_json::from_str(json)?;
        let document = root.as_object().ok_or(DataError::NotAnObject)?;

        let mut rejections = Vec::new();
        let players = collection(document, sample_players, &mut rejections)?;
        let entities = collection(document, sample_entities, &mut rejections)?;
        let inventory = collection(document, sample_inventory, &mut rejections)?;
        let coordinates = collection(document, sample_coordinates, &mut rejections)?;

        Ok(Self {
            players,
            entities,
            inventory,
            coordinates,
            rejections,
        })
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            players = dataset.players.len(),
            entities = dataset.entities.len(),
            inventory = dataset.inventory.len(),
            coordinates = dataset.coordinates.len(),
            rejected = dataset.rejections.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}

fn collection<T: FromRecord>(
    document: &Map<String, Value>,
    fallback: fn() -> Vec<T>,
    rejections: &mut Vec<Rejection>,
) -> Result<Vec<T>, DataError> {
    match document.get(T::COLLECTION) {
        Some(value) => {
            let validated = validate_records::<T>(value)?;
            rejections.extend(validated.rejected);
            Ok(validated.records)
        }
        None => Ok(fallback()),
    }
}
