//! World entities and 2D positions.
//!
//! ## Position
//!
//! A coordinate pair. Serializes as `[x, y]`, which is also the shape
//! accepted from untyped coordinate lists.
//!
//! ## Entity
//!
//! Something placed in the world: an enemy, an NPC or a pickup item.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{Fields, FromRecord};
use crate::error::RecordError;

/// A point in the 2D world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// ```
    /// use game_utility::records::Position;
    ///
    /// let a = Position::new(10.0, 20.0);
    /// let b = Position::new(40.0, 60.0);
    /// assert_eq!(a.distance(b), 50.0);
    /// assert_eq!(b.distance(a), 50.0);
    /// assert_eq!(a.distance(a), 0.0);
    /// ```
    #[must_use]
    pub fn distance(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (f64, f64) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromRecord for Position {
    const COLLECTION: &'static str = "coordinates";

    fn from_value(value: &Value) -> Result<Self, RecordError> {
        match value.as_array().map(Vec::as_slice) {
            Some([x, y]) => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => Ok(Self { x, y }),
                _ => Err(RecordError::NotAPair),
            },
            _ => Err(RecordError::NotAPair),
        }
    }
}

/// What an entity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Enemy,
    Npc,
    Item,
}

impl EntityKind {
    /// Lowercase name as used in data files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Enemy => "enemy",
            EntityKind::Npc => "npc",
            EntityKind::Item => "item",
        }
    }

    /// Parse a lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "enemy" => Some(EntityKind::Enemy),
            "npc" => Some(EntityKind::Npc),
            "item" => Some(EntityKind::Item),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed world entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub position_x: f64,
    pub position_y: f64,
    pub active: bool,
}

impl Entity {
    /// Create a new entity.
    pub fn new(id: impl Into<String>, kind: EntityKind, x: f64, y: f64, active: bool) -> Self {
        Self {
            id: id.into(),
            kind,
            position_x: x,
            position_y: y,
            active,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.position_x, self.position_y)
    }

    /// Distance from this entity to `from`.
    #[must_use]
    pub fn distance_to(&self, from: Position) -> f64 {
        self.position().distance(from)
    }

    #[must_use]
    pub fn is_active_kind(&self, kind: EntityKind) -> bool {
        self.active && self.kind == kind
    }
}

impl FromRecord for Entity {
    const COLLECTION: &'static str = "entities";

    fn from_value(value: &Value) -> Result<Self, RecordError> {
        let fields = Fields::of(value)?;
        Ok(Self {
            id: fields.text("id")?,
            kind: fields.variant("type", EntityKind::from_name)?,
            position_x: fields.number("position_x")?,
            position_y: fields.number("position_y")?,
            active: fields.flag("active")?,
        })
    }
}
