//! Validation of untyped JSON records.
//!
//! ## Policy
//!
//! - A collection that is not a JSON array fails as a whole with
//!   [`DataError::NotASequence`].
//! - An element that is not a well-formed record is skipped. The skip is
//!   logged and kept as a [`Rejection`] so callers can report it.
//! - Valid elements keep their relative order.
//!
//! Dataset input only goes through [`FromRecord::from_value`], which reports
//! a structured [`RecordError`]. The serde derives on the record types are for
//! writing records out and for typed config values such as the ability test
//! player. Both paths accept the same JSON shape.

use serde_json::{Map, Value};

use crate::error::{DataError, RecordError};

/// A record type that can be built from an untyped JSON value.
pub trait FromRecord: Sized {
    /// Collection name used in errors and logs.
    const COLLECTION: &'static str;

    /// Validate and convert one record.
    fn from_value(value: &Value) -> Result<Self, RecordError>;
}

/// A record that failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// Collection the record came from.
    pub collection: &'static str,
    /// Position of the record in its source list.
    pub index: usize,
    /// Why it was rejected.
    pub error: RecordError,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.collection, self.index, self.error)
    }
}

/// Result of validating a collection: the good records plus what was skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated<T> {
    pub records: Vec<T>,
    pub rejected: Vec<Rejection>,
}

impl<T> Default for Validated<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

/// Validate every element of a JSON array as a `T`.
///
/// ```
/// use game_utility::records::{validate_records, Player};
///
/// let value = serde_json::json!([
///     {"name": "Valid", "level": 5, "health": 100, "mana": 50, "score": 1000},
///     {"name": "Invalid"},
///     "not a dict",
/// ]);
/// let validated = validate_records::<Player>(&value).unwrap();
/// assert_eq!(validated.records.len(), 1);
/// assert_eq!(validated.rejected.len(), 2);
/// ```
pub fn validate_records<T: FromRecord>(value: &Value) -> Result<Validated<T>, DataError> {
    let elements = value.as_array().ok_or(DataError::NotASequence {
        collection: T::COLLECTION,
    })?;

    let mut validated = Validated::default();
    for (index, element) in elements.iter().enumerate() {
        match T::from_value(element) {
            Ok(record) => validated.records.push(record),
            Err(error) => {
                tracing::warn!(collection = T::COLLECTION, index, %error, "skipping invalid record");
                validated.rejected.push(Rejection {
                    collection: T::COLLECTION,
                    index,
                    error,
                });
            }
        }
    }
    Ok(validated)
}

/// Typed field access over a JSON object.
pub(crate) struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    pub(crate) fn of(value: &'a Value) -> Result<Self, RecordError> {
        value.as_object().map(Fields).ok_or(RecordError::NotAnObject)
    }

    fn get(&self, field: &'static str) -> Result<&'a Value, RecordError> {
        self.0.get(field).ok_or(RecordError::MissingField { field })
    }

    pub(crate) fn text(&self, field: &'static str) -> Result<String, RecordError> {
        self.get(field)?
            .as_str()
            .map(str::to_string)
            .ok_or(RecordError::WrongType {
                field,
                expected: "a string",
            })
    }

    pub(crate) fn uint(&self, field: &'static str) -> Result<u32, RecordError> {
        self.get(field)?
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or(RecordError::WrongType {
                field,
                expected: "a non-negative integer",
            })
    }

    pub(crate) fn number(&self, field: &'static str) -> Result<f64, RecordError> {
        self.get(field)?.as_f64().ok_or(RecordError::WrongType {
            field,
            expected: "a number",
        })
    }

    pub(crate) fn flag(&self, field: &'static str) -> Result<bool, RecordError> {
        self.get(field)?.as_bool().ok_or(RecordError::WrongType {
            field,
            expected: "a boolean",
        })
    }

    /// Read a string field and map it onto a closed set of names.
    pub(crate) fn variant<T>(
        &self,
        field: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, RecordError> {
        let name = self.text(field)?;
        parse(&name).ok_or(RecordError::UnknownVariant { field, value: name })
    }
}
