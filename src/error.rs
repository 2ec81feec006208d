//! Error types.
//!
//! - `RecordError`: one record failed validation. Callers skip it.
//! - `DataError`: a whole collection or dataset document is unusable.
//! - `ConfigError`: a configuration file could not be read or parsed.
//! - `Error`: umbrella used by the runner and the binary.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single record was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not an object")]
    NotAnObject,

    #[error("coordinate is not an [x, y] pair")]
    NotAPair,

    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` should be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{field}` has unknown value `{value}`")]
    UnknownVariant { field: &'static str, value: String },
}

/// Failure to load a dataset or one of its collections.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("`{collection}` must be a list of records")]
    NotASequence { collection: &'static str },

    #[error("dataset document must be a JSON object")]
    NotAnObject,

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read dataset '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to load a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{field}` is {value}, above the limit of {max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_messages() {
        assert_eq!(
            RecordError::MissingField { field: "level" }.to_string(),
            "missing required field `level`"
        );
        assert_eq!(
            RecordError::UnknownVariant {
                field: "rarity",
                value: "mythic".into()
            }
            .to_string(),
            "field `rarity` has unknown value `mythic`"
        );
    }

    #[test]
    fn test_error_from_data_error() {
        let err: Error = DataError::NotASequence { collection: "players" }.into();
        assert_eq!(err.to_string(), "`players` must be a list of records");
    }
}
