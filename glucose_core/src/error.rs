//! Error types for the glucose_core library.

use crate::ItemKind;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for glucose_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed reference catalog row
    #[error("Catalog load error ({kind} line {line}): {reason}")]
    CatalogLoad {
        kind: ItemKind,
        line: u64,
        reason: String,
    },

    /// Action references an identifier absent from the catalog
    #[error("Unknown {kind} item: {id}")]
    UnknownItem { kind: ItemKind, id: u32 },

    /// Action duration rounds to zero or fewer buckets
    #[error("Degenerate action '{name}' at {time} (volume {volume}): effect shorter than one bucket")]
    DegenerateAction {
        name: String,
        time: String,
        volume: f64,
    },

    /// Action effect spans more buckets than can be indexed
    #[error("Action '{name}' at {time} (volume {volume}): effect too long to simulate")]
    ActionTooLong {
        name: String,
        time: String,
        volume: f64,
    },

    /// Clock string is not a valid "HH:MM" time
    #[error("Invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// Bucket width outside 1..=1440 minutes
    #[error("Invalid granularity: {0} minutes")]
    InvalidGranularity(u32),
}
