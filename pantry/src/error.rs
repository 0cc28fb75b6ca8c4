//! Error types for pantry

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for pantry operations
///
/// Business rejections (full storage, duplicate names, unknown names) are not
/// errors; they are reported through the outcome types of the stores.
#[derive(Debug, Error)]
pub enum PantryError {
    /// Backing file could not be written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Ingredient name rejected at the input boundary
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// Unit token rejected at the input boundary
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
    /// Negative or non-finite quantity
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(f64),
    /// Record could not be encoded as a delimited line
    #[error("Record format error: {0}")]
    Csv(#[from] csv::Error),
    /// Failed to serialize the shopping list
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PantryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PantryError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for pantry operations
pub type Result<T> = std::result::Result<T, PantryError>;
