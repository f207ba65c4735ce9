//! Storage error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Storage error types.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid enquiry: {0}")]
    Validation(#[from] ValidationError),

    #[error("Corrupt row: {0}")]
    Corrupt(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),
}
