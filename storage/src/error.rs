//! Storage error types.
//!
//! Used by [`crate::SignatureStore`] implementations and their callers.

use thiserror::Error;

/// Errors that can occur when reading or writing channel signatures.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    /// Stored spans could not be decoded (unknown schema version or malformed JSON).
    #[error("Span schema error: {0}")]
    Schema(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}
