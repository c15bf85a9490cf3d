//! Storage crate: the channel signature registry.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – SignatureRecord and the versioned span envelope
//! - [`signature_store`] – SignatureStore trait
//! - [`sqlite_store`] – SqliteSignatureStore (SQLite via sqlx)
//! - [`inmemory_store`] – InMemorySignatureStore
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod inmemory_store;
mod models;
mod signature_store;
mod sqlite_pool;
mod sqlite_store;

pub use error::StorageError;
pub use inmemory_store::InMemorySignatureStore;
pub use models::{SignatureRecord, StoredSpans, SPAN_SCHEMA_VERSION};
pub use signature_store::SignatureStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteSignatureStore;
