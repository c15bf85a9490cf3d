//! Store trait for channel signatures. Implementations: [`crate::SqliteSignatureStore`],
//! [`crate::InMemorySignatureStore`].

use async_trait::async_trait;
use rich_text::Span;

use crate::error::StorageError;
use crate::models::SignatureRecord;

/// Durable mapping `channel → (admin, signature)`.
///
/// At most one record exists per channel. Each call is atomic for the record it touches.
#[async_trait]
pub trait SignatureStore: Send + Sync {
    /// Inserts or replaces the channel's signature. Any previous record for `channel_id` is
    /// replaced regardless of which admin owned it.
    async fn put(
        &self,
        admin_id: i64,
        channel_id: i64,
        text: &str,
        spans: &[Span],
    ) -> Result<(), StorageError>;

    /// Returns the channel's record, or None if the channel is not registered.
    async fn get_by_channel(&self, channel_id: i64) -> Result<Option<SignatureRecord>, StorageError>;

    /// Channel ids owned by `admin_id`, ascending.
    async fn list_channels(&self, admin_id: i64) -> Result<Vec<i64>, StorageError>;

    /// Removes the record only when it is owned by `admin_id`; returns true if a row was removed.
    async fn delete(&self, admin_id: i64, channel_id: i64) -> Result<bool, StorageError>;
}
