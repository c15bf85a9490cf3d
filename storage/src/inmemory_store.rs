//! # In-Memory Signature Store
//!
//! In-process implementation of [`SignatureStore`] keyed by channel id.
//!
//! Data is lost on restart; intended for tests and for running the bot without a disk.
//! The map sits behind `Arc<RwLock<>>` so clones share state across tasks.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rich_text::Span;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::models::SignatureRecord;
use crate::signature_store::SignatureStore;

#[derive(Debug, Clone, Default)]
pub struct InMemorySignatureStore {
    records: Arc<RwLock<HashMap<i64, SignatureRecord>>>,
}

impl InMemorySignatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered channels.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SignatureStore for InMemorySignatureStore {
    async fn put(
        &self,
        admin_id: i64,
        channel_id: i64,
        text: &str,
        spans: &[Span],
    ) -> Result<(), StorageError> {
        let record = SignatureRecord::new(admin_id, channel_id, text.to_string(), spans.to_vec());
        self.records.write().await.insert(channel_id, record);
        Ok(())
    }

    async fn get_by_channel(&self, channel_id: i64) -> Result<Option<SignatureRecord>, StorageError> {
        Ok(self.records.read().await.get(&channel_id).cloned())
    }

    async fn list_channels(&self, admin_id: i64) -> Result<Vec<i64>, StorageError> {
        let mut ids: Vec<i64> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.is_owned_by(admin_id))
            .map(|r| r.channel_id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn delete(&self, admin_id: i64, channel_id: i64) -> Result<bool, StorageError> {
        let mut records = self.records.write().await;
        match records.get(&channel_id) {
            Some(r) if r.is_owned_by(admin_id) => {
                records.remove(&channel_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
