//! SQLite-backed signature store.
//!
//! Uses [`SqlitePoolManager`] and the `channel_signatures` table. External: SQLite via sqlx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rich_text::Span;
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::models::{SignatureRecord, StoredSpans};
use crate::signature_store::SignatureStore;
use crate::sqlite_pool::SqlitePoolManager;

/// Raw row as stored; spans are still the JSON envelope.
#[derive(sqlx::FromRow)]
struct SignatureRow {
    admin_id: i64,
    channel_id: i64,
    signature_text: String,
    signature_spans: String,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SignatureRow> for SignatureRecord {
    type Error = StorageError;

    fn try_from(row: SignatureRow) -> Result<Self, Self::Error> {
        Ok(SignatureRecord {
            admin_id: row.admin_id,
            channel_id: row.channel_id,
            text: row.signature_text,
            spans: StoredSpans::decode(&row.signature_spans)?,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct SqliteSignatureStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteSignatureStore {
    /// Opens (and if needed creates) the database and its schema.
    pub async fn open(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating channel_signatures table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS channel_signatures (
                admin_id INTEGER NOT NULL,
                channel_id INTEGER NOT NULL,
                signature_text TEXT NOT NULL,
                signature_spans TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (admin_id, channel_id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_channel_signatures_channel_id ON channel_signatures(channel_id)",
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_channel_signatures_admin_id ON channel_signatures(admin_id)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl SignatureStore for SqliteSignatureStore {
    #[instrument(skip(self, text, spans))]
    async fn put(
        &self,
        admin_id: i64,
        channel_id: i64,
        text: &str,
        spans: &[Span],
    ) -> Result<(), StorageError> {
        let encoded = StoredSpans::encode(spans)?;
        let mut tx = self.pool_manager.pool().begin().await?;

        // Ownership is exclusive: a new registration replaces whoever held the channel.
        let replaced = sqlx::query("DELETE FROM channel_signatures WHERE channel_id = ?")
            .bind(channel_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query(
            r#"
            INSERT INTO channel_signatures (admin_id, channel_id, signature_text, signature_spans, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(admin_id)
        .bind(channel_id)
        .bind(text)
        .bind(&encoded)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            admin_id,
            channel_id,
            span_count = spans.len(),
            replaced,
            "Saved channel signature"
        );
        Ok(())
    }

    async fn get_by_channel(&self, channel_id: i64) -> Result<Option<SignatureRecord>, StorageError> {
        let row = sqlx::query_as::<_, SignatureRow>(
            "SELECT admin_id, channel_id, signature_text, signature_spans, updated_at FROM channel_signatures WHERE channel_id = ?",
        )
        .bind(channel_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        debug!(channel_id, found = row.is_some(), "Looked up channel signature");
        row.map(SignatureRecord::try_from).transpose()
    }

    async fn list_channels(&self, admin_id: i64) -> Result<Vec<i64>, StorageError> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT channel_id FROM channel_signatures WHERE admin_id = ? ORDER BY channel_id",
        )
        .bind(admin_id)
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, admin_id: i64, channel_id: i64) -> Result<bool, StorageError> {
        let result =
            sqlx::query("DELETE FROM channel_signatures WHERE admin_id = ? AND channel_id = ?")
                .bind(admin_id)
                .bind(channel_id)
                .execute(self.pool_manager.pool())
                .await?;

        let removed = result.rows_affected() > 0;
        info!(admin_id, channel_id, removed, "Deleted channel signature");
        Ok(removed)
    }
}
