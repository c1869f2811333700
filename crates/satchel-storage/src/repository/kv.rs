//! # Key-Value Repository
//!
//! SQLite implementation of the [`KeyValueStore`] backend.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Write (upsert)                              │
//! │                                                                         │
//! │  set("Products", "[{...}]")                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT INTO kv_entries (key, value, updated_at)                       │
//! │  ON CONFLICT(key) DO UPDATE  ← wholesale replacement, no merge         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │ kv_entries                                   │                      │
//! │  │ Products │ [{"id":"a",...}] │ 2026-08-07...  │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::backend::KeyValueStore;
use crate::error::StorageResult;

/// Repository for key-value persistence operations.
///
/// ## Usage
/// ```rust,ignore
/// let kv = KvRepository::new(pool);
///
/// kv.set("Products", "[]").await?;
/// let raw = kv.get("Products").await?;  // Some("[]")
/// ```
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    /// Creates a new KvRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }

    /// Retrieves the value stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key absent (not an error)
    pub async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        debug!(key = %key, "Reading kv entry");

        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_entries WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing kv entry");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO kv_entries (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes the value stored under `key`.
    ///
    /// Idempotent: removing an absent key succeeds.
    pub async fn remove(&self, key: &str) -> StorageResult<()> {
        debug!(key = %key, "Removing kv entry");

        sqlx::query("DELETE FROM kv_entries WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for KvRepository {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        KvRepository::get(self, key).await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        KvRepository::set(self, key, value).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        KvRepository::remove(self, key).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
