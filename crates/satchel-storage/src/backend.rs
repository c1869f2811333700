//! # Storage Backend Seam
//!
//! The asynchronous key-value abstraction the cart store persists
//! through, plus the in-memory implementation used by tests.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Backend Implementations                              │
//! │                                                                         │
//! │                    ┌────────────────┐                                  │
//! │   CartStore ─────► │  KeyValueStore │  (dyn, async)                    │
//! │                    └───────┬────────┘                                  │
//! │                ┌───────────┴───────────┐                               │
//! │                ▼                       ▼                               │
//! │        ┌──────────────┐        ┌──────────────┐                        │
//! │        │ KvRepository │        │ MemoryStore  │                        │
//! │        │ (SQLite)     │        │ (HashMap)    │                        │
//! │        │ durable      │        │ tests /      │                        │
//! │        │ on-device    │        │ ephemeral    │                        │
//! │        └──────────────┘        └──────────────┘                        │
//! │                                                                         │
//! │  Values are opaque strings. This layer never interprets them.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StorageResult;

// =============================================================================
// Key-Value Store Trait
// =============================================================================

/// Abstraction over asynchronous key-value persistence.
///
/// ## Contract
/// - `get` returns `Ok(None)` for an absent key; absence is not an error
/// - `set` overwrites wholesale; there is no partial update
/// - `remove` is idempotent: removing an absent key succeeds
#[async_trait]
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    /// Retrieves the value stored under `key`.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`, if any.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Process-local key-value store backed by a `HashMap`.
///
/// ## When To Use
/// - Unit tests that need a backend without touching disk
/// - Ephemeral sessions where persistence across restarts is unwanted
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        MemoryStore {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().expect("kv mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().expect("kv mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().expect("kv mutex poisoned");
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("cart", "[]").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("cart", "old").await.unwrap();
        store.set("cart", "new").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("cart", "[]").await.unwrap();
        store.remove("cart").await.unwrap();
        store.remove("cart").await.unwrap();
        assert_eq!(store.get("cart").await.unwrap(), None);
    }
}
