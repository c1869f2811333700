//! # satchel-storage: Persistence Layer for Satchel
//!
//! This crate provides the on-device key-value persistence the cart
//! store mirrors itself into. SQLite (via sqlx) is the durable backend;
//! an in-memory implementation exists for tests and ephemeral use.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Satchel Data Flow                                │
//! │                                                                         │
//! │  CartStore mutation (satchel-store)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  satchel-storage (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Storage     │    │ KeyValueStore │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (backend.rs) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ KvRepository  │    │ 001_init.sql │  │   │
//! │  │   │ WAL mode      │    │ MemoryStore   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   SQLite file: kv_entries (key PK, value, updated_at)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`backend`] - The [`KeyValueStore`] trait and [`MemoryStore`]
//! - [`error`] - Storage error types
//! - [`repository`] - SQLite repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use satchel_storage::{Storage, StorageConfig};
//!
//! // Open (or create) the on-device database
//! let storage = Storage::new(StorageConfig::new("path/to/satchel.db")).await?;
//!
//! // Key-value access
//! let kv = storage.kv();
//! kv.set("Products", "[]").await?;
//! let raw = kv.get("Products").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{KeyValueStore, MemoryStore};
pub use error::{StorageError, StorageResult};
pub use pool::{Storage, StorageConfig};
pub use repository::kv::KvRepository;
