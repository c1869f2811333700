//! # satchel-store: Cart Store and Consumer Surface
//!
//! The live cart state layer for Satchel. One authoritative in-memory
//! cart, mirrored wholesale to the persistence backend on every
//! mutation, published to UI consumers through a provider/accessor
//! contract.
//!
//! ## Module Organization
//! ```text
//! satchel_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore: load, add_to_cart, increment, decrement
//! ├── context.rs      ◄─── CartProvider / CartContext consumer surface
//! └── error.rs        ◄─── StoreError (code + message) for consumers
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Satchel Cart Data Flow                               │
//! │                                                                         │
//! │  UI action                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  context.cart()? ── mutation operation                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  in-memory sequence updated (single writer, under lock)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  full sequence serialized → KeyValueStore::set("Products", json)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  new snapshot published → subscribed consumers re-render               │
//! │                                                                         │
//! │  On startup: persisted sequence read once and loaded into memory.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use satchel_core::NewLineItem;
//! use satchel_storage::{Storage, StorageConfig};
//! use satchel_store::{CartProvider, CartStore};
//!
//! let storage = Storage::new(StorageConfig::new("./satchel.db")).await?;
//! let provider = CartProvider::mount(CartStore::new(Arc::new(storage.kv()))).await?;
//!
//! let cart = provider.context().cart()?;
//! cart.add_to_cart(NewLineItem {
//!     id: "shirt-01".into(),
//!     title: "Shirt".into(),
//!     image_url: "https://cdn.example.com/shirt.png".into(),
//!     price_cents: 1000,
//! }).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod context;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use context::{CartContext, CartProvider};
pub use error::{ErrorCode, StoreError, StoreResult};
pub use store::{CartStore, CART_STORAGE_KEY};

// Domain types consumers need alongside the store
pub use satchel_core::{LineItem, NewLineItem};
