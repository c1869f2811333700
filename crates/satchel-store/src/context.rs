//! # Provider / Accessor Surface
//!
//! The consumer contract: a [`CartProvider`] owns the store for the
//! lifetime of the UI subtree that needs cart access, and hands out
//! cloneable [`CartContext`] values whose accessor resolves to the live
//! store — or fails immediately when no provider is active.
//!
//! ## Consumer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Provider / Context Lifecycle                         │
//! │                                                                         │
//! │  App startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartProvider::mount(store) ── runs load() once, owns the store        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  provider.context() ──► CartContext ──► clone per consumer             │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  context.cart()? ──► Arc<CartStore>  (products + mutations)            │
//! │                                                                         │
//! │  drop(provider)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  context.cart() ──► Err(NO_PROVIDER)  ← integration mistake,           │
//! │                                         caught immediately             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Not a Global?
//! The provider is an explicit dependency-injected object, not a hidden
//! singleton. Tests instantiate isolated providers; nothing is
//! process-wide.

use std::sync::{Arc, Weak};

use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::store::CartStore;

// =============================================================================
// Provider
// =============================================================================

/// Owns a [`CartStore`] for the lifetime of the consuming scope.
///
/// Dropping the provider "unmounts" the cart: existing contexts keep
/// working as accessors but resolve to `NO_PROVIDER` errors. The
/// persisted snapshot is the durable copy, so no explicit teardown is
/// needed.
#[derive(Debug)]
pub struct CartProvider {
    store: Arc<CartStore>,
}

impl CartProvider {
    /// Mounts the provider: hydrates the store from persistence and
    /// takes ownership of it.
    ///
    /// ## Failure
    /// A malformed persisted snapshot or a storage failure surfaces
    /// here and the provider is not created — hydration problems are
    /// visible at startup, not swallowed.
    pub async fn mount(store: CartStore) -> StoreResult<Self> {
        let store = Arc::new(store);
        store.load().await?;

        info!("Cart provider mounted");
        Ok(CartProvider { store })
    }

    /// Returns a context handle for consumers inside this provider's
    /// scope. Contexts are cheap to clone and hold no strong reference.
    pub fn context(&self) -> CartContext {
        CartContext {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Direct access to the owned store.
    pub fn store(&self) -> Arc<CartStore> {
        Arc::clone(&self.store)
    }
}

// =============================================================================
// Context
// =============================================================================

/// The accessor consumers hold.
///
/// ## Contract
/// [`CartContext::cart`] returns the live store — current products plus
/// the `add_to_cart` / `increment` / `decrement` operations — or fails
/// immediately with `NO_PROVIDER` when called outside an active
/// provider. That failure is a programming error in the integration;
/// surfacing it as a typed `Result` keeps it catchable while still
/// failing fast by default.
#[derive(Debug, Clone)]
pub struct CartContext {
    store: Weak<CartStore>,
}

impl CartContext {
    /// A context with no provider, mirroring the default (absent)
    /// context value a consumer sees before any provider mounts.
    /// Every accessor call on it fails with `NO_PROVIDER`.
    pub fn detached() -> Self {
        CartContext { store: Weak::new() }
    }

    /// Resolves the live cart store.
    ///
    /// ## Returns
    /// - `Ok(Arc<CartStore>)` while the provider is mounted
    /// - `Err(NO_PROVIDER)` for a detached context or after the
    ///   provider was dropped
    pub fn cart(&self) -> StoreResult<Arc<CartStore>> {
        self.store
            .upgrade()
            .ok_or_else(|| StoreError::no_provider())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
