//! # Cart Store
//!
//! The authoritative cart state: one in-memory [`Cart`], mirrored
//! wholesale to the key-value backend on every mutation, published to
//! consumers as immutable snapshots.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI action → operation → lock cart → mutate copy → persist → commit    │
//! │                                                        │                │
//! │                              ┌─────────────────────────┘                │
//! │                              ▼                                          │
//! │              backend.set("Products", json)                              │
//! │                              │                                          │
//! │               ┌──── success ─┴─ failure ────┐                           │
//! │               ▼                             ▼                           │
//! │   in-memory cart replaced,        in-memory cart unchanged,             │
//! │   snapshot published              error surfaced to caller              │
//! │                                                                         │
//! │  NOTE: The mutex is held across the persistence write, so every        │
//! │        mutation is an atomic read-modify-persist-publish over the      │
//! │        latest state. Rapid successive mutations cannot lose updates.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::debug;

use satchel_core::validation::validate_candidate;
use satchel_core::{Cart, CartError, LineItem, NewLineItem};
use satchel_storage::KeyValueStore;

use crate::error::{StoreError, StoreResult};

/// The fixed storage key the cart snapshot lives under.
///
/// The value is a serialized JSON array of line-items, written wholesale
/// on every mutation and read wholesale once at load.
pub const CART_STORAGE_KEY: &str = "Products";

/// The cart store.
///
/// ## Ownership
/// The store exclusively owns the in-memory sequence. Consumers get
/// cloned snapshots via [`CartStore::products`] or the watch channel
/// from [`CartStore::subscribe`]; all mutation flows through
/// [`CartStore::add_to_cart`], [`CartStore::increment`] and
/// [`CartStore::decrement`].
///
/// ## Thread Safety
/// The cart sits behind an async `Mutex` that is held across the
/// persistence write. This makes the store the single writer of the
/// persisted key and rules out the stale-read lost-update that two
/// overlapping mutations could otherwise produce.
pub struct CartStore {
    /// Persistence backend (SQLite in production, memory in tests).
    backend: Arc<dyn KeyValueStore>,

    /// The authoritative in-memory cart.
    cart: Mutex<Cart>,

    /// Publishes a fresh snapshot to consumers after every change.
    snapshot_tx: watch::Sender<Vec<LineItem>>,
}

impl CartStore {
    /// Creates a store over the given backend. The cart starts empty;
    /// call [`CartStore::load`] (or mount through a provider) to
    /// hydrate it from storage.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());

        CartStore {
            backend,
            cart: Mutex::new(Cart::new()),
            snapshot_tx,
        }
    }

    /// Hydrates the cart from the persisted snapshot.
    ///
    /// Runs once at provider mount.
    ///
    /// ## Behavior
    /// - Key absent: the cart stays empty
    /// - Key present: parsed into the in-memory sequence and published
    /// - Unparseable value or duplicate ids: `MALFORMED_SNAPSHOT` error,
    ///   in-memory state untouched
    pub async fn load(&self) -> StoreResult<()> {
        let mut cart = self.cart.lock().await;

        debug!(key = CART_STORAGE_KEY, "Loading persisted cart snapshot");

        let Some(raw) = self.backend.get(CART_STORAGE_KEY).await? else {
            debug!("No persisted snapshot, cart starts empty");
            return Ok(());
        };

        let items: Vec<LineItem> =
            serde_json::from_str(&raw).map_err(StoreError::malformed_snapshot)?;
        let loaded = Cart::from_items(items)?;

        debug!(items = loaded.item_count(), "Cart hydrated from storage");

        *cart = loaded;
        self.publish(&cart);
        Ok(())
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Candidate id already in cart: that line's quantity goes up by
    ///   one; its title, image and price are kept as first added
    /// - Candidate id not in cart: appended with quantity 1
    ///
    /// The full updated sequence is persisted before consumers see it.
    pub async fn add_to_cart(&self, candidate: NewLineItem) -> StoreResult<()> {
        validate_candidate(&candidate).map_err(CartError::from)?;

        debug!(id = %candidate.id, "add_to_cart");

        let mut cart = self.cart.lock().await;
        let mut next = cart.clone();
        next.add(candidate);

        self.commit(&mut cart, next).await
    }

    /// Increases the quantity of the line-item with the given id by one.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `NOT_FOUND` when no line-item matches the id
    pub async fn increment(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "increment");

        let mut cart = self.cart.lock().await;
        let mut next = cart.clone();
        next.increment(id)?;

        self.commit(&mut cart, next).await
    }

    /// Decreases the quantity of the line-item with the given id by one.
    ///
    /// No floor: the quantity may reach zero or go negative, and the
    /// line-item stays in the cart.
    pub async fn decrement(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "decrement");

        let mut cart = self.cart.lock().await;
        let mut next = cart.clone();
        next.decrement(id)?;

        self.commit(&mut cart, next).await
    }

    /// Returns the current snapshot of the cart sequence.
    ///
    /// A fresh clone per call; mutating it has no effect on the store.
    pub fn products(&self) -> Vec<LineItem> {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribes to cart changes.
    ///
    /// The receiver observes every published snapshot, each a new
    /// sequence value. This is the re-render trigger for UI consumers.
    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.snapshot_tx.subscribe()
    }

    /// Persists `next`, and only on success makes it the live cart and
    /// publishes it. A failed write leaves memory and consumers on the
    /// previous state.
    async fn commit(&self, current: &mut Cart, next: Cart) -> StoreResult<()> {
        let raw = serde_json::to_string(next.items())
            .map_err(|e| StoreError::internal(format!("snapshot serialization failed: {}", e)))?;

        self.backend.set(CART_STORAGE_KEY, &raw).await?;

        *current = next;
        self.publish(current);
        Ok(())
    }

    fn publish(&self, cart: &Cart) {
        self.snapshot_tx.send_replace(cart.items().to_vec());
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use async_trait::async_trait;
    use satchel_storage::{MemoryStore, StorageError, StorageResult};

    fn candidate(id: &str, price_cents: i64) -> NewLineItem {
        NewLineItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://cdn.example.com/{}.png", id),
            price_cents,
        }
    }

    fn memory_store() -> (Arc<MemoryStore>, CartStore) {
        let backend = Arc::new(MemoryStore::new());
        let store = CartStore::new(backend.clone());
        (backend, store)
    }

    /// Backend whose writes always fail, for divergence tests.
    #[derive(Debug)]
    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Internal("write refused".to_string()))
        }

        async fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_add_single_product() {
        let (_, store) = memory_store();

        store.add_to_cart(candidate("a", 1000)).await.unwrap();

        let products = store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "a");
        assert_eq!(products[0].quantity, 1);
        assert_eq!(products[0].price_cents, 1000);
    }

    #[tokio::test]
    async fn test_add_two_distinct_products_in_order() {
        let (_, store) = memory_store();

        store.add_to_cart(candidate("a", 1000)).await.unwrap();
        store.add_to_cart(candidate("b", 2500)).await.unwrap();

        let products = store.products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "a");
        assert_eq!(products[1].id, "b");
        assert!(products.iter().all(|p| p.quantity == 1));
    }

    #[tokio::test]
    async fn test_add_same_product_twice_merges() {
        let (_, store) = memory_store();

        store.add_to_cart(candidate("a", 1000)).await.unwrap();
        store.add_to_cart(candidate("a", 1000)).await.unwrap();

        let products = store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_increment_and_decrement() {
        let (_, store) = memory_store();
        store.add_to_cart(candidate("a", 1000)).await.unwrap();

        store.increment("a").await.unwrap();
        assert_eq!(store.products()[0].quantity, 2);

        store.decrement("a").await.unwrap();
        store.decrement("a").await.unwrap();
        // Quantity 0: the line stays, unclamped.
        assert_eq!(store.products()[0].quantity, 0);
        assert_eq!(store.products().len(), 1);

        store.decrement("a").await.unwrap();
        assert_eq!(store.products()[0].quantity, -1);
    }

    #[tokio::test]
    async fn test_increment_unknown_id_is_not_found() {
        let (_, store) = memory_store();

        let err = store.increment("missing").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_invalid_candidate_is_rejected() {
        let (_, store) = memory_store();

        let err = store
            .add_to_cart(candidate("", 1000))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_load_with_no_snapshot_is_empty() {
        let (_, store) = memory_store();

        store.load().await.unwrap();
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_persistence_round_trip() {
        let (backend, store) = memory_store();

        store.add_to_cart(candidate("a", 1000)).await.unwrap();
        store.add_to_cart(candidate("b", 2500)).await.unwrap();
        store.increment("b").await.unwrap();

        // A second store over the same backend hydrates deep-equal state.
        let reloaded = CartStore::new(backend);
        reloaded.load().await.unwrap();

        assert_eq!(reloaded.products(), store.products());
    }

    #[tokio::test]
    async fn test_malformed_snapshot_fails_loudly() {
        let (backend, store) = memory_store();
        backend.set(CART_STORAGE_KEY, "not json").await.unwrap();

        let err = store.load().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedSnapshot);
        // State is untouched.
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_ids_in_snapshot_fail_loudly() {
        let (backend, store) = memory_store();
        let raw = r#"[
            {"id":"a","title":"One","imageUrl":"u","priceCents":100,"quantity":1},
            {"id":"a","title":"Two","imageUrl":"u","priceCents":200,"quantity":1}
        ]"#;
        backend.set(CART_STORAGE_KEY, raw).await.unwrap();

        let err = store.load().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedSnapshot);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_memory_unchanged() {
        let store = CartStore::new(Arc::new(FailingStore));

        let err = store.add_to_cart(candidate("a", 1000)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);

        // The mutation never became visible.
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_subscriber_sees_new_snapshot() {
        let (_, store) = memory_store();
        let mut rx = store.subscribe();

        store.add_to_cart(candidate("a", 1000)).await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);
        assert_eq!(rx.borrow()[0].id, "a");
    }

    #[tokio::test]
    async fn test_concurrent_increments_both_land() {
        let (_, store) = memory_store();
        let store = Arc::new(store);
        store.add_to_cart(candidate("a", 1000)).await.unwrap();

        let (left, right) = tokio::join!(store.increment("a"), store.increment("a"));
        left.unwrap();
        right.unwrap();

        assert_eq!(store.products()[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_end_to_end_over_sqlite() {
        use satchel_storage::{Storage, StorageConfig};

        // RUST_LOG=debug cargo test -- test_end_to_end shows the full trace
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let storage = Storage::new(StorageConfig::in_memory()).await.unwrap();
        let kv = Arc::new(storage.kv());

        let store = CartStore::new(kv.clone());
        store.load().await.unwrap();
        store.add_to_cart(candidate("a", 1000)).await.unwrap();
        store.add_to_cart(candidate("a", 1000)).await.unwrap();
        store.add_to_cart(candidate("b", 2500)).await.unwrap();
        store.decrement("b").await.unwrap();

        // The persisted value is a JSON array of line-items under the
        // fixed key.
        let raw = kv.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        let parsed: Vec<LineItem> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);

        // A fresh store over the same database hydrates the same state.
        let reloaded = CartStore::new(kv);
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.products(), store.products());
        assert_eq!(reloaded.products()[0].quantity, 2);
        assert_eq!(reloaded.products()[1].quantity, 0);
    }
}
