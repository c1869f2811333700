//! # Cart
//!
//! The ordered, id-unique sequence of line-items and its mutations.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Mutations (pure)                                │
//! │                                                                         │
//! │  UI Action             Operation              Sequence Change           │
//! │  ─────────             ─────────              ───────────────           │
//! │                                                                         │
//! │  Tap "Add" ──────────► add(candidate) ──────► merge or append          │
//! │                                                                         │
//! │  Tap "+" ────────────► increment(id) ───────► items[i].quantity + 1    │
//! │                                                                         │
//! │  Tap "−" ────────────► decrement(id) ───────► items[i].quantity − 1    │
//! │                                                                         │
//! │  NOTE: Persistence and publishing happen one layer up, in              │
//! │        satchel-store. This type never performs I/O.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CartError, CartResult};
use crate::types::{LineItem, NewLineItem};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product merges quantity)
/// - Insertion order is preserved; new items are appended
/// - No quantity floor: `decrement` may take a line to 0 or below, and
///   the line stays in the sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from a persisted sequence of line-items.
    ///
    /// ## Invariant Check
    /// The id-uniqueness invariant is enforced here because the input
    /// comes from storage, which this module does not exclusively
    /// control at the file level.
    ///
    /// ## Returns
    /// - `Ok(Cart)` when every id is unique
    /// - `Err(CartError::DuplicateId)` naming the first repeated id
    pub fn from_items(items: Vec<LineItem>) -> CartResult<Self> {
        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|other| other.id == item.id) {
                return Err(CartError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }
        Ok(Cart { items })
    }

    /// Adds a candidate to the cart, merging with an existing entry.
    ///
    /// ## Behavior
    /// - Candidate id already present: the existing entry's quantity
    ///   goes up by one. Its title, image and price are **kept** — a
    ///   repeat add never updates display fields.
    /// - Candidate id not present: appended with `quantity = 1`.
    pub fn add(&mut self, candidate: NewLineItem) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == candidate.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(LineItem::from_candidate(candidate));
    }

    /// Increases the quantity of the line-item with the given id by one.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CartError::ItemNotFound)` when no line-item matches
    pub fn increment(&mut self, id: &str) -> CartResult<()> {
        self.adjust_quantity(id, 1)
    }

    /// Decreases the quantity of the line-item with the given id by one.
    ///
    /// No floor is applied: the quantity may reach zero or go negative,
    /// and the line-item is never removed here.
    pub fn decrement(&mut self, id: &str) -> CartResult<()> {
        self.adjust_quantity(id, -1)
    }

    fn adjust_quantity(&mut self, id: &str, delta: i64) -> CartResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CartError::ItemNotFound { id: id.to_string() })?;

        item.quantity += delta;
        Ok(())
    }

    /// Returns the line-items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of unique line-items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all line-items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (sum of line totals) in minor units.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, price_cents: i64) -> NewLineItem {
        NewLineItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://cdn.example.com/{}.png", id),
            price_cents,
        }
    }

    #[test]
    fn test_add_two_distinct_products() {
        let mut cart = Cart::new();
        cart.add(candidate("a", 1000));
        cart.add(candidate("b", 2500));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items()[0].id, "a");
        assert_eq!(cart.items()[1].id, "b");
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[1].quantity, 1);
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let mut cart = Cart::new();
        cart.add(candidate("a", 1000));
        cart.add(candidate("a", 1000));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_repeat_add_keeps_existing_fields() {
        let mut cart = Cart::new();
        cart.add(candidate("a", 1000));

        // Same id, different display data: the first entry wins.
        let mut changed = candidate("a", 9999);
        changed.title = "Renamed".to_string();
        cart.add(changed);

        let item = &cart.items()[0];
        assert_eq!(item.quantity, 2);
        assert_eq!(item.title, "Product a");
        assert_eq!(item.price_cents, 1000);
    }

    #[test]
    fn test_increment_existing() {
        let mut cart = Cart::new();
        cart.add(candidate("a", 1000));
        cart.add(candidate("b", 2000));

        cart.increment("a").unwrap();

        assert_eq!(cart.items()[0].quantity, 2);
        // Other line-items are untouched.
        assert_eq!(cart.items()[1].quantity, 1);
    }

    #[test]
    fn test_increment_unknown_id_fails() {
        let mut cart = Cart::new();
        cart.add(candidate("a", 1000));

        let err = cart.increment("missing").unwrap_err();
        assert!(matches!(err, CartError::ItemNotFound { id } if id == "missing"));
    }

    #[test]
    fn test_decrement_to_zero_keeps_item() {
        let mut cart = Cart::new();
        cart.add(candidate("a", 1000));

        cart.decrement("a").unwrap();

        // Quantity 0: not removed, not clamped.
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 0);
    }

    #[test]
    fn test_decrement_below_zero_is_allowed() {
        let mut cart = Cart::new();
        cart.add(candidate("a", 1000));

        cart.decrement("a").unwrap();
        cart.decrement("a").unwrap();

        assert_eq!(cart.items()[0].quantity, -1);
    }

    #[test]
    fn test_decrement_unknown_id_fails() {
        let mut cart = Cart::new();
        let err = cart.decrement("missing").unwrap_err();
        assert!(matches!(err, CartError::ItemNotFound { .. }));
    }

    #[test]
    fn test_from_items_accepts_unique_ids() {
        let items = vec![
            LineItem::from_candidate(candidate("a", 1000)),
            LineItem::from_candidate(candidate("b", 2000)),
        ];
        let cart = Cart::from_items(items).unwrap();
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_from_items_rejects_duplicate_ids() {
        let items = vec![
            LineItem::from_candidate(candidate("a", 1000)),
            LineItem::from_candidate(candidate("a", 1000)),
        ];
        let err = Cart::from_items(items).unwrap_err();
        assert!(matches!(err, CartError::DuplicateId { id } if id == "a"));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(candidate("a", 1000));
        cart.add(candidate("a", 1000));
        cart.add(candidate("b", 250));

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal_cents(), 2250);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal_cents(), 0);
    }
}
