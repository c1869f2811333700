//! # Line-Item Types
//!
//! The data model for cart entries.
//!
//! ## Type Relationship
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Line-Item Types                                 │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │    NewLineItem      │          │      LineItem       │              │
//! │  │  ─────────────────  │  add     │  ─────────────────  │              │
//! │  │  id                 │ ───────► │  id                 │              │
//! │  │  title              │  qty: 1  │  title              │              │
//! │  │  image_url          │          │  image_url          │              │
//! │  │  price_cents        │          │  price_cents        │              │
//! │  └─────────────────────┘          │  quantity           │              │
//! │                                   └─────────────────────┘              │
//! │                                                                         │
//! │  NewLineItem is what the product catalog hands over; LineItem is       │
//! │  what the cart stores and persists.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! These types define the persisted snapshot shape: the cart is saved as a
//! JSON array of `LineItem`s with camelCase keys. Changing a field here
//! changes the on-device format.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Identity
/// `id` is the product's unique identifier, supplied by the product
/// catalog. The cart holds at most one `LineItem` per `id`; adding the
/// same product again merges into the existing entry.
///
/// ## Quantity
/// `quantity` is signed. `decrement` applies no floor, so zero and
/// negative quantities are representable and must survive a persistence
/// round-trip. Cleanup of non-positive lines is a caller decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Unique product identifier.
    pub id: String,

    /// Display name shown in the cart UI.
    pub title: String,

    /// Display image reference.
    pub image_url: String,

    /// Unit price in minor currency units (cents).
    pub price_cents: i64,

    /// Count of units in the cart.
    pub quantity: i64,
}

// =============================================================================
// New Line Item (add candidate)
// =============================================================================

/// A line-item candidate: everything except the quantity.
///
/// This is the `add_to_cart` input. The cart assigns `quantity = 1` on
/// first add; on a repeat add the existing entry's fields win and only
/// the quantity moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewLineItem {
    /// Unique product identifier.
    pub id: String,

    /// Display name.
    pub title: String,

    /// Display image reference.
    pub image_url: String,

    /// Unit price in minor currency units (cents).
    pub price_cents: i64,
}

impl LineItem {
    /// Builds the initial cart entry for a candidate.
    pub fn from_candidate(candidate: NewLineItem) -> Self {
        LineItem {
            id: candidate.id,
            title: candidate.title,
            image_url: candidate.image_url,
            price_cents: candidate.price_cents,
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity) in minor units.
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> NewLineItem {
        NewLineItem {
            id: "shirt-01".to_string(),
            title: "Shirt".to_string(),
            image_url: "https://cdn.example.com/shirt.png".to_string(),
            price_cents: 1000,
        }
    }

    #[test]
    fn test_from_candidate_starts_at_quantity_one() {
        let item = LineItem::from_candidate(candidate());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, "shirt-01");
        assert_eq!(item.price_cents, 1000);
    }

    #[test]
    fn test_line_total() {
        let mut item = LineItem::from_candidate(candidate());
        item.quantity = 3;
        assert_eq!(item.line_total_cents(), 3000);
    }

    #[test]
    fn test_snapshot_shape_is_camel_case() {
        let item = LineItem::from_candidate(candidate());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], "shirt-01");
        assert_eq!(json["title"], "Shirt");
        assert_eq!(json["imageUrl"], "https://cdn.example.com/shirt.png");
        assert_eq!(json["priceCents"], 1000);
        assert_eq!(json["quantity"], 1);
    }

    #[test]
    fn test_round_trip_preserves_negative_quantity() {
        let mut item = LineItem::from_candidate(candidate());
        item.quantity = -2;

        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
