//! # satchel-core: Pure Cart Logic for Satchel
//!
//! This crate is the **heart** of Satchel. It contains the cart domain
//! as pure types and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Satchel Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Components                                │   │
//! │  │    Product List ──► Cart Screen ──► Quantity Controls          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartContext accessor                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    satchel-store                                │   │
//! │  │    CartStore: load, add_to_cart, increment, decrement          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ satchel-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │   error   │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Cart    │  │ CartError │  │   rules   │  │   │
//! │  │   │NewLineItem│  │ mutations │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    satchel-storage                              │   │
//! │  │         Key-value persistence over a local SQLite file          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line-item types ([`LineItem`], [`NewLineItem`])
//! - [`cart`] - The [`Cart`] sequence and its mutation operations
//! - [`error`] - Domain error types
//! - [`validation`] - Candidate field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every mutation is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Unit prices are minor currency units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use satchel_core::{Cart, NewLineItem};
//!
//! let mut cart = Cart::new();
//! cart.add(NewLineItem {
//!     id: "shirt-01".into(),
//!     title: "Shirt".into(),
//!     image_url: "https://cdn.example.com/shirt.png".into(),
//!     price_cents: 1000,
//! });
//!
//! // Adding the same product again merges into the existing line
//! assert_eq!(cart.item_count(), 1);
//! cart.increment("shirt-01").unwrap();
//! assert_eq!(cart.total_quantity(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use satchel_core::Cart` instead of
// `use satchel_core::cart::Cart`

pub use cart::Cart;
pub use error::{CartError, ValidationError};
pub use types::{LineItem, NewLineItem};
