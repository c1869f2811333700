//! # Validation Module
//!
//! Field validation for `add_to_cart` candidates.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store boundary (Rust)                                        │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: candidate field validation                           │
//! │                                                                         │
//! │  Quantity itself is never validated: the cart contract permits        │
//! │  zero and negative quantities after decrement.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use satchel_core::validation::validate_candidate;
//! use satchel_core::NewLineItem;
//!
//! let candidate = NewLineItem {
//!     id: "shirt-01".into(),
//!     title: "Shirt".into(),
//!     image_url: "https://cdn.example.com/shirt.png".into(),
//!     price_cents: 1000,
//! };
//! validate_candidate(&candidate).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::NewLineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length for a product id.
pub const MAX_ID_LEN: usize = 64;

/// Maximum length for a product title.
pub const MAX_TITLE_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
///
/// ## Example
/// ```rust
/// use satchel_core::validation::validate_product_id;
///
/// assert!(validate_product_id("shirt-01").is_ok());
/// assert!(validate_product_id("   ").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.len() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must not be negative (zero is fine: free items exist)
pub fn validate_unit_price(price_cents: i64) -> ValidationResult<()> {
    if price_cents < 0 {
        return Err(ValidationError::Negative {
            field: "price_cents".to_string(),
        });
    }

    Ok(())
}

/// Validates an entire `add_to_cart` candidate.
///
/// Checks fields in declaration order and reports the first failure.
pub fn validate_candidate(candidate: &NewLineItem) -> ValidationResult<()> {
    validate_product_id(&candidate.id)?;
    validate_title(&candidate.title)?;
    validate_unit_price(candidate.price_cents)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
