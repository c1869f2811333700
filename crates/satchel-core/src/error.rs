//! # Error Types
//!
//! Domain-specific error types for satchel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  satchel-core errors (this file)                                       │
//! │  ├── CartError        - Cart mutation / invariant failures             │
//! │  └── ValidationError  - Candidate field validation failures            │
//! │                                                                         │
//! │  satchel-storage errors (separate crate)                               │
//! │  └── StorageError     - Persistence operation failures                 │
//! │                                                                         │
//! │  satchel-store errors (consumer surface)                               │
//! │  └── StoreError       - What UI consumers see (code + message)         │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → StoreError → UI                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending id, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart domain errors.
///
/// These represent invariant violations or mutations that cannot be
/// applied to the current sequence.
#[derive(Debug, Error)]
pub enum CartError {
    /// No line-item with the given id exists in the cart.
    ///
    /// ## When This Occurs
    /// - `increment`/`decrement` called with an id that was never added
    /// - The UI kept a stale id after the persisted key was cleared
    #[error("No line-item in cart with id: {id}")]
    ItemNotFound { id: String },

    /// Two line-items with the same id in one sequence.
    ///
    /// ## When This Occurs
    /// - Hydrating a snapshot that was written by something other than
    ///   this store (the id-uniqueness invariant only holds for
    ///   sequences this module produced)
    #[error("Duplicate line-item id in cart: {id}")]
    DuplicateId { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Candidate field validation errors.
///
/// These occur when an `add_to_cart` candidate doesn't meet field
/// requirements. Used for early validation before the cart is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::ItemNotFound {
            id: "shirt-01".to_string(),
        };
        assert_eq!(err.to_string(), "No line-item in cart with id: shirt-01");

        let err = CartError::DuplicateId {
            id: "shirt-01".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate line-item id in cart: shirt-01");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::Negative {
            field: "price_cents".to_string(),
        };
        assert_eq!(err.to_string(), "price_cents must not be negative");
    }

    #[test]
    fn test_validation_converts_to_cart_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let cart_err: CartError = validation_err.into();
        assert!(matches!(cart_err, CartError::Validation(_)));
    }
}
