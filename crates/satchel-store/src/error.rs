//! # Store Error Type
//!
//! Unified error type for the consumer-facing cart surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Satchel                                │
//! │                                                                         │
//! │  UI Consumer                 Rust Store                                 │
//! │  ───────────                 ──────────                                 │
//! │                                                                         │
//! │  cart.increment("x")                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Store Operation                                                 │  │
//! │  │  Result<T, StoreError>                                           │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Cart Error? ──── CartError::ItemNotFound ──────┐                │  │
//! │  │         │                                       │                │  │
//! │  │         ▼                                       ▼                │  │
//! │  │  Storage Error? ── StorageError::QueryFailed ── StoreError ────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  { code: "NOT_FOUND", message: "No line-item in cart with id: x" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! UI consumers receive a machine-readable `code` for programmatic
//! handling and a human-readable `message` for display.

use serde::Serialize;

use satchel_core::CartError;
use satchel_storage::StorageError;

/// Error returned from cart store operations and the context accessor.
///
/// ## Serialization
/// This is what a UI consumer receives when an operation fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "No line-item in cart with id: shirt-01"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for store responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await cart.increment(id);
/// } catch (e) {
///   switch (e.code) {
///     case 'NOT_FOUND':
///       refreshCart();
///       break;
///     case 'NO_PROVIDER':
///       // programming error: accessor used outside the provider
///       throw e;
///     default:
///       showError(e.message);
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No line-item with the given id
    NotFound,

    /// Candidate field validation failed
    ValidationError,

    /// Persistence read/write failed
    StorageError,

    /// Persisted snapshot could not be parsed into a valid cart
    MalformedSnapshot,

    /// Accessor used with no active provider
    NoProvider,

    /// Internal store error
    Internal,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StoreError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not-found error for a line-item id.
    pub fn not_found(id: &str) -> Self {
        StoreError::new(
            ErrorCode::NotFound,
            format!("No line-item in cart with id: {}", id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a malformed-snapshot error with a parse diagnostic.
    pub fn malformed_snapshot(detail: impl std::fmt::Display) -> Self {
        StoreError::new(
            ErrorCode::MalformedSnapshot,
            format!("Persisted cart snapshot is malformed: {}", detail),
        )
    }

    /// Creates the context-misuse error.
    pub fn no_provider() -> Self {
        StoreError::new(
            ErrorCode::NoProvider,
            "cart() must be called within an active CartProvider",
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::Internal, message)
    }
}

/// Converts cart domain errors to store errors.
impl From<CartError> for StoreError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::ItemNotFound { id } => StoreError::not_found(&id),
            // A duplicate id can only enter through a hydrated snapshot,
            // so it surfaces as snapshot corruption.
            CartError::DuplicateId { id } => {
                StoreError::malformed_snapshot(format!("duplicate line-item id '{}'", id))
            }
            CartError::Validation(e) => StoreError::validation(e.to_string()),
        }
    }
}

/// Converts storage errors to store errors.
impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(_) => {
                StoreError::new(ErrorCode::StorageError, "Storage connection failed")
            }
            StorageError::MigrationFailed(_) => {
                StoreError::new(ErrorCode::StorageError, "Storage migration failed")
            }
            StorageError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Storage query failed: {}", e);
                StoreError::new(ErrorCode::StorageError, "Storage operation failed")
            }
            StorageError::PoolExhausted => {
                StoreError::new(ErrorCode::StorageError, "Storage pool exhausted")
            }
            StorageError::Internal(e) => {
                tracing::error!("Internal storage error: {}", e);
                StoreError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_code_and_message() {
        let err = StoreError::not_found("shirt-01");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "No line-item in cart with id: shirt-01");
    }

    #[test]
    fn test_cart_error_conversion() {
        let err: StoreError = CartError::ItemNotFound {
            id: "x".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: StoreError = CartError::DuplicateId {
            id: "x".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::MalformedSnapshot);
    }

    #[test]
    fn test_storage_error_conversion_hides_detail() {
        let err: StoreError = StorageError::QueryFailed("secret path".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("secret path"));
    }

    #[test]
    fn test_error_code_serialization() {
        let err = StoreError::no_provider();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NO_PROVIDER");
        assert!(json["message"].as_str().unwrap().contains("CartProvider"));
    }
}
