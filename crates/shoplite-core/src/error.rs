//! # Error Types
//!
//! Domain-specific error types for shoplite-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, limits, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! ## What is NOT an error
//! Supplying a discount code that is unknown or already redeemed is a
//! silent no-op at checkout: the order goes through at full price. Only
//! structurally invalid requests (unknown item, empty cart, bad quantity)
//! are rejected.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They are all
/// request-scoped: nothing here is fatal and nothing is retried internally.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The referenced item id does not exist in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Checkout was attempted with no lines in the cart.
    ///
    /// ## Guarantee
    /// When checkout fails with this error, no state has changed: the
    /// order counter, ledger, and history are untouched.
    #[error("Cart is empty")]
    EmptyCart,

    /// Add-to-cart quantity must be at least 1.
    #[error("Quantity must be at least 1, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// Line quantity exceeds the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Requested order id does not exist in the history.
    #[error("Order not found: {0}")]
    OrderNotFound(u64),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("42".to_string());
        assert_eq!(err.to_string(), "Item not found: 42");

        let err = CoreError::EmptyCart;
        assert_eq!(err.to_string(), "Cart is empty");

        let err = CoreError::QuantityTooLarge {
            requested: 5000,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 5000 exceeds maximum allowed (999)"
        );
    }
}
