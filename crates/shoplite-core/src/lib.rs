//! # shoplite-core: Pure Business Logic for Shoplite
//!
//! This crate is the **heart** of Shoplite. It contains the whole
//! checkout/discount state machine as pure, synchronous code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplite Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/server)                       │   │
//! │  │    /api/items  /api/cart  /api/checkout  /api/admin/stats      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ one Mutex<Store>                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoplite-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────┐ ┌────────┐ ┌─────────┐   │   │
//! │  │   │ catalog │ │  cart   │ │ ledger │ │ store  │ │  stats  │   │   │
//! │  │   │  Item   │ │CartLine │ │ codes  │ │checkout│ │  fold   │   │   │
//! │  │   └─────────┘ └─────────┘ │counter │ │ engine │ └─────────┘   │   │
//! │  │                           └────────┘ └────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Item, CartLine, Order, ...)
//! - [`error`] - Domain error types
//! - [`catalog`] - Fixed, read-only item list
//! - [`cart`] - The pending-purchase line list
//! - [`ledger`] - Live discount codes + the order counter
//! - [`store`] - The checkout engine tying everything together
//! - [`stats`] - Aggregate statistics over order history
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic given its inputs
//!    (code minting takes the generator as an explicit argument)
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shoplite_core::{Catalog, Store, UuidCodeGenerator};
//!
//! let mut store = Store::new(Catalog::seeded(), UuidCodeGenerator::default());
//!
//! store.add_to_cart("1", 2).unwrap();
//! let receipt = store.checkout(None).unwrap();
//!
//! // Item "1" costs $10.00; two of them, no discount
//! assert_eq!(receipt.order.total_cents, 2000);
//! assert!(receipt.order.discount_amount_cents.is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod stats;
pub mod store;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shoplite_core::Money` instead of
// `use shoplite_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use ledger::{CodeGenerator, DiscountLedger, UuidCodeGenerator};
pub use money::Money;
pub use stats::collect_stats;
pub use store::Store;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Every Nth successful checkout mints a new discount code.
///
/// ## Business Reason
/// The demo's promotion rule: every 3rd order earns the customer a
/// single-use coupon for a future purchase. Configurable at `Store`
/// construction; this is the default.
pub const DEFAULT_DISCOUNT_INTERVAL: u64 = 3;

/// Discount rate applied when a live code is redeemed, in basis points.
///
/// 1 basis point = 0.01%, so 1000 bps = 10%.
pub const DEFAULT_DISCOUNT_RATE_BPS: u32 = 1000;

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps transaction sizes reasonable.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
