//! # Domain Types
//!
//! Core domain types used throughout Shoplite.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    CartLine     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  item_id        │   │  id (sequential)│       │
//! │  │  name           │   │  name snapshot  │   │  lines snapshot │       │
//! │  │  price_cents    │   │  price snapshot │   │  total_cents    │       │
//! │  └─────────────────┘   │  quantity       │   │  discount info  │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartLine` freezes the item's name and price at the moment it enters
//! the cart, and an `Order` freezes the whole line list at checkout time.
//! Orders are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A purchasable catalog item.
///
/// Immutable, defined at startup. Unit price is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Business identifier, unique within the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Item {
    /// Creates a new catalog item.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart: one distinct item id plus a quantity.
///
/// ## Invariants
/// - `quantity >= 1`
/// - At most one line per item id in a cart (adding the same item again
///   merges into the existing line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Item id this line refers to.
    pub item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a new cart line from a catalog item and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. A catalog edit after the fact
    /// would not change lines already in the cart.
    pub fn from_item(item: &Item, quantity: i64) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An immutable historical record of a completed checkout.
///
/// Appended to the append-only order history; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential order id, equal to the order counter after increment.
    /// Strictly increasing, never reused.
    pub id: u64,

    /// Snapshot of the cart lines at checkout time.
    pub lines: Vec<CartLine>,

    /// Final total in cents (after any discount).
    pub total_cents: i64,

    /// The discount code that was redeemed on this order, if any.
    /// Absent when no code was supplied or the supplied code was not live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,

    /// Amount deducted by the redeemed code, in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount_cents: Option<i64>,

    /// When the checkout completed.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Total quantity of items across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Final total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Checkout Receipt
// =============================================================================

/// Result of a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    /// The order that was just created.
    pub order: Order,

    /// A freshly minted discount code, present iff this checkout was the
    /// Nth one (counter divisible by the discount interval). The code is
    /// already live in the ledger and redeemable on a future order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_coupon_code: Option<String>,
}

// =============================================================================
// Store Stats
// =============================================================================

/// Aggregate statistics over the order history, for the admin view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    /// Total quantity of items across every order ever placed.
    pub items_purchased: i64,

    /// Sum of final order totals, in cents.
    pub total_purchase_amount_cents: i64,

    /// Sum of discount amounts actually granted, in cents.
    pub total_discount_amount_cents: i64,

    /// Discount codes currently live (minted and not yet redeemed).
    pub discount_codes: Vec<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
