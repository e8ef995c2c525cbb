//! # Cart Module
//!
//! The mutable pending-purchase line list for the current session.
//!
//! ## Invariants
//! - Lines are unique by `item_id` (adding the same item merges quantities)
//! - Quantity is always >= 1 (updating a line to 0 removes it)
//! - Maximum distinct lines: [`crate::MAX_CART_LINES`]
//! - Maximum quantity per line: [`crate::MAX_LINE_QUANTITY`]

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, Item};
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// One cart per process; the demo has a single implicit session and no
/// multi-user isolation.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a catalog item to the cart, merging into an existing line.
    ///
    /// ## Behavior
    /// - If the item is already in the cart: its quantity increases
    /// - Otherwise: a new line is appended with the item's data frozen
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity < 1`
    /// - `QuantityTooLarge` if the merged quantity would exceed the maximum
    /// - `CartTooLarge` if a new line would exceed the line limit
    pub fn add(&mut self, item: &Item, quantity: i64) -> CoreResult<()> {
        if quantity < 1 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::from_item(item, quantity));
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the line
    /// - Item not in cart: returns `ItemNotFound`
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove(item_id);
        }

        if quantity < 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
            Ok(())
        } else {
            Err(CoreError::ItemNotFound(item_id.to_string()))
        }
    }

    /// Removes a line from the cart by item id.
    pub fn remove(&mut self, item_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.item_id != item_id);

        if self.lines.len() == initial_len {
            Err(CoreError::ItemNotFound(item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Returns the current lines without mutating state.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Clears all lines. Invoked by a successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the cart subtotal (Σ price × quantity).
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
