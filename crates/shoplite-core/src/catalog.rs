//! # Catalog Module
//!
//! The fixed, read-only list of purchasable items.
//!
//! The catalog is defined at startup and never changes while the process
//! runs. There is intentionally no add/update/delete surface.

use crate::error::{CoreError, CoreResult};
use crate::types::Item;

// =============================================================================
// Catalog
// =============================================================================

/// Static list of purchasable items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates a catalog from an arbitrary item list.
    ///
    /// Used by tests and by deployments that want different seed data.
    pub fn new(items: Vec<Item>) -> Self {
        Catalog { items }
    }

    /// Returns the default demo catalog.
    ///
    /// Three items with whole-dollar prices:
    ///
    /// | id | name      | price  |
    /// |----|-----------|--------|
    /// | 1  | Product 1 | $10.00 |
    /// | 2  | Product 2 | $20.00 |
    /// | 3  | Product 3 | $30.00 |
    pub fn seeded() -> Self {
        Catalog::new(vec![
            Item::new("1", "Product 1", 1000),
            Item::new("2", "Product 2", 2000),
            Item::new("3", "Product 3", 3000),
        ])
    }

    /// Returns all items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    ///
    /// ## Errors
    /// `CoreError::ItemNotFound` if no item has the given id.
    pub fn get(&self, item_id: &str) -> CoreResult<&Item> {
        self.items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::seeded()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
