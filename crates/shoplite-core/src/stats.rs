//! # Stats Module
//!
//! Derives the admin summary statistics by folding over the order history.
//! No stored state of its own; an empty history yields all-zero results.

use crate::ledger::DiscountLedger;
use crate::types::{Order, StoreStats};

/// Folds the order history and ledger into a [`StoreStats`] summary.
///
/// - items purchased = Σ over orders of Σ over lines of quantity
/// - total purchase amount = Σ of final order totals
/// - total discount amount = Σ of granted discounts (absent counts as 0)
/// - discount codes = the ledger's currently live set
pub fn collect_stats(orders: &[Order], ledger: &DiscountLedger) -> StoreStats {
    StoreStats {
        items_purchased: orders.iter().map(|o| o.item_count()).sum(),
        total_purchase_amount_cents: orders.iter().map(|o| o.total_cents).sum(),
        total_discount_amount_cents: orders
            .iter()
            .filter_map(|o| o.discount_amount_cents)
            .sum(),
        discount_codes: ledger.live_codes(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
