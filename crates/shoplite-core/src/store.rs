//! # Store Module
//!
//! The checkout engine. Owns the catalog, the cart, the discount ledger,
//! and the append-only order history, and runs every state transition so
//! callers have a single mutual-exclusion boundary.
//!
//! ## Checkout Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        checkout(code?)                                  │
//! │                                                                         │
//! │  1. Reject empty cart (state untouched)                                 │
//! │  2. raw total = Σ (line price × quantity)                               │
//! │  3. code supplied AND live in ledger?                                   │
//! │       yes ──► discount = raw × rate, code removed (single use)          │
//! │       no  ──► no discount, code silently ignored                        │
//! │  4. counter += 1, build Order (id = counter)                            │
//! │  5. append Order to history, clear the cart                             │
//! │  6. counter % interval == 0 ──► mint new code into the ledger           │
//! │                                                                         │
//! │  Output: { order, generated coupon code? }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! `Store` is deliberately synchronous and `&mut self`-based. The server
//! wraps it in one `Mutex`, which serializes the whole read-modify-write
//! sequence and preserves the counter/ledger/cart invariants under
//! parallel requests.

use chrono::Utc;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::ledger::{CodeGenerator, DiscountLedger, UuidCodeGenerator};
use crate::stats::collect_stats;
use crate::types::{CartLine, CheckoutReceipt, Item, Order, StoreStats};
use crate::{DEFAULT_DISCOUNT_INTERVAL, DEFAULT_DISCOUNT_RATE_BPS};

// =============================================================================
// Store
// =============================================================================

/// The complete in-memory shop state machine.
///
/// Generic over the code generator so tests can inject a deterministic
/// one; production uses [`UuidCodeGenerator`].
#[derive(Debug)]
pub struct Store<G = UuidCodeGenerator> {
    catalog: Catalog,
    cart: Cart,
    ledger: DiscountLedger,
    orders: Vec<Order>,
    generator: G,
    discount_interval: u64,
    discount_rate_bps: u32,
}

impl<G: CodeGenerator> Store<G> {
    /// Creates a store with the default promotion rules
    /// (every 3rd order mints a code; redeeming one takes 10% off).
    pub fn new(catalog: Catalog, generator: G) -> Self {
        Store::with_rules(
            catalog,
            generator,
            DEFAULT_DISCOUNT_INTERVAL,
            DEFAULT_DISCOUNT_RATE_BPS,
        )
    }

    /// Creates a store with explicit promotion rules.
    ///
    /// An interval of 0 makes no sense (and would divide by zero); it is
    /// clamped to 1, meaning every order mints a code.
    pub fn with_rules(
        catalog: Catalog,
        generator: G,
        discount_interval: u64,
        discount_rate_bps: u32,
    ) -> Self {
        Store {
            catalog,
            cart: Cart::new(),
            ledger: DiscountLedger::new(),
            orders: Vec::new(),
            generator,
            discount_interval: discount_interval.max(1),
            discount_rate_bps,
        }
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Returns the catalog items.
    pub fn items(&self) -> &[Item] {
        self.catalog.items()
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds a catalog item to the cart.
    ///
    /// ## Errors
    /// - `ItemNotFound` if the id is not in the catalog
    /// - quantity errors per [`Cart::add`]
    pub fn add_to_cart(&mut self, item_id: &str, quantity: i64) -> CoreResult<Vec<CartLine>> {
        let item = self.catalog.get(item_id)?.clone();
        self.cart.add(&item, quantity)?;
        Ok(self.cart.snapshot())
    }

    /// Sets the quantity of a cart line (0 removes it).
    pub fn update_cart_quantity(
        &mut self,
        item_id: &str,
        quantity: i64,
    ) -> CoreResult<Vec<CartLine>> {
        self.cart.update_quantity(item_id, quantity)?;
        Ok(self.cart.snapshot())
    }

    /// Removes a line from the cart.
    pub fn remove_from_cart(&mut self, item_id: &str) -> CoreResult<Vec<CartLine>> {
        self.cart.remove(item_id)?;
        Ok(self.cart.snapshot())
    }

    /// Returns the current cart lines.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.snapshot()
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Runs the checkout sequence.
    ///
    /// ## Arguments
    /// * `discount_code` - Optional code to redeem. An unknown or already
    ///   redeemed code does NOT fail the checkout; the order simply goes
    ///   through at full price.
    ///
    /// ## Errors
    /// `EmptyCart` if there is nothing to check out. In that case no state
    /// changes: counter, ledger, and history are untouched.
    pub fn checkout(&mut self, discount_code: Option<&str>) -> CoreResult<CheckoutReceipt> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let raw_total = self.cart.subtotal();

        let mut redeemed_code = None;
        let mut discount_amount = None;
        if let Some(code) = discount_code {
            if self.ledger.redeem(code) {
                let amount = raw_total.percentage_of(self.discount_rate_bps);
                redeemed_code = Some(code.to_string());
                discount_amount = Some(amount);
            }
        }

        let final_total = match discount_amount {
            Some(amount) => raw_total - amount,
            None => raw_total,
        };

        let order_id = self.ledger.next_order_id();
        let order = Order {
            id: order_id,
            lines: self.cart.snapshot(),
            total_cents: final_total.cents(),
            discount_code: redeemed_code,
            discount_amount_cents: discount_amount.map(|m| m.cents()),
            created_at: Utc::now(),
        };

        self.orders.push(order.clone());
        self.cart.clear();

        let generated_coupon_code = if order_id % self.discount_interval == 0 {
            Some(self.ledger.mint(&mut self.generator))
        } else {
            None
        };

        Ok(CheckoutReceipt {
            order,
            generated_coupon_code,
        })
    }

    // -------------------------------------------------------------------------
    // History & Stats
    // -------------------------------------------------------------------------

    /// Returns the full order history, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up a single historical order by id.
    pub fn order(&self, id: u64) -> CoreResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or(CoreError::OrderNotFound(id))
    }

    /// Number of successful checkouts so far.
    pub fn order_count(&self) -> u64 {
        self.ledger.order_count()
    }

    /// Folds the order history and ledger into aggregate statistics.
    pub fn stats(&self) -> StoreStats {
        collect_stats(&self.orders, &self.ledger)
    }
}

impl Default for Store<UuidCodeGenerator> {
    fn default() -> Self {
        Store::new(Catalog::seeded(), UuidCodeGenerator)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic generator handing out CODE-1, CODE-2, ...
    struct SequenceGenerator {
        next: u64,
    }

    impl CodeGenerator for SequenceGenerator {
        fn generate(&mut self) -> String {
            self.next += 1;
            format!("CODE-{}", self.next)
        }
    }

    fn test_store() -> Store<SequenceGenerator> {
        Store::new(Catalog::seeded(), SequenceGenerator { next: 0 })
    }

    /// Adds one line and checks out, returning the receipt.
    fn quick_checkout(store: &mut Store<SequenceGenerator>) -> CheckoutReceipt {
        store.add_to_cart("1", 1).unwrap();
        store.checkout(None).unwrap()
    }

    #[test]
    fn test_checkout_without_discount() {
        let mut store = test_store();
        store.add_to_cart("1", 2).unwrap(); // $10.00 x 2

        let receipt = store.checkout(None).unwrap();

        assert_eq!(receipt.order.id, 1);
        assert_eq!(receipt.order.total_cents, 2000);
        assert!(receipt.order.discount_code.is_none());
        assert!(receipt.order.discount_amount_cents.is_none());
        assert!(receipt.generated_coupon_code.is_none());
        assert!(store.cart_lines().is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_fails_and_changes_nothing() {
        let mut store = test_store();

        let err = store.checkout(None).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));

        assert_eq!(store.order_count(), 0);
        assert!(store.orders().is_empty());
        assert!(store.stats().discount_codes.is_empty());
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut store = test_store();
        let err = store.add_to_cart("99", 1).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(_)));
    }

    #[test]
    fn test_every_third_checkout_mints_a_code() {
        let mut store = test_store();

        assert!(quick_checkout(&mut store).generated_coupon_code.is_none());
        assert!(quick_checkout(&mut store).generated_coupon_code.is_none());

        let third = quick_checkout(&mut store);
        assert_eq!(third.generated_coupon_code.as_deref(), Some("CODE-1"));

        // The minted code is immediately live in the ledger
        assert_eq!(store.stats().discount_codes, vec!["CODE-1".to_string()]);

        // Orders 4 and 5 mint nothing; order 6 mints again
        assert!(quick_checkout(&mut store).generated_coupon_code.is_none());
        assert!(quick_checkout(&mut store).generated_coupon_code.is_none());
        assert_eq!(
            quick_checkout(&mut store).generated_coupon_code.as_deref(),
            Some("CODE-2")
        );
    }

    #[test]
    fn test_redeeming_a_live_code_takes_ten_percent_off() {
        let mut store = test_store();

        // Earn a code with three checkouts
        quick_checkout(&mut store);
        quick_checkout(&mut store);
        let code = quick_checkout(&mut store).generated_coupon_code.unwrap();

        store.add_to_cart("2", 1).unwrap(); // $20.00
        let receipt = store.checkout(Some(&code)).unwrap();

        assert_eq!(receipt.order.total_cents, 1800); // exactly 10% off
        assert_eq!(receipt.order.discount_amount_cents, Some(200));
        assert_eq!(receipt.order.discount_code.as_deref(), Some(code.as_str()));

        // Single use: the code is gone from the ledger
        assert!(!store.stats().discount_codes.contains(&code));
    }

    #[test]
    fn test_redeemed_code_cannot_be_reused() {
        let mut store = test_store();

        quick_checkout(&mut store);
        quick_checkout(&mut store);
        let code = quick_checkout(&mut store).generated_coupon_code.unwrap();

        store.add_to_cart("1", 1).unwrap();
        store.checkout(Some(&code)).unwrap();

        // Second use: silently ignored, full price
        store.add_to_cart("1", 1).unwrap();
        let receipt = store.checkout(Some(&code)).unwrap();
        assert_eq!(receipt.order.total_cents, 1000);
        assert!(receipt.order.discount_code.is_none());
        assert!(receipt.order.discount_amount_cents.is_none());
    }

    #[test]
    fn test_unknown_code_is_silently_ignored() {
        let mut store = test_store();
        store.add_to_cart("3", 2).unwrap(); // $60.00

        let receipt = store.checkout(Some("BOGUS")).unwrap();

        assert_eq!(receipt.order.total_cents, 6000);
        assert!(receipt.order.discount_code.is_none());
        assert!(receipt.order.discount_amount_cents.is_none());
    }

    #[test]
    fn test_order_ids_are_sequential_and_unique() {
        let mut store = test_store();

        for expected in 1..=5u64 {
            let receipt = quick_checkout(&mut store);
            assert_eq!(receipt.order.id, expected);
        }
        assert_eq!(store.order_count(), 5);
    }

    #[test]
    fn test_order_history_lookup() {
        let mut store = test_store();
        quick_checkout(&mut store);
        quick_checkout(&mut store);

        assert_eq!(store.orders().len(), 2);
        assert_eq!(store.order(2).unwrap().id, 2);
        assert!(matches!(
            store.order(99).unwrap_err(),
            CoreError::OrderNotFound(99)
        ));
    }

    #[test]
    fn test_interval_of_one_mints_every_time() {
        let mut store = Store::with_rules(
            Catalog::seeded(),
            SequenceGenerator { next: 0 },
            1,
            DEFAULT_DISCOUNT_RATE_BPS,
        );

        store.add_to_cart("1", 1).unwrap();
        let receipt = store.checkout(None).unwrap();
        assert!(receipt.generated_coupon_code.is_some());
    }
}
