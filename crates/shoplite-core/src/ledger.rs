//! # Discount Ledger Module
//!
//! Tracks the set of currently redeemable discount codes plus the
//! monotonically increasing order counter.
//!
//! ## Code Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Discount Code Lifecycle                            │
//! │                                                                         │
//! │   checkout #N where N % interval == 0                                   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   mint() ──► code enters the live set ──► handed to the customer       │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │   a later checkout supplies the code                                    │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │   redeem() ──► removed from the live set, single-use, gone forever     │
//! │                                                                         │
//! │   Uniqueness invariant: no two live codes are ever equal.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use uuid::Uuid;

// =============================================================================
// Code Generation
// =============================================================================

/// Pluggable token generator for discount codes.
///
/// The ledger never bakes in a source of randomness; the generator is
/// injected so tests can use a deterministic implementation.
pub trait CodeGenerator {
    /// Produces a new opaque code token.
    fn generate(&mut self) -> String;
}

/// Default generator: random `DISCOUNT-xxxxxxxx` tokens from UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCodeGenerator;

impl CodeGenerator for UuidCodeGenerator {
    fn generate(&mut self) -> String {
        let token = Uuid::new_v4().simple().to_string();
        format!("DISCOUNT-{}", &token[..8])
    }
}

// =============================================================================
// Discount Ledger
// =============================================================================

/// Live discount codes + the order counter.
///
/// ## Invariants
/// - The counter only ever increases, by exactly 1 per successful checkout
/// - A redeemed code is removed and can never be redeemed again
#[derive(Debug, Clone, Default)]
pub struct DiscountLedger {
    codes: BTreeSet<String>,
    order_count: u64,
}

impl DiscountLedger {
    /// Creates an empty ledger with the counter at zero.
    pub fn new() -> Self {
        DiscountLedger::default()
    }

    /// Attempts to redeem a code.
    ///
    /// Returns `true` and removes the code iff it is currently live.
    /// An unknown or already-redeemed code returns `false`; the caller
    /// treats that as "no discount applies", not as an error.
    pub fn redeem(&mut self, code: &str) -> bool {
        self.codes.remove(code)
    }

    /// Mints a new code into the live set and returns it.
    ///
    /// Re-generates on the (vanishingly unlikely) collision with a live
    /// code so the uniqueness invariant holds even with a degenerate
    /// generator.
    pub fn mint<G: CodeGenerator>(&mut self, generator: &mut G) -> String {
        loop {
            let code = generator.generate();
            if self.codes.insert(code.clone()) {
                return code;
            }
        }
    }

    /// Increments the order counter and returns the new value.
    ///
    /// The returned value doubles as the new order's id.
    pub fn next_order_id(&mut self) -> u64 {
        self.order_count += 1;
        self.order_count
    }

    /// Number of successful checkouts so far.
    pub fn order_count(&self) -> u64 {
        self.order_count
    }

    /// Checks whether a code is currently redeemable.
    pub fn is_live(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Returns the currently live codes.
    pub fn live_codes(&self) -> Vec<String> {
        self.codes.iter().cloned().collect()
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

    impl SequenceGenerator {
        fn new() -> Self {
            SequenceGenerator { next: 0 }
        }
    }

    impl CodeGenerator for SequenceGenerator {
        fn generate(&mut self) -> String {
            self.next += 1;
            format!("CODE-{}", self.next)
        }
    }

    /// Degenerate generator that repeats itself before moving on.
    struct StutterGenerator {
        calls: u64,
    }

    impl CodeGenerator for StutterGenerator {
        fn generate(&mut self) -> String {
            self.calls += 1;
            // 1, 1, 2, 2, 3, 3, ...
            format!("CODE-{}", self.calls.div_ceil(2))
        }
    }

    #[test]
    fn test_mint_and_redeem_single_use() {
        let mut ledger = DiscountLedger::new();
        let mut generator = SequenceGenerator::new();

        let code = ledger.mint(&mut generator);
        assert!(ledger.is_live(&code));

        assert!(ledger.redeem(&code));
        assert!(!ledger.is_live(&code));

        // Second redemption of the same code must fail
        assert!(!ledger.redeem(&code));
    }

    #[test]
    fn test_redeem_unknown_code_is_false() {
        let mut ledger = DiscountLedger::new();
        assert!(!ledger.redeem("NOPE"));
    }

    #[test]
    fn test_mint_skips_live_duplicates() {
        let mut ledger = DiscountLedger::new();
        let mut generator = StutterGenerator { calls: 0 };

        let first = ledger.mint(&mut generator);
        let second = ledger.mint(&mut generator);

        assert_ne!(first, second);
        assert_eq!(ledger.live_codes().len(), 2);
    }

    #[test]
    fn test_counter_increments_by_one() {
        let mut ledger = DiscountLedger::new();
        assert_eq!(ledger.order_count(), 0);
        assert_eq!(ledger.next_order_id(), 1);
        assert_eq!(ledger.next_order_id(), 2);
        assert_eq!(ledger.order_count(), 2);
    }

    #[test]
    fn test_uuid_generator_format() {
        let mut generator = UuidCodeGenerator;
        let code = generator.generate();
        assert!(code.starts_with("DISCOUNT-"));
        assert_eq!(code.len(), "DISCOUNT-".len() + 8);
    }
}
