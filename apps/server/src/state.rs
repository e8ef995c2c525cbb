//! # Application State
//!
//! Shared state for the HTTP handlers.
//!
//! ## Thread Safety
//! The whole Store sits behind one `Arc<Mutex<_>>`:
//! 1. Axum handlers run concurrently across the tokio runtime
//! 2. The counter/ledger/cart invariants require the checkout
//!    read-modify-write sequence to be atomic
//! 3. Operations are quick in-memory transitions, so one mutex around
//!    everything beats fine-grained locking here
//!
//! ## Why Not RwLock?
//! Most operations mutate (add-to-cart, checkout). A RwLock would add
//! complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use shoplite_core::{Catalog, Store, UuidCodeGenerator};

use crate::config::ServerConfig;

// =============================================================================
// Admin Credentials
// =============================================================================

/// Precomputed Basic credential check for the admin endpoints.
///
/// The expected `Authorization` header value is computed once at startup;
/// each request is a string comparison. Deliberately nothing more: the
/// admin login is a hardcoded credential pair, not an auth system.
#[derive(Debug)]
pub struct AdminCredentials {
    expected_header: String,
}

impl AdminCredentials {
    /// Builds the expected `Basic <base64(user:password)>` header value.
    pub fn new(user: &str, password: &str) -> Self {
        let encoded = BASE64.encode(format!("{}:{}", user, password));
        AdminCredentials {
            expected_header: format!("Basic {}", encoded),
        }
    }

    /// Checks a request's `Authorization` header value.
    pub fn authorize(&self, header: Option<&str>) -> bool {
        header == Some(self.expected_header.as_str())
    }
}

// =============================================================================
// App State
// =============================================================================

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
    admin: Arc<AdminCredentials>,
}

impl AppState {
    /// Builds the state from server configuration: seeded catalog, empty
    /// cart and ledger, random code generator.
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = Store::with_rules(
            Catalog::seeded(),
            UuidCodeGenerator,
            config.discount_interval,
            config.discount_rate_bps,
        );
        AppState {
            store: Arc::new(Mutex::new(store)),
            admin: Arc::new(AdminCredentials::new(
                &config.admin_user,
                &config.admin_password,
            )),
        }
    }

    /// Executes a function with read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// The closure runs entirely inside the lock, so a checkout's whole
    /// read-modify-write sequence is serialized against other requests.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }

    /// Access to the admin credential check.
    pub fn admin(&self) -> &AdminCredentials {
        &self.admin
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::from_config(&ServerConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
