//! # Route Handlers
//!
//! One module per resource, mirroring the API surface:
//!
//! ```text
//! routes/
//! ├── mod.rs      ◄─── You are here (exports + /health)
//! ├── catalog.rs  ◄─── Item listing
//! ├── cart.rs     ◄─── Cart retrieval and mutation
//! ├── checkout.rs ◄─── The checkout flow
//! └── admin.rs    ◄─── Stats and order history (Basic auth)
//! ```
//!
//! Every handler follows the same shape: `debug!` on entry, one
//! lock-scoped call into the core, `Json` out or `ApiError`.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
