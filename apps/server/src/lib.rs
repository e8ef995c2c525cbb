//! # Shoplite Server Library
//!
//! Axum HTTP API over the shoplite-core state machine.
//!
//! ## Module Organization
//! ```text
//! shoplite_server/
//! ├── lib.rs          ◄─── You are here (router assembly)
//! ├── main.rs         ◄─── Binary entry point (tracing, config, serve)
//! ├── config.rs       ◄─── Env-driven server configuration
//! ├── state.rs        ◄─── Shared Store state + admin credentials
//! ├── error.rs        ◄─── API error type for handlers
//! └── routes/
//!     ├── mod.rs      ◄─── Route module exports
//!     ├── catalog.rs  ◄─── GET  /api/items
//!     ├── cart.rs     ◄─── GET  /api/cart, POST /api/cart/*
//!     ├── checkout.rs ◄─── POST /api/checkout
//!     └── admin.rs    ◄─── GET  /api/admin/* (Basic auth)
//! ```
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP request ──► axum Router ──► handler                               │
//! │                                      │                                   │
//! │                                      ▼                                   │
//! │                        lock Mutex<Store> (one boundary                  │
//! │                        around the whole read-modify-write)              │
//! │                                      │                                   │
//! │                                      ▼                                   │
//! │                        core operation (synchronous, total)              │
//! │                                      │                                   │
//! │                                      ▼                                   │
//! │                        Json response or ApiError {code, message}        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Builds the full application router.
///
/// Kept separate from `main` so integration tests can drive the router
/// in-process without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/items", get(routes::catalog::list_items))
        .route("/api/cart", get(routes::cart::get_cart))
        .route("/api/cart/add", post(routes::cart::add_to_cart))
        .route("/api/cart/update", post(routes::cart::update_cart_line))
        .route("/api/cart/remove", post(routes::cart::remove_from_cart))
        .route("/api/checkout", post(routes::checkout::checkout))
        .route("/api/admin/stats", get(routes::admin::stats))
        .route("/api/admin/orders", get(routes::admin::list_orders))
        .route("/api/admin/orders/{id}", get(routes::admin::get_order))
        .with_state(state)
}
