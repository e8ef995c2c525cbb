//! # Cart Routes
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                    │
//! │  │  Empty   │────►│ Has lines│────►│  Checked out │                    │
//! │  │  Cart    │     │          │     │  (cart reset)│                    │
//! │  └──────────┘     └──────────┘     └──────────────┘                    │
//! │                        │                  ▲                             │
//! │                   add_to_cart        POST /api/checkout                 │
//! │                   update_cart_line   (checkout.rs)                      │
//! │                   remove_from_cart                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use shoplite_core::CartLine;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Cart response: the lines plus derived totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<Vec<CartLine>> for CartResponse {
    fn from(lines: Vec<CartLine>) -> Self {
        let total_quantity = lines.iter().map(|l| l.quantity).sum();
        let subtotal_cents = lines.iter().map(|l| l.line_total().cents()).sum();
        CartResponse {
            lines,
            total_quantity,
            subtotal_cents,
        }
    }
}

/// Request body for add-to-cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub item_id: String,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i64>,
}

/// Request body for setting a line quantity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub item_id: String,
    /// 0 removes the line.
    pub quantity: i64,
}

/// Request body for removing a line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub item_id: String,
}

/// Gets the current cart contents.
pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    debug!("get_cart");
    Json(CartResponse::from(state.with_store(|s| s.cart_lines())))
}

/// Adds a catalog item to the cart.
///
/// ## Behavior
/// - Item already in cart: quantity increases, never a duplicate line
/// - Item not in cart: appended with name and price frozen
///
/// ## Errors
/// 404 for an unknown item id, 400 for an invalid quantity.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let quantity = req.quantity.unwrap_or(1);
    debug!(item_id = %req.item_id, quantity, "add_to_cart");

    let lines = state.with_store_mut(|s| s.add_to_cart(&req.item_id, quantity))?;
    Ok(Json(CartResponse::from(lines)))
}

/// Sets the quantity of a cart line (0 removes it).
pub async fn update_cart_line(
    State(state): State<AppState>,
    Json(req): Json<UpdateCartRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(item_id = %req.item_id, quantity = req.quantity, "update_cart_line");

    let lines = state.with_store_mut(|s| s.update_cart_quantity(&req.item_id, req.quantity))?;
    Ok(Json(CartResponse::from(lines)))
}

/// Removes a line from the cart.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Json(req): Json<RemoveFromCartRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(item_id = %req.item_id, "remove_from_cart");

    let lines = state.with_store_mut(|s| s.remove_from_cart(&req.item_id))?;
    Ok(Json(CartResponse::from(lines)))
}
