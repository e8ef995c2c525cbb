//! # Checkout Route

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use shoplite_core::CheckoutReceipt;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for checkout. `{}` means "no code".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub discount_code: Option<String>,
}

/// Runs the checkout flow against the current cart.
///
/// ## Behavior
/// - Empty cart: 400, nothing changes
/// - Live discount code supplied: 10% off, code consumed (single use)
/// - Unknown or stale code: silently ignored, full price
/// - Every Nth order: response carries a freshly minted coupon code
pub async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutReceipt>, ApiError> {
    debug!(code_supplied = req.discount_code.is_some(), "checkout");

    let receipt = state.with_store_mut(|s| s.checkout(req.discount_code.as_deref()))?;

    info!(
        order_id = receipt.order.id,
        total_cents = receipt.order.total_cents,
        discount_applied = receipt.order.discount_amount_cents.is_some(),
        minted_code = receipt.generated_coupon_code.is_some(),
        "Order placed"
    );

    Ok(Json(receipt))
}
