//! # Admin Routes
//!
//! Aggregate statistics and order history, behind the Basic credential
//! check. The check is a static header comparison; there is no session
//! or token machinery in this demo.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use shoplite_core::{Order, StoreStats};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects the request unless the Authorization header matches the
/// configured admin credentials.
fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let supplied = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if state.admin().authorize(supplied) {
        Ok(())
    } else {
        Err(ApiError::unauthorized())
    }
}

/// Aggregate purchase statistics.
///
/// ## Returns
/// Items purchased, total purchase amount, total discount granted, and
/// the currently live discount codes.
pub async fn stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StoreStats>, ApiError> {
    debug!("admin stats");
    require_admin(&state, &headers)?;

    Ok(Json(state.with_store(|s| s.stats())))
}

/// Full order history, oldest first.
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Order>>, ApiError> {
    debug!("admin list_orders");
    require_admin(&state, &headers)?;

    Ok(Json(state.with_store(|s| s.orders().to_vec())))
}

/// A single historical order by id.
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<Order>, ApiError> {
    debug!(order_id = id, "admin get_order");
    require_admin(&state, &headers)?;

    let order = state.with_store(|s| s.order(id).cloned())?;
    Ok(Json(order))
}
