//! # Catalog Routes

use axum::extract::State;
use axum::Json;
use shoplite_core::Item;
use tracing::debug;

use crate::state::AppState;

/// Lists the catalog.
///
/// ## Returns
/// The fixed item list defined at startup.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    debug!("list_items");
    Json(state.with_store(|s| s.items().to_vec()))
}
