use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use larder_core::InventoryItem;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MoveToInventoryResponse {
    /// Inventory items created from the checked entries
    pub moved: Vec<InventoryItem>,
}

#[utoipa::path(
    post,
    path = "/api/shopping-list/move-to-inventory",
    tag = "shopping_list",
    responses(
        (status = 200, description = "Checked items moved to inventory", body = MoveToInventoryResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn move_to_inventory(State(state): State<AppState>) -> impl IntoResponse {
    match state.kitchen.move_checked_to_inventory() {
        Ok(moved) => Json(MoveToInventoryResponse { moved }).into_response(),
        Err(e) => store_error("Failed to move checked items to inventory", e),
    }
}
