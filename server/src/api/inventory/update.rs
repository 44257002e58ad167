use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::InventoryPatch;

use super::list::InventoryItemResponse;

#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = i64, Path, description = "Inventory item ID")
    ),
    request_body = InventoryPatch,
    responses(
        (status = 200, description = "Item updated", body = InventoryItemResponse),
        (status = 400, description = "Invalid update", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<InventoryPatch>,
) -> impl IntoResponse {
    match state.kitchen.update_item(id, patch) {
        Ok(Some(item)) => {
            Json(InventoryItemResponse::new(item, state.kitchen.today())).into_response()
        }
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Item not found"),
        Err(e) => store_error("Failed to update item", e),
    }
}
