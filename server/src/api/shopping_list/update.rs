use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::{ShoppingItem, ShoppingPatch};

#[utoipa::path(
    put,
    path = "/api/shopping-list/{id}",
    tag = "shopping_list",
    params(
        ("id" = i64, Path, description = "Shopping list item ID")
    ),
    request_body = ShoppingPatch,
    responses(
        (status = 200, description = "Item updated", body = ShoppingItem),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ShoppingPatch>,
) -> impl IntoResponse {
    match state.kitchen.update_shopping(id, patch) {
        Ok(Some(item)) => Json(item).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Item not found"),
        Err(e) => store_error("Failed to update item", e),
    }
}
