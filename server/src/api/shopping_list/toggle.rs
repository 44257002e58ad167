use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::ShoppingItem;

#[utoipa::path(
    post,
    path = "/api/shopping-list/{id}/toggle",
    tag = "shopping_list",
    params(
        ("id" = i64, Path, description = "Shopping list item ID")
    ),
    responses(
        (status = 200, description = "Checked flag flipped", body = ShoppingItem),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn toggle_item(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.kitchen.toggle_shopping(id) {
        Ok(Some(item)) => Json(item).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Item not found"),
        Err(e) => store_error("Failed to update item", e),
    }
}
