use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = i64, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.kitchen.delete_item(id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Item not found"),
        Err(e) => store_error("Failed to delete item", e),
    }
}
