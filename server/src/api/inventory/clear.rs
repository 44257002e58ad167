use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

#[utoipa::path(
    delete,
    path = "/api/inventory",
    tag = "inventory",
    responses(
        (status = 204, description = "Inventory cleared"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn clear_items(State(state): State<AppState>) -> impl IntoResponse {
    match state.kitchen.clear_inventory() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_error("Failed to clear inventory", e),
    }
}
