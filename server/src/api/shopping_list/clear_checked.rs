use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearCheckedResponse {
    pub deleted_count: usize,
}

#[utoipa::path(
    delete,
    path = "/api/shopping-list/clear-checked",
    tag = "shopping_list",
    responses(
        (status = 200, description = "Checked items cleared", body = ClearCheckedResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn clear_checked(State(state): State<AppState>) -> impl IntoResponse {
    match state.kitchen.clear_checked() {
        Ok(deleted_count) => Json(ClearCheckedResponse { deleted_count }).into_response(),
        Err(e) => store_error("Failed to clear checked items", e),
    }
}
