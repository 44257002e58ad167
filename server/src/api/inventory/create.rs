use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder_core::{InventoryItem, NewInventoryItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateInventoryRequest {
    pub items: Vec<NewInventoryItem>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateInventoryResponse {
    pub items: Vec<InventoryItem>,
}

#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = "inventory",
    request_body = CreateInventoryRequest,
    responses(
        (status = 201, description = "Items added", body = CreateInventoryResponse),
        (status = 400, description = "Invalid item", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_items(
    State(state): State<AppState>,
    Json(request): Json<CreateInventoryRequest>,
) -> impl IntoResponse {
    if request.items.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "At least one item is required");
    }

    let today = state.kitchen.today();
    let shelf_life = state.kitchen.shelf_life_days();

    let drafts = match request
        .items
        .into_iter()
        .map(|item| item.into_draft(today, shelf_life))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(drafts) => drafts,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.kitchen.add_items(drafts) {
        Ok(items) => (StatusCode::CREATED, Json(CreateInventoryResponse { items })).into_response(),
        Err(e) => store_error("Failed to add inventory items", e),
    }
}
