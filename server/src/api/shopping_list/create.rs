use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder_core::{ShoppingDraft, ShoppingItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShoppingListRequest {
    pub items: Vec<ShoppingDraft>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateShoppingListResponse {
    pub items: Vec<ShoppingItem>,
}

#[utoipa::path(
    post,
    path = "/api/shopping-list",
    tag = "shopping_list",
    request_body = CreateShoppingListRequest,
    responses(
        (status = 201, description = "Items created", body = CreateShoppingListResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_items(
    State(state): State<AppState>,
    Json(request): Json<CreateShoppingListRequest>,
) -> impl IntoResponse {
    if request.items.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "At least one item is required");
    }

    match state.kitchen.add_shopping_many(request.items) {
        Ok(items) => (
            StatusCode::CREATED,
            Json(CreateShoppingListResponse { items }),
        )
            .into_response(),
        Err(e) => store_error("Failed to create shopping list item", e),
    }
}
