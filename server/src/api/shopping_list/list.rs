use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use larder_core::ShoppingItem;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    pub items: Vec<ShoppingItem>,
    pub checked_count: usize,
}

#[utoipa::path(
    get,
    path = "/api/shopping-list",
    tag = "shopping_list",
    responses(
        (status = 200, description = "Shopping list items", body = ShoppingListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_items(State(state): State<AppState>) -> impl IntoResponse {
    match state.kitchen.list_shopping() {
        Ok(items) => {
            let checked_count = items.iter().filter(|i| i.checked).count();
            Json(ShoppingListResponse {
                items,
                checked_count,
            })
            .into_response()
        }
        Err(e) => store_error("Failed to load shopping list", e),
    }
}
