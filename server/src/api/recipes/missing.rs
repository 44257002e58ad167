use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use larder_core::ShoppingItem;
use serde::Serialize;
use utoipa::ToSchema;

use super::fetch_recipe;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissingToShoppingResponse {
    /// Newly listed items; ingredients already on the list are skipped
    pub added: Vec<ShoppingItem>,
    pub missing_count: usize,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/missing-to-shopping-list",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Missing ingredients listed", body = MissingToShoppingResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 502, description = "Recipe API failure", body = ErrorResponse)
    )
)]
pub async fn add_missing_to_shopping_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let recipe = match fetch_recipe(&state, id).await {
        Ok(recipe) => recipe,
        Err(response) => return response,
    };

    let inventory = match state.kitchen.list_inventory() {
        Ok(items) => items,
        Err(e) => return store_error("Failed to load inventory", e),
    };

    let recipe_match = recipe.match_against(inventory.iter().map(|i| i.name.as_str()));
    let missing = recipe.missing_with_amounts(&recipe_match);

    match state.kitchen.add_missing_from_recipe(&recipe.name, &missing) {
        Ok(added) => Json(MissingToShoppingResponse {
            added,
            missing_count: missing.len(),
        })
        .into_response(),
        Err(e) => store_error("Failed to update shopping list", e),
    }
}
