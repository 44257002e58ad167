use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use larder_core::recipes::RecipeDetail;
use larder_core::{missing_not_on_list, Readiness, RecipeMatch};
use serde::Serialize;
use utoipa::ToSchema;

use super::fetch_recipe;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailResponse {
    #[serde(flatten)]
    pub recipe: RecipeDetail,
    /// Ingredients on hand vs missing, against the current inventory
    pub inventory_match: RecipeMatch,
    pub readiness: Readiness,
    /// Missing ingredients not already on the shopping list
    pub missing_not_on_list: Vec<String>,
    pub saved: bool,
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeDetailResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 502, description = "Recipe API failure", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    let recipe = match fetch_recipe(&state, id).await {
        Ok(recipe) => recipe,
        Err(response) => return response,
    };

    let inventory = match state.kitchen.list_inventory() {
        Ok(items) => items,
        Err(e) => return store_error("Failed to load inventory", e),
    };
    let saved = match state.kitchen.is_saved(id) {
        Ok(saved) => saved,
        Err(e) => return store_error("Failed to load saved recipes", e),
    };
    let shopping = match state.kitchen.list_shopping() {
        Ok(items) => items,
        Err(e) => return store_error("Failed to load shopping list", e),
    };

    let inventory_match = recipe.match_against(inventory.iter().map(|i| i.name.as_str()));
    let missing_not_on_list = missing_not_on_list(&inventory_match, &shopping)
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(RecipeDetailResponse {
        readiness: inventory_match.readiness(),
        missing_not_on_list,
        inventory_match,
        saved,
        recipe,
    })
    .into_response()
}
