use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipesResponse {
    pub recipe_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeResponse {
    pub recipe_id: i64,
    /// False when the recipe was already saved
    pub newly_saved: bool,
}

#[utoipa::path(
    get,
    path = "/api/recipes/saved",
    tag = "recipes",
    responses(
        (status = 200, description = "Saved recipe IDs", body = SavedRecipesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_saved(State(state): State<AppState>) -> impl IntoResponse {
    match state.kitchen.saved_recipes() {
        Ok(recipe_ids) => Json(SavedRecipesResponse { recipe_ids }).into_response(),
        Err(e) => store_error("Failed to load saved recipes", e),
    }
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}/saved",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe saved", body = SaveRecipeResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn save_recipe(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.kitchen.save_recipe(id) {
        Ok(newly_saved) => Json(SaveRecipeResponse {
            recipe_id: id,
            newly_saved,
        })
        .into_response(),
        Err(e) => store_error("Failed to save recipe", e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/saved",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe unsaved"),
        (status = 404, description = "Recipe was not saved", body = ErrorResponse)
    )
)]
pub async fn unsave_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.kitchen.unsave_recipe(id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Recipe was not saved"),
        Err(e) => store_error("Failed to unsave recipe", e),
    }
}
