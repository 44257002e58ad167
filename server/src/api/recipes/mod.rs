pub mod details;
pub mod missing;
pub mod saved;
pub mod search;
pub mod videos;

use crate::api::error_response;
use crate::AppState;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post, put};
use axum::Router;
use larder_core::recipes::{RecipeDetail, RecipeError};
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search_recipes))
        .route("/saved", get(saved::list_saved))
        .route("/{id}", get(details::get_recipe))
        .route(
            "/{id}/saved",
            put(saved::save_recipe).delete(saved::unsave_recipe),
        )
        .route(
            "/{id}/missing-to-shopping-list",
            post(missing::add_missing_to_shopping_list),
        )
        .route(
            "/{id}/videos",
            get(videos::list_videos).post(videos::add_video),
        )
}

/// Fetch and format one recipe, mapping every failure to a response.
pub(crate) async fn fetch_recipe(state: &AppState, id: i64) -> Result<RecipeDetail, Response> {
    match state.recipes.details(id).await {
        Ok(Some(info)) => Ok(RecipeDetail::from(info)),
        Ok(None) => Err(error_response(StatusCode::NOT_FOUND, "Recipe not found")),
        Err(RecipeError::NotConfigured(reason)) => {
            tracing::warn!(recipe_id = id, "Recipe lookup skipped: {}", reason);
            Err(error_response(StatusCode::NOT_FOUND, "Recipe not found"))
        }
        Err(e) => {
            tracing::error!(recipe_id = id, "Failed to fetch recipe: {}", e);
            Err(error_response(
                StatusCode::BAD_GATEWAY,
                "Failed to fetch recipe details",
            ))
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        search::search_recipes,
        details::get_recipe,
        saved::list_saved,
        saved::save_recipe,
        saved::unsave_recipe,
        missing::add_missing_to_shopping_list,
        videos::list_videos,
        videos::add_video,
    ),
    components(schemas(
        search::RecipeListing,
        search::SearchResponse,
        details::RecipeDetailResponse,
        saved::SavedRecipesResponse,
        saved::SaveRecipeResponse,
        missing::MissingToShoppingResponse,
        videos::CustomVideoListResponse,
    ))
)]
pub struct ApiDoc;
