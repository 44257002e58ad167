use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::recipes::{
    parse_ingredient_list, RecipeError, RecipeSummary, SearchQuery, SearchResult,
    DEFAULT_RESULT_COUNT,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Comma-separated ingredient names
    pub ingredients: Option<String>,
    /// Use every inventory item name as the ingredient list
    #[serde(default)]
    pub from_inventory: bool,
    /// Free-text search, used when no ingredients are given
    pub query: Option<String>,
    /// Results per page (default 12)
    pub number: Option<u32>,
    pub offset: Option<u32>,
    pub diet: Option<String>,
    pub cuisine: Option<String>,
}

/// An ingredient match or a free-text hit, depending on the search kind.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RecipeListing {
    Match(RecipeSummary),
    Result(SearchResult),
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct SearchResponse {
    pub recipes: Vec<RecipeListing>,
    /// Total matches upstream, for free-text searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn upstream_failure(e: RecipeError) -> axum::response::Response {
    match e {
        RecipeError::NotConfigured(reason) => {
            tracing::warn!("Recipe search skipped: {}", reason);
            Json(SearchResponse::default()).into_response()
        }
        e => {
            tracing::error!("Recipe search failed: {}", e);
            error_response(StatusCode::BAD_GATEWAY, "Failed to fetch recipes")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes/search",
    tag = "recipes",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching recipes", body = SearchResponse),
        (status = 502, description = "Recipe API failure", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let number = params.number.unwrap_or(DEFAULT_RESULT_COUNT);

    let ingredients = if params.from_inventory {
        match state.kitchen.list_inventory() {
            Ok(items) => Some(items.into_iter().map(|i| i.name).collect::<Vec<_>>()),
            Err(e) => return store_error("Failed to load inventory", e),
        }
    } else {
        params.ingredients.as_deref().map(parse_ingredient_list)
    };

    if let Some(ingredients) = ingredients {
        if ingredients.is_empty() {
            return Json(SearchResponse::default()).into_response();
        }
        return match state.recipes.find_by_ingredients(&ingredients, number).await {
            Ok(hits) => Json(SearchResponse {
                recipes: hits
                    .into_iter()
                    .map(|hit| RecipeListing::Match(RecipeSummary::from(hit)))
                    .collect(),
                ..SearchResponse::default()
            })
            .into_response(),
            Err(e) => upstream_failure(e),
        };
    }

    let Some(text) = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    else {
        return Json(SearchResponse {
            message: Some("Provide ingredients or query parameter".to_string()),
            ..SearchResponse::default()
        })
        .into_response();
    };

    let query = SearchQuery {
        offset: params.offset.unwrap_or(0),
        diet: params.diet,
        cuisine: params.cuisine,
        ..SearchQuery::new(text, number)
    };

    match state.recipes.search(&query).await {
        Ok(page) => Json(SearchResponse {
            total: Some(page.total_results),
            recipes: page
                .results
                .into_iter()
                .map(|hit| RecipeListing::Result(SearchResult::from(hit)))
                .collect(),
            message: None,
        })
        .into_response(),
        Err(e) => upstream_failure(e),
    }
}
