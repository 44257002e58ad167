pub mod analyze;
pub mod inventory;
pub mod lookup;
pub mod recipes;
pub mod shopping_list;
pub mod testing;
pub mod videos;
pub mod youtube;


use crate::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use larder_core::StoreError;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// 400 for rejected input, otherwise a logged 500 saying what failed.
pub fn store_error(action: &str, e: StoreError) -> Response {
    match e {
        StoreError::Invalid(invalid) => error_response(StatusCode::BAD_REQUEST, invalid.to_string()),
        e => {
            tracing::error!("{}: {}", action, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, action)
        }
    }
}

/// Every API route, to be given the shared state.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/test", testing::router())
        .merge(lookup::router())
        .nest("/api/inventory", inventory::router())
        .nest("/api/shopping-list", shopping_list::router())
        .merge(analyze::router())
        .nest("/api/recipes", recipes::router())
        .nest("/api/videos", videos::router())
        .nest("/api/youtube", youtube::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Larder API", description = "Kitchen inventory and recipe discovery"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        testing::ApiDoc::openapi(),
        lookup::ApiDoc::openapi(),
        inventory::ApiDoc::openapi(),
        shopping_list::ApiDoc::openapi(),
        analyze::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        videos::ApiDoc::openapi(),
        youtube::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
