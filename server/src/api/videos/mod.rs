pub mod delete;

use crate::AppState;
use axum::routing::delete as delete_method;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/videos endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete_method(delete::delete_video))
}

#[derive(OpenApi)]
#[openapi(paths(delete::delete_video))]
pub struct ApiDoc;
