pub mod search;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/youtube endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search_videos))
}

#[derive(OpenApi)]
#[openapi(
    paths(search::search_videos),
    components(schemas(search::VideoSearchResponse))
)]
pub struct ApiDoc;
