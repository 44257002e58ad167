pub mod classify;
pub mod expiry;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Stateless helpers over the categorizer and the expiry classifier.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/classify", get(classify::classify_item))
        .route("/api/expiry", get(expiry::check_expiry))
}

#[derive(OpenApi)]
#[openapi(
    paths(classify::classify_item, expiry::check_expiry),
    components(schemas(classify::ClassifyResponse, expiry::ExpiryResponse))
)]
pub struct ApiDoc;
