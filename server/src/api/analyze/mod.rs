pub mod analyze_image;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/analyze-image", post(analyze_image::analyze_image))
}

#[derive(OpenApi)]
#[openapi(
    paths(analyze_image::analyze_image),
    components(schemas(
        analyze_image::AnalyzeImageRequest,
        analyze_image::AnalyzeImageResponse,
        analyze_image::ParseFailureResponse,
    ))
)]
pub struct ApiDoc;
