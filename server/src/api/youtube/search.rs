use crate::api::{error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::video::{Video, VideoError, DEFAULT_MAX_RESULTS};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct VideoSearchParams {
    /// Dish name
    pub q: Option<String>,
    /// At most this many videos (default 5)
    pub max_results: Option<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VideoSearchResponse {
    pub videos: Vec<Video>,
}

#[utoipa::path(
    get,
    path = "/api/youtube/search",
    tag = "videos",
    params(VideoSearchParams),
    responses(
        (status = 200, description = "Cooking videos", body = VideoSearchResponse),
        (status = 400, description = "Missing query", body = ErrorResponse),
        (status = 500, description = "Video search not configured", body = ErrorResponse),
        (status = 502, description = "YouTube API failure", body = ErrorResponse)
    )
)]
pub async fn search_videos(
    State(state): State<AppState>,
    Query(params): Query<VideoSearchParams>,
) -> impl IntoResponse {
    let Some(query) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Query required");
    };

    let max_results = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    match state.videos.search(query, max_results).await {
        Ok(videos) => Json(VideoSearchResponse { videos }).into_response(),
        Err(VideoError::NotConfigured) => {
            tracing::warn!("Video search requested but YouTube API key not configured");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                VideoError::NotConfigured.to_string(),
            )
        }
        Err(e) => {
            tracing::error!("YouTube search failed: {}", e);
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}
