use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::{CustomVideo, NewCustomVideo};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomVideoListResponse {
    pub videos: Vec<CustomVideo>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/videos",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Videos attached to the recipe", body = CustomVideoListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_videos(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.kitchen.videos_for_recipe(id) {
        Ok(videos) => Json(CustomVideoListResponse { videos }).into_response(),
        Err(e) => store_error("Failed to load videos", e),
    }
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/videos",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    request_body = NewCustomVideo,
    responses(
        (status = 201, description = "Video attached", body = CustomVideo),
        (status = 400, description = "Blank URL", body = ErrorResponse)
    )
)]
pub async fn add_video(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(video): Json<NewCustomVideo>,
) -> impl IntoResponse {
    match state.kitchen.add_video(id, video) {
        Ok(video) => (StatusCode::CREATED, Json(video)).into_response(),
        Err(e) => store_error("Failed to add video", e),
    }
}
