use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    delete,
    path = "/api/videos/{id}",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Custom video ID")
    ),
    responses(
        (status = 204, description = "Video removed"),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
pub async fn delete_video(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.kitchen.delete_video(id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Video not found"),
        Err(e) => store_error("Failed to delete video", e),
    }
}
