use crate::api::{error_response, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder_core::ai::{
    analyze_image as detect_items, detected_to_drafts, AiError, DetectedItem, ScanKind,
};
use larder_core::InventoryDraft;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const NOT_CONFIGURED_MESSAGE: &str =
    "Google AI API key not configured. Add GOOGLE_AI_API_KEY to your .env.local file.";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeImageRequest {
    /// `data:image/...;base64,...` URL
    pub image: String,
    /// "receipt" or "fridge" (default)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub items: Vec<DetectedItem>,
    /// Inventory drafts for every detected item, ready to add
    pub drafts: Vec<InventoryDraft>,
}

/// The model answered, but not with the JSON list we asked for.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParseFailureResponse {
    pub error: String,
    /// Model output as received
    pub raw: String,
}

#[utoipa::path(
    post,
    path = "/api/analyze-image",
    tag = "analyze",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, description = "Detected grocery items", body = AnalyzeImageResponse),
        (status = 400, description = "Missing or malformed image", body = ErrorResponse),
        (status = 500, description = "Not configured or unreadable model output", body = ParseFailureResponse),
        (status = 502, description = "Vision API failure", body = ErrorResponse)
    )
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeImageRequest>,
) -> impl IntoResponse {
    let Some(client) = state.vision.as_ref() else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED_MESSAGE);
    };

    if request.image.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No image provided");
    }

    let kind = ScanKind::from_type(request.kind.as_deref());
    match detect_items(client.as_ref(), &request.image, kind).await {
        Ok(items) => {
            let drafts = detected_to_drafts(
                &items,
                state.kitchen.today(),
                state.kitchen.shelf_life_days(),
            );
            Json(AnalyzeImageResponse { items, drafts }).into_response()
        }
        Err(AiError::InvalidImage(message)) => error_response(StatusCode::BAD_REQUEST, message),
        Err(AiError::NotConfigured(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED_MESSAGE)
        }
        Err(AiError::ParseError { message, raw }) => {
            tracing::error!("Failed to parse detected items: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ParseFailureResponse {
                    error: "Failed to parse detected items".to_string(),
                    raw,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Image analysis failed: {}", e);
            error_response(StatusCode::BAD_GATEWAY, "Failed to analyze image")
        }
    }
}
