use crate::api::ErrorResponse;
use axum::{extract::Query, response::IntoResponse, Json};
use larder_core::categorize::{classify, Category};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ClassifyParams {
    /// Item name to categorize
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClassifyResponse {
    pub name: String,
    pub category: Category,
    /// Display label for the category
    pub label: String,
    pub icon: String,
}

#[utoipa::path(
    get,
    path = "/api/classify",
    tag = "lookup",
    params(ClassifyParams),
    responses(
        (status = 200, description = "Guessed category and icon", body = ClassifyResponse),
        (status = 400, description = "Missing name", body = ErrorResponse)
    )
)]
pub async fn classify_item(Query(params): Query<ClassifyParams>) -> impl IntoResponse {
    let details = classify(&params.name);
    Json(ClassifyResponse {
        name: params.name,
        category: details.category,
        label: details.category.label().to_string(),
        icon: details.icon.to_string(),
    })
}
