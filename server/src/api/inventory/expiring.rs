use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use larder_core::expiry::{
    expiring_soon, ExpiringItem, ExpirySummary, DEFAULT_EXPIRING_LIMIT,
    DEFAULT_EXPIRING_WINDOW_DAYS,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ExpiringParams {
    /// Days ahead to look (default 7)
    pub window: Option<i64>,
    /// Maximum items returned (default 5)
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringResponse {
    /// Soonest first, already expired included
    pub items: Vec<ExpiringItem>,
    pub expired_count: usize,
    pub urgent_count: usize,
}

#[utoipa::path(
    get,
    path = "/api/inventory/expiring",
    tag = "inventory",
    params(ExpiringParams),
    responses(
        (status = 200, description = "Items expiring soon", body = ExpiringResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn expiring_items(
    State(state): State<AppState>,
    Query(params): Query<ExpiringParams>,
) -> impl IntoResponse {
    let items = match state.kitchen.list_inventory() {
        Ok(items) => items,
        Err(e) => return store_error("Failed to load inventory", e),
    };

    let today = state.kitchen.today();
    let summary = ExpirySummary::tally(&items, today);
    let expiring = expiring_soon(
        &items,
        today,
        params.window.unwrap_or(DEFAULT_EXPIRING_WINDOW_DAYS),
        params.limit.unwrap_or(DEFAULT_EXPIRING_LIMIT),
    );

    Json(ExpiringResponse {
        items: expiring,
        expired_count: summary.expired,
        urgent_count: summary.urgent,
    })
    .into_response()
}
