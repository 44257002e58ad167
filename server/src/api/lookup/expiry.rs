use crate::api::{error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use larder_core::expiry::{parse_expiry, urgency_label, ExpiryInfo};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExpiryParams {
    /// `YYYY-MM-DD`, RFC 3339, or "N days"
    pub date: Option<String>,
    /// Evaluate as of this date instead of the server's today
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryResponse {
    /// The parsed date, absent when unreadable
    pub expiry_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub info: ExpiryInfo,
    /// Short urgency label, absent when the date is unknown
    pub label: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/expiry",
    tag = "lookup",
    params(ExpiryParams),
    responses(
        (status = 200, description = "Expiry status for the date", body = ExpiryResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse)
    )
)]
pub async fn check_expiry(
    State(state): State<AppState>,
    Query(params): Query<ExpiryParams>,
) -> impl IntoResponse {
    let today = params.today.unwrap_or_else(|| state.kitchen.today());

    let Some(raw) = params.date.as_deref() else {
        return error_response(StatusCode::BAD_REQUEST, "date is required");
    };

    // unreadable dates are reported as unknown rather than rejected
    let expiry_date = parse_expiry(raw, today);
    let info = ExpiryInfo::compute(expiry_date, today);

    Json(ExpiryResponse {
        expiry_date,
        label: info.days_left.map(urgency_label),
        info,
    })
    .into_response()
}
