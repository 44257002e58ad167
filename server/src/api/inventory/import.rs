use crate::api::{error_response, store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::import::{
    parse_bank_statement, parse_inventory_csv, FoodPurchase, SkippedRow, Transaction,
};
use larder_core::{InventoryDraft, InventoryItem};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ImportParams {
    /// Parse and report without adding anything
    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportResponse {
    pub drafts: Vec<InventoryDraft>,
    pub skipped: Vec<SkippedRow>,
    /// Empty on a dry run
    pub added: Vec<InventoryItem>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankImportResponse {
    pub food: Vec<FoodPurchase>,
    pub ignored: Vec<Transaction>,
    pub skipped: Vec<SkippedRow>,
    pub drafts: Vec<InventoryDraft>,
    /// Empty on a dry run
    pub added: Vec<InventoryItem>,
}

fn add_unless_dry_run(
    state: &AppState,
    drafts: &[InventoryDraft],
    dry_run: bool,
) -> Result<Vec<InventoryItem>, axum::response::Response> {
    if dry_run || drafts.is_empty() {
        return Ok(Vec::new());
    }
    state
        .kitchen
        .add_items(drafts.to_vec())
        .map_err(|e| store_error("Failed to add imported items", e))
}

#[utoipa::path(
    post,
    path = "/api/inventory/import/csv",
    tag = "inventory",
    params(ImportParams),
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "CSV imported", body = CsvImportResponse),
        (status = 400, description = "Unreadable CSV", body = ErrorResponse)
    )
)]
pub async fn import_csv(
    State(state): State<AppState>,
    Query(params): Query<ImportParams>,
    body: String,
) -> impl IntoResponse {
    let import = match parse_inventory_csv(
        body.as_bytes(),
        state.kitchen.today(),
        state.kitchen.shelf_life_days(),
    ) {
        Ok(import) => import,
        Err(e) => {
            tracing::warn!("Rejected inventory CSV: {}", e);
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let added = match add_unless_dry_run(&state, &import.drafts, params.dry_run) {
        Ok(added) => added,
        Err(response) => return response,
    };

    Json(CsvImportResponse {
        drafts: import.drafts,
        skipped: import.skipped,
        added,
    })
    .into_response()
}

#[utoipa::path(
    post,
    path = "/api/inventory/import/bank-statement",
    tag = "inventory",
    params(ImportParams),
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Statement imported", body = BankImportResponse),
        (status = 400, description = "Unreadable statement", body = ErrorResponse)
    )
)]
pub async fn import_bank_statement(
    State(state): State<AppState>,
    Query(params): Query<ImportParams>,
    body: String,
) -> impl IntoResponse {
    let import = match parse_bank_statement(
        body.as_bytes(),
        state.kitchen.today(),
        state.kitchen.shelf_life_days(),
    ) {
        Ok(import) => import,
        Err(e) => {
            tracing::warn!("Rejected bank statement: {}", e);
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let added = match add_unless_dry_run(&state, &import.drafts, params.dry_run) {
        Ok(added) => added,
        Err(response) => return response,
    };

    Json(BankImportResponse {
        food: import.food,
        ignored: import.ignored,
        skipped: import.skipped,
        drafts: import.drafts,
        added,
    })
    .into_response()
}
