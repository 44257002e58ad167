use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use larder_core::{Category, ExpirySummary};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryCount {
    pub category: Category,
    pub label: String,
    pub icon: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub expiry: ExpirySummary,
    /// Non-empty categories only
    pub categories: Vec<CategoryCount>,
    /// Unchecked shopping list items
    pub shopping: usize,
}

#[utoipa::path(
    get,
    path = "/api/inventory/summary",
    tag = "inventory",
    responses(
        (status = 200, description = "Dashboard counts", body = SummaryResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn inventory_summary(State(state): State<AppState>) -> impl IntoResponse {
    let items = match state.kitchen.list_inventory() {
        Ok(items) => items,
        Err(e) => return store_error("Failed to load inventory", e),
    };
    let shopping = match state.kitchen.list_shopping() {
        Ok(items) => items.iter().filter(|i| !i.checked).count(),
        Err(e) => return store_error("Failed to load shopping list", e),
    };

    let categories = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let count = items.iter().filter(|i| i.category == category).count();
            (count > 0).then(|| CategoryCount {
                category,
                label: category.label().to_string(),
                icon: category.icon().to_string(),
                count,
            })
        })
        .collect();

    Json(SummaryResponse {
        expiry: ExpirySummary::tally(&items, state.kitchen.today()),
        categories,
        shopping,
    })
    .into_response()
}
