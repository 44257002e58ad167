use crate::api::{store_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use larder_core::{Category, ExpiryInfo, InventoryItem};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListInventoryParams {
    /// Only items in this category
    pub category: Option<Category>,
    /// Case-insensitive substring of the item name
    pub search: Option<String>,
}

/// An inventory item with its expiry fields computed for today.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemResponse {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub expiry: ExpiryInfo,
}

impl InventoryItemResponse {
    pub fn new(item: InventoryItem, today: NaiveDate) -> Self {
        Self {
            expiry: item.expiry(today),
            item,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryListResponse {
    pub items: Vec<InventoryItemResponse>,
}

#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "inventory",
    params(ListInventoryParams),
    responses(
        (status = 200, description = "Inventory items", body = InventoryListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ListInventoryParams>,
) -> impl IntoResponse {
    let items = match state.kitchen.list_inventory() {
        Ok(items) => items,
        Err(e) => return store_error("Failed to load inventory", e),
    };

    let search = params
        .search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let today = state.kitchen.today();

    let items = items
        .into_iter()
        .filter(|item| params.category.is_none_or(|c| item.category == c))
        .filter(|item| {
            search
                .as_deref()
                .is_none_or(|s| item.name.to_lowercase().contains(s))
        })
        .map(|item| InventoryItemResponse::new(item, today))
        .collect();

    Json(InventoryListResponse { items }).into_response()
}
