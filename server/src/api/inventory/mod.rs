pub mod clear;
pub mod create;
pub mod delete;
pub mod expiring;
pub mod import;
pub mod list;
pub mod summary;
pub mod update;

use crate::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/inventory endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_items)
                .post(create::create_items)
                .delete(clear::clear_items),
        )
        .route("/expiring", get(expiring::expiring_items))
        .route("/summary", get(summary::inventory_summary))
        .route("/import/csv", post(import::import_csv))
        .route("/import/bank-statement", post(import::import_bank_statement))
        .route("/{id}", put(update::update_item).delete(delete::delete_item))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_items,
        create::create_items,
        clear::clear_items,
        update::update_item,
        delete::delete_item,
        expiring::expiring_items,
        summary::inventory_summary,
        import::import_csv,
        import::import_bank_statement,
    ),
    components(schemas(
        list::InventoryListResponse,
        list::InventoryItemResponse,
        create::CreateInventoryRequest,
        create::CreateInventoryResponse,
        expiring::ExpiringResponse,
        summary::SummaryResponse,
        summary::CategoryCount,
        import::CsvImportResponse,
        import::BankImportResponse,
    ))
)]
pub struct ApiDoc;
