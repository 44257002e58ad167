pub mod clear_checked;
pub mod create;
pub mod delete;
pub mod list;
pub mod move_to_inventory;
pub mod toggle;
pub mod update;

use crate::AppState;
use axum::routing::{delete as delete_method, get, post, put};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/shopping-list endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_items).post(create::create_items))
        .route(
            "/{id}",
            put(update::update_item).delete(delete::delete_item),
        )
        .route("/{id}/toggle", post(toggle::toggle_item))
        .route(
            "/clear-checked",
            delete_method(clear_checked::clear_checked),
        )
        .route(
            "/move-to-inventory",
            post(move_to_inventory::move_to_inventory),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_items,
        create::create_items,
        update::update_item,
        toggle::toggle_item,
        delete::delete_item,
        clear_checked::clear_checked,
        move_to_inventory::move_to_inventory
    ),
    components(schemas(
        list::ShoppingListResponse,
        create::CreateShoppingListRequest,
        create::CreateShoppingListResponse,
        clear_checked::ClearCheckedResponse,
        move_to_inventory::MoveToInventoryResponse,
    ))
)]
pub struct ApiDoc;
