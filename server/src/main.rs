mod api;
mod state;
mod telemetry;

use axum::Router;
use std::env;
use std::sync::Arc;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppContext;

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// All API routes plus Swagger UI, with request tracing.
pub fn build_app(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .merge(api::router())
        .merge(swagger_ui)
        .with_state(state);

    telemetry::with_request_tracing(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    telemetry::init_telemetry()?;

    let state: AppState = Arc::new(AppContext::from_env());
    let app = build_app(state);

    let bind_addr = env::var("LARDER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Server listening on {}", local_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);
    tracing::info!(
        "OpenAPI spec available at http://{}/api-docs/openapi.json",
        local_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
