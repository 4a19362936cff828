/**
 * Router Configuration
 *
 * Combines every route group into one router, caps request bodies, and adds
 * a JSON 404 fallback.
 */

use axum::{http::StatusCode, response::Json, Router};
use tower_http::limit::RequestBodyLimitLayer;

use crate::error::conversion::ErrorBody;
use crate::routes::api_routes::configure_api_routes;
use crate::routes::chat_routes::configure_chat_routes;
use crate::server::state::AppState;

/// Largest accepted request body
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_api_routes(router);
    let router = configure_chat_routes(router);

    router
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Not found".to_string(),
        }),
    )
}
