/**
 * API Route Handlers
 *
 * - `POST /signup` - public
 * - `POST /signin` - public
 * - `POST /room` - protected; the handler takes an `AuthUser`
 */

use axum::{routing::post, Router};

use crate::auth::{signin, signup};
use crate::rooms::create_room;
use crate::server::state::AppState;

/// Configure auth and room routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/room", post(create_room))
}
