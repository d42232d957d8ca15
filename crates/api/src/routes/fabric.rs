//! Route definitions for the fabric catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::fabric;
use crate::state::AppState;

/// Routes mounted at `/fabrics` (public storefront).
///
/// ```text
/// GET /       -> list_active
/// GET /{id}   -> get_active_by_id
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(fabric::list_active))
        .route("/{id}", get(fabric::get_active_by_id))
}

/// Routes mounted at `/admin/fabrics`.
///
/// ```text
/// GET    /       -> list_all
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> deactivate
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(fabric::list_all).post(fabric::create))
        .route(
            "/{id}",
            get(fabric::get_by_id)
                .put(fabric::update)
                .delete(fabric::deactivate),
        )
}
