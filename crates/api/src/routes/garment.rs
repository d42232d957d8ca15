//! Route definitions for the garment catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::garment;
use crate::state::AppState;

/// Routes mounted at `/garments` (public storefront).
///
/// ```text
/// GET /       -> list_active
/// GET /{id}   -> get_active_by_id
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(garment::list_active))
        .route("/{id}", get(garment::get_active_by_id))
}

/// Routes mounted at `/admin/garments`.
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
        .route("/", get(garment::list_all).post(garment::create))
        .route(
            "/{id}",
            get(garment::get_by_id)
                .put(garment::update)
                .delete(garment::deactivate),
        )
}
