//! Route definitions for the admin customer screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Routes mounted at `/admin/customers`.
///
/// ```text
/// GET /       -> list
/// GET /{id}   -> get_by_id
/// PUT /{id}   -> update
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(customer::list))
        .route("/{id}", get(customer::get_by_id).put(customer::update))
}
