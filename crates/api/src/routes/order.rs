//! Route definitions for orders: public placement/tracking and the admin list.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders` (public storefront).
///
/// ```text
/// POST /                        -> place
/// GET  /track/{tracking_id}     -> track
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", post(order::place))
        .route("/track/{tracking_id}", get(order::track))
}

/// Routes mounted at `/admin/orders`.
///
/// ```text
/// GET /              -> list
/// PUT /{id}/status   -> update_status
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(order::list))
        .route("/{id}/status", put(order::update_status))
}
