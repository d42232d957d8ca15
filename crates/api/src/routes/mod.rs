pub mod auth;
pub mod customer;
pub mod fabric;
pub mod garment;
pub mod health;
pub mod order;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                              change-feed WebSocket
///
/// /auth/login                      staff login (public)
///
/// /fabrics                         list active fabrics (public)
/// /fabrics/{id}                    get active fabric (public)
/// /garments                        list active garments (public)
/// /garments/{id}                   get active garment (public)
///
/// /orders                          place order (public, POST)
/// /orders/track/{tracking_id}      tracking projection (public)
///
/// /admin/orders                    list with details (admin only)
/// /admin/orders/{id}/status        set status (PUT, admin only)
/// /admin/fabrics                   list, create (admin only)
/// /admin/fabrics/{id}              get, update, deactivate
/// /admin/garments                  list, create (admin only)
/// /admin/garments/{id}             get, update, deactivate
/// /admin/customers                 list (admin only)
/// /admin/customers/{id}            get, update
/// /admin/analytics                 aggregates (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Change-feed WebSocket.
        .route("/ws", get(ws::ws_handler))
        // Staff authentication.
        .nest("/auth", auth::router())
        // Public catalog.
        .nest("/fabrics", fabric::public_router())
        .nest("/garments", garment::public_router())
        // Order placement and tracking.
        .nest("/orders", order::public_router())
        // Staff console.
        .nest("/admin/orders", order::admin_router())
        .nest("/admin/fabrics", fabric::admin_router())
        .nest("/admin/garments", garment::admin_router())
        .nest("/admin/customers", customer::admin_router())
        .route("/admin/analytics", get(handlers::analytics::summary))
}
