use std::sync::Arc;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration (JWT secret, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (storefront and admin clients).
    pub ws_manager: Arc<WsManager>,
    /// Change-event bus; mutations publish here after commit.
    pub event_bus: Arc<atelier_events::EventBus>,
}
