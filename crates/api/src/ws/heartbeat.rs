use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::WsManager;

/// Spawn the keepalive task: every `interval`, ping every registered
/// WebSocket connection so intermediaries do not reap idle sockets.
///
/// Ticks with no connections are skipped. The task never exits on its own;
/// `main` aborts it through the returned handle during shutdown.
pub fn start_heartbeat(
    ws_manager: Arc<WsManager>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick fires immediately; nobody is connected yet.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let count = ws_manager.connection_count().await;
            if count == 0 {
                continue;
            }
            tracing::debug!(count, "Pinging WebSocket connections");
            ws_manager.ping_all().await;
        }
    })
}
