use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::broadcast;

use atelier_events::ChangeEvent;

use crate::ws::manager::WsManager;

/// Spawn a background task that fans change events out to every connected
/// WebSocket client.
///
/// Events are serialized as JSON text frames. Clients treat a frame as an
/// invalidation signal and refetch the affected collection; frames lost to a
/// lagged receiver are therefore harmless as long as a later frame for the
/// same table arrives, and the task logs and continues on `Lagged`.
///
/// The task exits when the event bus sender is dropped (server shutdown).
pub fn start_event_forwarder(
    ws_manager: Arc<WsManager>,
    mut events: broadcast::Receiver<ChangeEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    let frame = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to serialize change event");
                            continue;
                        }
                    };
                    ws_manager.broadcast(Message::Text(frame.into())).await;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event forwarder lagged behind the bus");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, stopping WebSocket forwarder");
                    break;
                }
            }
        }
    })
}
