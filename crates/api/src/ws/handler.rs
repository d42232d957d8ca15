use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::stream::{SplitStream, StreamExt};
use futures::SinkExt;

use crate::state::AppState;
use crate::ws::manager::WsManager;

/// GET /api/v1/ws
///
/// Upgrades to the change-feed WebSocket. The socket is write-mostly: the
/// forwarder task pushes change events down, clients refetch over HTTP in
/// response and send nothing but control frames back.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_connection(socket, state.ws_manager))
}

/// Drive one connection from upgrade to disconnect.
///
/// Registration hands back the mpsc receiver the manager broadcasts into; an
/// outbound task copies it to the socket while this task drains inbound
/// frames. Whichever side closes first, the connection is deregistered and
/// the outbound task torn down.
async fn serve_connection(socket: WebSocket, ws_manager: Arc<WsManager>) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "WebSocket connected");

    let mut outbound_rx = ws_manager.add(conn_id.clone()).await;
    let (mut sink, stream) = socket.split();

    let outbound_conn_id = conn_id.clone();
    let outbound = tokio::spawn(async move {
        while let Some(msg) = outbound_rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %outbound_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    drain_inbound(stream, &conn_id).await;

    ws_manager.remove(&conn_id).await;
    outbound.abort();
    tracing::info!(conn_id = %conn_id, "WebSocket disconnected");
}

/// Consume inbound frames until the client closes or errors out.
///
/// Pongs answer the heartbeat; anything else a client sends is ignored
/// rather than treated as a protocol violation.
async fn drain_inbound(mut stream: SplitStream<WebSocket>, conn_id: &str) {
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }
}
