//! Change-event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for [`ChangeEvent`]s.
//! It is designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use atelier_core::types::DbId;

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// The kind of mutation a [`ChangeEvent`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

/// A notification that a row in one of the storefront tables changed.
///
/// Events deliberately carry no row data beyond the id: subscribers refetch
/// the affected collection through the regular list endpoints, so they can
/// never observe a payload that diverges from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Table the change happened in, e.g. `"orders"`.
    pub table: String,

    /// Whether the row was inserted, updated, or deleted.
    pub op: ChangeOp,

    /// Database id of the affected row.
    pub id: DbId,

    /// When the event was published (UTC).
    pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn insert(table: impl Into<String>, id: DbId) -> Self {
        Self::new(table, ChangeOp::Insert, id)
    }

    pub fn update(table: impl Into<String>, id: DbId) -> Self {
        Self::new(table, ChangeOp::Update, id)
    }

    pub fn delete(table: impl Into<String>, id: DbId) -> Self {
        Self::new(table, ChangeOp::Delete, id)
    }

    fn new(table: impl Into<String>, op: ChangeOp, id: DbId) -> Self {
        Self {
            table: table.into(),
            op,
            id,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for change events.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ChangeEvent`].
///
/// # Usage
///
/// ```rust
/// use atelier_events::bus::{ChangeEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(ChangeEvent::insert("fabrics", 1));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// clients that connect later start from a fresh fetch anyway.
    pub fn publish(&self, event: ChangeEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(ChangeEvent::update("orders", 42));

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received.table, "orders");
        assert_eq!(received.op, ChangeOp::Update);
        assert_eq!(received.id, 42);
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ChangeEvent::insert("fabrics", 7));

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");

        assert_eq!(e1.table, "fabrics");
        assert_eq!(e2.table, "fabrics");
        assert_eq!(e1.id, 7);
        assert_eq!(e2.id, 7);
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        // No subscribers — this must not panic.
        bus.publish(ChangeEvent::delete("garments", 3));
    }

    #[test]
    fn events_serialize_with_lowercase_op() {
        let event = ChangeEvent::insert("orders", 1);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["table"], "orders");
        assert_eq!(json["op"], "insert");
        assert_eq!(json["id"], 1);
        assert!(json["timestamp"].is_string());
    }
}
