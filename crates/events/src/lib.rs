//! In-process change notification for the storefront.
//!
//! Every committed mutation publishes a [`bus::ChangeEvent`]; WebSocket
//! sessions subscribe and forward the events so clients know to refetch.

pub mod bus;

pub use bus::{ChangeEvent, ChangeOp, EventBus};
