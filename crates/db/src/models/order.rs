//! Order entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Money, Timestamp};

/// An order row from the `orders` table.
///
/// `price` is the server-computed total at creation time and is never
/// mutated afterwards; breakdowns shown to the customer are recomputed from
/// the other stored fields and always agree with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub tracking_id: String,
    pub customer_id: DbId,
    pub fabric_id: DbId,
    pub garment_id: DbId,
    pub customizations: serde_json::Value,
    /// Measurement snapshot taken at submission, including the `method` key.
    pub measurements: serde_json::Value,
    pub price: Money,
    pub status: String,
    pub urgent: bool,
    pub special_instructions: Option<String>,
    pub estimated_completion: chrono::NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fully-resolved order used by the admin list and the tracking projection:
/// the order row joined with the names of its customer, fabric, and garment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderWithDetails {
    pub id: DbId,
    pub tracking_id: String,
    pub customer_id: DbId,
    pub customer_name: String,
    pub customer_phone: String,
    pub fabric_id: DbId,
    pub fabric_name: String,
    pub fabric_price_per_meter: Money,
    pub garment_id: DbId,
    pub garment_name: String,
    pub garment_base_price: Money,
    pub customizations: serde_json::Value,
    pub measurements: serde_json::Value,
    pub price: Money,
    pub status: String,
    pub urgent: bool,
    pub special_instructions: Option<String>,
    pub estimated_completion: chrono::NaiveDate,
    pub created_at: Timestamp,
}

/// Everything the placement transaction needs, assembled by the API layer
/// after validation and pricing.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub tracking_id: String,
    pub fabric_id: DbId,
    pub garment_id: DbId,
    pub customizations: serde_json::Value,
    pub measurements: serde_json::Value,
    pub price: Money,
    pub urgent: bool,
    pub special_instructions: Option<String>,
    pub estimated_completion: chrono::NaiveDate,
    /// Meters deducted from the fabric's stock inside the transaction.
    pub fabric_meters: i64,
}

/// Request body for an admin status update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatus {
    /// Must be one of the eight lifecycle states; any of them may be set
    /// directly (free assignment, not forward-only).
    pub status: atelier_core::OrderStatus,
}
