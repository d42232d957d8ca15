//! Fabric catalog entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Money, Timestamp};

/// A fabric row from the `fabrics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Fabric {
    pub id: DbId,
    pub name: String,
    pub material: String,
    pub color: String,
    /// Integer rupees per meter.
    pub price_per_meter: Money,
    /// Meters in stock. Never driven negative: order placement validates
    /// availability inside the placement transaction.
    pub stock_meters: i64,
    /// Ordered list of image URIs.
    pub images: serde_json::Value,
    pub featured: bool,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a fabric.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFabric {
    pub name: String,
    pub material: String,
    pub color: String,
    pub price_per_meter: Money,
    pub stock_meters: i64,
    /// Defaults to an empty list if omitted.
    pub images: Option<serde_json::Value>,
    #[serde(default)]
    pub featured: bool,
    pub description: Option<String>,
}

/// DTO for updating a fabric. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFabric {
    pub name: Option<String>,
    pub material: Option<String>,
    pub color: Option<String>,
    pub price_per_meter: Option<Money>,
    pub stock_meters: Option<i64>,
    pub images: Option<serde_json::Value>,
    pub featured: Option<bool>,
    pub description: Option<String>,
}
