//! Garment catalog entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Money, Timestamp};

/// A garment row from the `garments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Garment {
    pub id: DbId,
    pub name: String,
    pub category: String,
    /// Integer rupees.
    pub base_price: Money,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Map from option name to the ordered list of allowed string values,
    /// e.g. `{"collar": ["Regular", "Button Down"]}`.
    pub customization_options: serde_json::Value,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a garment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGarment {
    pub name: String,
    pub category: String,
    pub base_price: Money,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to an empty map if omitted.
    pub customization_options: Option<serde_json::Value>,
}

/// DTO for updating a garment. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGarment {
    pub name: Option<String>,
    pub category: Option<String>,
    pub base_price: Option<Money>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub customization_options: Option<serde_json::Value>,
}
