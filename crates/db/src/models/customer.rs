//! Customer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A customer row from the `customers` table.
///
/// A fresh row is created per order submission; the storefront never
/// deduplicates by phone or email.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Opaque measurement blob; the server never interprets individual
    /// dimensions, only the `method` key (for the home-visit surcharge).
    pub measurements: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a customer (embedded in order placement).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// DTO for an admin edit. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub measurements: Option<serde_json::Value>,
}
