//! Repository for the `customers` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::customer::{Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, email, measurements, created_at, updated_at";

/// Provides CRUD operations for customers.
///
/// Inserts happen inside the order-placement transaction (see
/// [`super::OrderRepo::place`]), so there is no standalone `create` here.
pub struct CustomerRepo;

impl CustomerRepo {
    /// List all customers, newest first (admin screen).
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY created_at DESC");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Find a customer by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply an admin edit. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                measurements = COALESCE($5, measurements),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.measurements)
            .fetch_optional(pool)
            .await
    }
}
