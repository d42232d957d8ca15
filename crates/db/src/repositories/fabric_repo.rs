//! Repository for the `fabrics` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::fabric::{CreateFabric, Fabric, UpdateFabric};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, material, color, price_per_meter, stock_meters, images, \
                       featured, description, is_active, created_at, updated_at";

/// Provides CRUD operations for fabrics.
pub struct FabricRepo;

impl FabricRepo {
    /// Insert a new fabric, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFabric) -> Result<Fabric, sqlx::Error> {
        let query = format!(
            "INSERT INTO fabrics (name, material, color, price_per_meter, stock_meters, \
                                  images, featured, description)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '[]'::jsonb), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fabric>(&query)
            .bind(&input.name)
            .bind(&input.material)
            .bind(&input.color)
            .bind(input.price_per_meter)
            .bind(input.stock_meters)
            .bind(&input.images)
            .bind(input.featured)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List active fabrics for the public catalog, featured first, then
    /// newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Fabric>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fabrics WHERE is_active \
             ORDER BY featured DESC, created_at DESC"
        );
        sqlx::query_as::<_, Fabric>(&query).fetch_all(pool).await
    }

    /// List all fabrics (including deactivated) for the admin screen.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Fabric>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fabrics ORDER BY created_at DESC");
        sqlx::query_as::<_, Fabric>(&query).fetch_all(pool).await
    }

    /// Find an active fabric by id.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Fabric>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fabrics WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Fabric>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a fabric by id regardless of active flag (admin detail view).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fabric>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fabrics WHERE id = $1");
        sqlx::query_as::<_, Fabric>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a fabric. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFabric,
    ) -> Result<Option<Fabric>, sqlx::Error> {
        let query = format!(
            "UPDATE fabrics SET
                name = COALESCE($2, name),
                material = COALESCE($3, material),
                color = COALESCE($4, color),
                price_per_meter = COALESCE($5, price_per_meter),
                stock_meters = COALESCE($6, stock_meters),
                images = COALESCE($7, images),
                featured = COALESCE($8, featured),
                description = COALESCE($9, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fabric>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.material)
            .bind(&input.color)
            .bind(input.price_per_meter)
            .bind(input.stock_meters)
            .bind(&input.images)
            .bind(input.featured)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a fabric (admin "delete"). Catalog items are never hard
    /// deleted because existing orders reference them.
    ///
    /// Returns `true` if a row was deactivated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE fabrics SET is_active = FALSE, updated_at = NOW() WHERE id = $1 AND is_active")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
