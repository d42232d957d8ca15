//! Repository for the `garments` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::garment::{CreateGarment, Garment, UpdateGarment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, base_price, description, image_url, \
                       customization_options, is_active, created_at, updated_at";

/// Provides CRUD operations for garments.
pub struct GarmentRepo;

impl GarmentRepo {
    /// Insert a new garment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGarment) -> Result<Garment, sqlx::Error> {
        let query = format!(
            "INSERT INTO garments (name, category, base_price, description, image_url, \
                                   customization_options)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Garment>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.base_price)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.customization_options)
            .fetch_one(pool)
            .await
    }

    /// List active garments for the public catalog, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Garment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM garments WHERE is_active ORDER BY created_at DESC");
        sqlx::query_as::<_, Garment>(&query).fetch_all(pool).await
    }

    /// List all garments (including deactivated) for the admin screen.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Garment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM garments ORDER BY created_at DESC");
        sqlx::query_as::<_, Garment>(&query).fetch_all(pool).await
    }

    /// Find an active garment by id.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Garment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM garments WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Garment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a garment by id regardless of active flag (admin detail view).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Garment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM garments WHERE id = $1");
        sqlx::query_as::<_, Garment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a garment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGarment,
    ) -> Result<Option<Garment>, sqlx::Error> {
        let query = format!(
            "UPDATE garments SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                base_price = COALESCE($4, base_price),
                description = COALESCE($5, description),
                image_url = COALESCE($6, image_url),
                customization_options = COALESCE($7, customization_options),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Garment>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.base_price)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.customization_options)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a garment (admin "delete"). Returns `true` if a row was
    /// deactivated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE garments SET is_active = FALSE, updated_at = NOW() WHERE id = $1 AND is_active",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
