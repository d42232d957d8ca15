//! Read-only aggregates for the admin analytics screen.

use sqlx::PgPool;

use crate::models::analytics::{AnalyticsSummary, StatusCount};
use crate::models::fabric::Fabric;

/// Fabrics at or below this many meters count as low stock.
pub const LOW_STOCK_THRESHOLD_METERS: i64 = 10;

/// Provides the aggregate queries behind `GET /admin/analytics`.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Compute the full analytics summary in one round of queries.
    pub async fn summary(pool: &PgPool) -> Result<AnalyticsSummary, sqlx::Error> {
        let total_orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await?;

        let total_revenue: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(price), 0) FROM orders")
                .fetch_one(pool)
                .await?;

        let status_counts = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM orders GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await?;

        let low_stock_fabrics = sqlx::query_as::<_, Fabric>(
            "SELECT id, name, material, color, price_per_meter, stock_meters, images, \
                    featured, description, is_active, created_at, updated_at
             FROM fabrics
             WHERE is_active AND stock_meters <= $1
             ORDER BY stock_meters ASC",
        )
        .bind(LOW_STOCK_THRESHOLD_METERS)
        .fetch_all(pool)
        .await?;

        Ok(AnalyticsSummary {
            total_orders,
            total_revenue,
            status_counts,
            low_stock_fabrics,
        })
    }
}
