//! Aggregate projections for the admin analytics screen.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::fabric::Fabric;

/// Orders per lifecycle state.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Everything `GET /admin/analytics` returns.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub total_orders: i64,
    /// Sum of stored order totals, integer rupees.
    pub total_revenue: i64,
    pub status_counts: Vec<StatusCount>,
    /// Active fabrics at or below the low-stock threshold, lowest first.
    pub low_stock_fabrics: Vec<Fabric>,
}
