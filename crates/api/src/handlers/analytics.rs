//! Handler for the admin analytics summary.

use axum::extract::State;
use axum::Json;

use atelier_db::models::analytics::AnalyticsSummary;
use atelier_db::repositories::AnalyticsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/analytics
pub async fn summary(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<AnalyticsSummary>> {
    let summary = AnalyticsRepo::summary(&state.pool).await?;
    Ok(Json(summary))
}
