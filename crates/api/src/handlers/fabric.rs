//! Handlers for the fabric catalog (public browsing + admin CRUD).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::fabric::{CreateFabric, Fabric, UpdateFabric};
use atelier_db::repositories::FabricRepo;
use atelier_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/fabrics
///
/// Active fabrics only, featured first. The storefront shelf view.
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Fabric>>> {
    let fabrics = FabricRepo::list_active(&state.pool).await?;
    Ok(Json(fabrics))
}

/// GET /api/v1/fabrics/{id}
///
/// 404s for deactivated fabrics so stale links cannot resurrect them.
pub async fn get_active_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Fabric>> {
    let fabric = FabricRepo::find_active_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fabric",
            id,
        }))?;
    Ok(Json(fabric))
}

/// GET /api/v1/admin/fabrics
pub async fn list_all(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Fabric>>> {
    let fabrics = FabricRepo::list_all(&state.pool).await?;
    Ok(Json(fabrics))
}

/// GET /api/v1/admin/fabrics/{id}
pub async fn get_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Fabric>> {
    let fabric = FabricRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fabric",
            id,
        }))?;
    Ok(Json(fabric))
}

/// POST /api/v1/admin/fabrics
pub async fn create(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateFabric>,
) -> AppResult<(StatusCode, Json<Fabric>)> {
    validate_prices(Some(input.price_per_meter), Some(input.stock_meters))?;
    let fabric = FabricRepo::create(&state.pool, &input).await?;
    state.event_bus.publish(ChangeEvent::insert("fabrics", fabric.id));
    Ok((StatusCode::CREATED, Json(fabric)))
}

/// PUT /api/v1/admin/fabrics/{id}
pub async fn update(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFabric>,
) -> AppResult<Json<Fabric>> {
    validate_prices(input.price_per_meter, input.stock_meters)?;
    let fabric = FabricRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fabric",
            id,
        }))?;
    state.event_bus.publish(ChangeEvent::update("fabrics", id));
    Ok(Json(fabric))
}

/// DELETE /api/v1/admin/fabrics/{id}
///
/// Deactivates rather than deletes; existing orders keep their reference.
pub async fn deactivate(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = FabricRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        state.event_bus.publish(ChangeEvent::delete("fabrics", id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Fabric",
            id,
        }))
    }
}

/// Reject prices the database CHECK constraints would refuse, with a 400
/// instead of a 500.
fn validate_prices(price_per_meter: Option<i64>, stock_meters: Option<i64>) -> AppResult<()> {
    if let Some(price) = price_per_meter {
        if price <= 0 {
            return Err(AppError::Core(CoreError::validation(
                "price_per_meter must be positive",
            )));
        }
    }
    if let Some(stock) = stock_meters {
        if stock < 0 {
            return Err(AppError::Core(CoreError::validation(
                "stock_meters must not be negative",
            )));
        }
    }
    Ok(())
}
