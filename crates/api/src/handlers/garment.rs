//! Handlers for the garment catalog (public browsing + admin CRUD).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::garment::{CreateGarment, Garment, UpdateGarment};
use atelier_db::repositories::GarmentRepo;
use atelier_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/garments
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Garment>>> {
    let garments = GarmentRepo::list_active(&state.pool).await?;
    Ok(Json(garments))
}

/// GET /api/v1/garments/{id}
pub async fn get_active_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Garment>> {
    let garment = GarmentRepo::find_active_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Garment",
            id,
        }))?;
    Ok(Json(garment))
}

/// GET /api/v1/admin/garments
pub async fn list_all(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Garment>>> {
    let garments = GarmentRepo::list_all(&state.pool).await?;
    Ok(Json(garments))
}

/// GET /api/v1/admin/garments/{id}
pub async fn get_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Garment>> {
    let garment = GarmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Garment",
            id,
        }))?;
    Ok(Json(garment))
}

/// POST /api/v1/admin/garments
pub async fn create(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateGarment>,
) -> AppResult<(StatusCode, Json<Garment>)> {
    validate_base_price(Some(input.base_price))?;
    let garment = GarmentRepo::create(&state.pool, &input).await?;
    state
        .event_bus
        .publish(ChangeEvent::insert("garments", garment.id));
    Ok((StatusCode::CREATED, Json(garment)))
}

/// PUT /api/v1/admin/garments/{id}
pub async fn update(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGarment>,
) -> AppResult<Json<Garment>> {
    validate_base_price(input.base_price)?;
    let garment = GarmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Garment",
            id,
        }))?;
    state.event_bus.publish(ChangeEvent::update("garments", id));
    Ok(Json(garment))
}

/// DELETE /api/v1/admin/garments/{id}
///
/// Deactivates rather than deletes; existing orders keep their reference.
pub async fn deactivate(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = GarmentRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        state.event_bus.publish(ChangeEvent::delete("garments", id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Garment",
            id,
        }))
    }
}

fn validate_base_price(base_price: Option<i64>) -> AppResult<()> {
    if let Some(price) = base_price {
        if price <= 0 {
            return Err(AppError::Core(CoreError::validation(
                "base_price must be positive",
            )));
        }
    }
    Ok(())
}
