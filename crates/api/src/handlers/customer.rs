//! Handlers for the admin customer screens.
//!
//! Customers are created inside the order-placement transaction, so there is
//! no create endpoint here.

use axum::extract::{Path, State};
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::customer::{Customer, UpdateCustomer};
use atelier_db::repositories::CustomerRepo;
use atelier_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/customers
pub async fn list(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /api/v1/admin/customers/{id}
pub async fn get_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// PUT /api/v1/admin/customers/{id}
pub async fn update(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    state.event_bus.publish(ChangeEvent::update("customers", id));
    Ok(Json(customer))
}
