//! Handlers for order placement, customer tracking, and the admin order list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use atelier_core::customization::{validate_options, Customizations};
use atelier_core::error::CoreError;
use atelier_core::pricing::{
    quote, MeasurementMethod, PriceBreakdown, PricingInputs, FABRIC_METERS_PER_ORDER,
};
use atelier_core::status::tracking_step_index;
use atelier_core::tracking::{generate_tracking_id, is_valid_tracking_id};
use atelier_core::types::DbId;
use atelier_db::models::customer::CreateCustomer;
use atelier_db::models::order::{NewOrder, Order, OrderWithDetails, UpdateOrderStatus};
use atelier_db::repositories::{FabricRepo, GarmentRepo, OrderRepo, PlaceOrderError};
use atelier_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Turnaround in days for urgent orders.
const URGENT_TURNAROUND_DAYS: u64 = 7;
/// Turnaround in days for standard orders.
const STANDARD_TURNAROUND_DAYS: u64 = 14;

/// How many fresh tracking IDs to try when the unique index reports a
/// collision. Six random digits collide rarely; exhausting this is a 500.
const TRACKING_ID_ATTEMPTS: usize = 5;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /orders` -- the wizard's final submission.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub customer: CreateCustomer,
    pub fabric_id: DbId,
    pub garment_id: DbId,
    #[serde(default)]
    pub customizations: Customizations,
    /// Opaque measurement snapshot. The `method` key selects the
    /// [`MeasurementMethod`] (defaults to `manual` when absent).
    pub measurements: serde_json::Value,
    #[serde(default)]
    pub urgent: bool,
    pub special_instructions: Option<String>,
}

/// Response body for a successful placement.
#[derive(Debug, Serialize)]
pub struct PlacedOrderResponse {
    pub order: Order,
    pub breakdown: PriceBreakdown,
}

/// Response body for the customer tracking page.
#[derive(Debug, Serialize)]
pub struct TrackingResponse {
    pub order: OrderWithDetails,
    pub breakdown: PriceBreakdown,
    /// Index of the current status in the lifecycle sequence (0-based).
    /// Unknown stored statuses render as step 0 rather than failing.
    pub step_index: usize,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/orders
///
/// Validates the selections against the live catalog, prices the order
/// server-side, then runs the placement transaction (customer insert, order
/// insert, stock deduction). Client-supplied prices are never trusted.
pub async fn place(
    State(state): State<AppState>,
    Json(input): Json<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<PlacedOrderResponse>)> {
    validate_customer(&input.customer)?;

    let fabric = FabricRepo::find_active_by_id(&state.pool, input.fabric_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fabric",
            id: input.fabric_id,
        }))?;
    let garment = GarmentRepo::find_active_by_id(&state.pool, input.garment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Garment",
            id: input.garment_id,
        }))?;

    validate_options(&input.customizations.options, &garment.customization_options)?;

    let method = measurement_method(&input.measurements)?;
    let breakdown = quote(&PricingInputs {
        base_price: garment.base_price,
        price_per_meter: fabric.price_per_meter,
        lining: input.customizations.lining,
        measurement_method: method,
        urgent: input.urgent,
    })?;

    let turnaround = if input.urgent {
        URGENT_TURNAROUND_DAYS
    } else {
        STANDARD_TURNAROUND_DAYS
    };
    let estimated_completion = chrono::Utc::now().date_naive() + chrono::Days::new(turnaround);

    let customizations = serde_json::to_value(&input.customizations)
        .map_err(|e| AppError::InternalError(format!("Failed to encode customizations: {e}")))?;

    let mut order = NewOrder {
        tracking_id: generate_tracking_id(),
        fabric_id: fabric.id,
        garment_id: garment.id,
        customizations,
        measurements: input.measurements,
        price: breakdown.total,
        urgent: input.urgent,
        special_instructions: input.special_instructions,
        estimated_completion,
        fabric_meters: FABRIC_METERS_PER_ORDER,
    };

    // Retry with a fresh tracking ID when the unique index reports a
    // collision; any other failure propagates immediately.
    let mut attempts = 0;
    let (customer, created) = loop {
        match OrderRepo::place(&state.pool, &input.customer, &order).await {
            Ok(placed) => break placed,
            Err(err) if is_tracking_collision(&err) => {
                attempts += 1;
                if attempts >= TRACKING_ID_ATTEMPTS {
                    return Err(AppError::InternalError(
                        "Could not allocate a unique tracking ID".into(),
                    ));
                }
                tracing::warn!(tracking_id = %order.tracking_id, "Tracking ID collision, retrying");
                order.tracking_id = generate_tracking_id();
            }
            Err(err) => return Err(err.into()),
        }
    };

    tracing::info!(
        order_id = created.id,
        tracking_id = %created.tracking_id,
        total = created.price,
        "Order placed"
    );

    state
        .event_bus
        .publish(ChangeEvent::insert("customers", customer.id));
    state
        .event_bus
        .publish(ChangeEvent::insert("orders", created.id));
    state
        .event_bus
        .publish(ChangeEvent::update("fabrics", fabric.id));

    Ok((
        StatusCode::CREATED,
        Json(PlacedOrderResponse {
            order: created,
            breakdown,
        }),
    ))
}

/// GET /api/v1/orders/track/{tracking_id}
///
/// The price breakdown is recomputed from the stored order fields; the
/// stored total is the source of truth and the two always agree.
pub async fn track(
    State(state): State<AppState>,
    Path(tracking_id): Path<String>,
) -> AppResult<Json<TrackingResponse>> {
    if !is_valid_tracking_id(&tracking_id) {
        return Err(AppError::NotFound(format!(
            "No order with tracking ID {tracking_id}"
        )));
    }

    let order = OrderRepo::find_by_tracking_id(&state.pool, &tracking_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No order with tracking ID {tracking_id}"))
        })?;

    let breakdown = stored_breakdown(&order)?;
    let step_index = tracking_step_index(&order.status);

    Ok(Json(TrackingResponse {
        order,
        breakdown,
        step_index,
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/orders
pub async fn list(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<OrderWithDetails>>> {
    let orders = OrderRepo::list_with_details(&state.pool).await?;
    Ok(Json(orders))
}

/// PUT /api/v1/admin/orders/{id}/status
///
/// Any of the eight lifecycle states may be assigned directly; unknown
/// strings are rejected during deserialization of [`UpdateOrderStatus`].
pub async fn update_status(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    tracing::info!(
        order_id = id,
        status = %order.status,
        admin_id = user.user_id,
        "Order status updated"
    );
    state.event_bus.publish(ChangeEvent::update("orders", id));

    Ok(Json(order))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_customer(customer: &CreateCustomer) -> AppResult<()> {
    if customer.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::validation("Name is required")));
    }
    if customer.phone.trim().is_empty() {
        return Err(AppError::Core(CoreError::validation("Phone is required")));
    }
    if customer.email.trim().is_empty() || !customer.email.contains('@') {
        return Err(AppError::Core(CoreError::validation(
            "A valid email is required",
        )));
    }
    Ok(())
}

/// Read the measurement method from the snapshot's `method` key.
fn measurement_method(measurements: &serde_json::Value) -> AppResult<MeasurementMethod> {
    match measurements.get("method") {
        None => Ok(MeasurementMethod::Manual),
        Some(value) => serde_json::from_value(value.clone()).map_err(|_| {
            AppError::Core(CoreError::validation(format!(
                "Unknown measurement method: {value}"
            )))
        }),
    }
}

/// Recompute the itemized breakdown for a persisted order.
fn stored_breakdown(order: &OrderWithDetails) -> AppResult<PriceBreakdown> {
    let customizations: Customizations = serde_json::from_value(order.customizations.clone())
        .unwrap_or_default();
    let method = measurement_method(&order.measurements).unwrap_or(MeasurementMethod::Manual);

    let breakdown = quote(&PricingInputs {
        base_price: order.garment_base_price,
        price_per_meter: order.fabric_price_per_meter,
        lining: customizations.lining,
        measurement_method: method,
        urgent: order.urgent,
    })?;
    Ok(breakdown)
}

fn is_tracking_collision(err: &PlaceOrderError) -> bool {
    if let PlaceOrderError::Database(sqlx::Error::Database(db_err)) = err {
        return db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some("uq_orders_tracking_id");
    }
    false
}
