//! Order pricing constants, types, and pure computation.
//!
//! The total for an order is the garment base price plus fabric cost for a
//! fixed two meters, plus flat surcharges for premium lining, home-visit
//! measurement, and urgent turnaround. The computation is pure and is re-run
//! from the persisted order fields wherever a breakdown is displayed, so the
//! stored total and the recomputed total always agree.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Meters of fabric consumed by every order. Fixed; not garment-dependent.
pub const FABRIC_METERS_PER_ORDER: i64 = 2;

/// Flat surcharge for premium lining.
pub const LINING_SURCHARGE: Money = 300;

/// Flat surcharge when the tailor measures at the customer's home.
pub const HOME_VISIT_SURCHARGE: Money = 200;

/// Flat surcharge for urgent turnaround, applied at order creation only.
pub const URGENT_SURCHARGE: Money = 500;

// ---------------------------------------------------------------------------
// Measurement method
// ---------------------------------------------------------------------------

/// How the customer's measurements were taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementMethod {
    /// Customer entered measurements themselves.
    Manual,
    /// A tailor visits the customer (surcharged).
    HomeVisit,
    /// Reuse measurements from a previous order.
    Saved,
}

// ---------------------------------------------------------------------------
// Inputs and breakdown
// ---------------------------------------------------------------------------

/// Everything the pricing function needs, extracted from the draft order
/// (at submission) or from the persisted order (for display).
#[derive(Debug, Clone, Copy)]
pub struct PricingInputs {
    /// Garment base price. Must be positive at submission time.
    pub base_price: Money,
    /// Fabric price per meter. Must be positive at submission time.
    pub price_per_meter: Money,
    /// Premium lining selected.
    pub lining: bool,
    /// How measurements were taken.
    pub measurement_method: MeasurementMethod,
    /// Urgent turnaround requested.
    pub urgent: bool,
}

/// Itemized price breakdown. `total` is the sum of all other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub base_price: Money,
    /// `price_per_meter * FABRIC_METERS_PER_ORDER`.
    pub fabric_cost: Money,
    pub lining_surcharge: Money,
    pub home_visit_surcharge: Money,
    pub urgent_surcharge: Money,
    pub total: Money,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute the itemized price for an order.
///
/// Pure and deterministic: the same inputs always produce the same
/// breakdown, and non-negative inputs always produce a non-negative total.
///
/// Fails with [`CoreError::Validation`] when the garment or fabric price is
/// not positive, which is the "garment or fabric unset at final submission"
/// case; earlier wizard steps simply do not call this. Also fails, instead
/// of wrapping, when the inputs are so large the total cannot be
/// represented.
pub fn quote(inputs: &PricingInputs) -> Result<PriceBreakdown, CoreError> {
    if inputs.base_price <= 0 {
        return Err(CoreError::validation(
            "A garment must be selected before the order can be priced",
        ));
    }
    if inputs.price_per_meter <= 0 {
        return Err(CoreError::validation(
            "A fabric must be selected before the order can be priced",
        ));
    }

    let lining_surcharge = if inputs.lining { LINING_SURCHARGE } else { 0 };
    let home_visit_surcharge = match inputs.measurement_method {
        MeasurementMethod::HomeVisit => HOME_VISIT_SURCHARGE,
        MeasurementMethod::Manual | MeasurementMethod::Saved => 0,
    };
    let urgent_surcharge = if inputs.urgent { URGENT_SURCHARGE } else { 0 };

    // Checked arithmetic: catalog prices are admin-supplied, and a total
    // must never wrap negative.
    let fabric_cost = inputs
        .price_per_meter
        .checked_mul(FABRIC_METERS_PER_ORDER)
        .ok_or_else(price_out_of_range)?;
    let total = inputs
        .base_price
        .checked_add(fabric_cost)
        .and_then(|t| t.checked_add(lining_surcharge))
        .and_then(|t| t.checked_add(home_visit_surcharge))
        .and_then(|t| t.checked_add(urgent_surcharge))
        .ok_or_else(price_out_of_range)?;

    Ok(PriceBreakdown {
        base_price: inputs.base_price,
        fabric_cost,
        lining_surcharge,
        home_visit_surcharge,
        urgent_surcharge,
        total,
    })
}

fn price_out_of_range() -> CoreError {
    CoreError::validation("Order total exceeds the representable price range")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
