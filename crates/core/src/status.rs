//! The fixed, linear order status lifecycle.
//!
//! A tailoring job moves through eight stages from confirmation to handover.
//! Admins may set any stage directly; the list is a display sequence, not an
//! enforced state machine. The only hard rule is that a status must be one
//! of the eight known values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The eight production stages of an order, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
    FabricReady,
    Cutting,
    Stitching,
    Embroidery,
    QualityCheck,
    Ready,
    Completed,
}

/// All statuses in lifecycle order. The tracking page renders one step per
/// entry, earliest first.
pub const ORDER_STATUS_SEQUENCE: [OrderStatus; 8] = [
    OrderStatus::Confirmed,
    OrderStatus::FabricReady,
    OrderStatus::Cutting,
    OrderStatus::Stitching,
    OrderStatus::Embroidery,
    OrderStatus::QualityCheck,
    OrderStatus::Ready,
    OrderStatus::Completed,
];

impl OrderStatus {
    /// Stable string form, matching the persisted `orders.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::FabricReady => "fabric_ready",
            Self::Cutting => "cutting",
            Self::Stitching => "stitching",
            Self::Embroidery => "embroidery",
            Self::QualityCheck => "quality_check",
            Self::Ready => "ready",
            Self::Completed => "completed",
        }
    }

    /// Customer-facing label for the tracking progress indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Order Confirmed",
            Self::FabricReady => "Fabric Ready",
            Self::Cutting => "Cutting in Progress",
            Self::Stitching => "Stitching in Progress",
            Self::Embroidery => "Embroidery & Detailing",
            Self::QualityCheck => "Quality Check",
            Self::Ready => "Ready for Pickup",
            Self::Completed => "Completed",
        }
    }

    /// Zero-based position of this status in [`ORDER_STATUS_SEQUENCE`].
    pub fn step_index(self) -> usize {
        ORDER_STATUS_SEQUENCE
            .iter()
            .position(|s| *s == self)
            .unwrap_or(0)
    }

    /// Whether this is the terminal stage; nothing transitions out of it.
    pub fn is_terminal(self) -> bool {
        self == Self::Completed
    }
}

impl Default for OrderStatus {
    /// Every order starts life confirmed.
    fn default() -> Self {
        Self::Confirmed
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ORDER_STATUS_SEQUENCE
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                crate::error::CoreError::validation(format!("Unknown order status: {s}"))
            })
    }
}

/// Map a persisted status string to its tracking step index.
///
/// Unrecognized values fail safe to the earliest step rather than erroring:
/// the tracking page must keep rendering even if the database holds a status
/// this build does not know about.
pub fn tracking_step_index(status: &str) -> usize {
    status
        .parse::<OrderStatus>()
        .map(OrderStatus::step_index)
        .unwrap_or(0)
}
