//! Domain logic for the atelier tailoring backend.
//!
//! Everything in this crate is pure: no I/O, no database handles. The API
//! and repository crates depend on these types and functions for pricing,
//! the order status lifecycle, tracking-ID generation, and customization
//! validation.

pub mod customization;
pub mod error;
pub mod pricing;
pub mod status;
pub mod tracking;
pub mod types;

pub use error::CoreError;
pub use pricing::{PriceBreakdown, PricingInputs};
pub use status::OrderStatus;
