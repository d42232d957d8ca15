//! Human-presentable tracking IDs.
//!
//! Tracking IDs identify an order for customer-facing lookup, independent of
//! the internal row id. Format: `RT` followed by six digits.

use rand::Rng;

/// Prefix for every tracking ID.
pub const TRACKING_PREFIX: &str = "RT";

/// Number of digits after the prefix.
pub const TRACKING_DIGITS: usize = 6;

/// Generate a new tracking ID, e.g. `RT483920`.
///
/// Uniqueness is enforced by the database's unique index on
/// `orders.tracking_id`; collisions surface as a conflict and the caller
/// retries with a fresh ID.
pub fn generate_tracking_id() -> String {
    let mut rng = rand::rng();
    let digits: String = (0..TRACKING_DIGITS)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    format!("{TRACKING_PREFIX}{digits}")
}

/// Whether a string has the shape of a tracking ID.
///
/// Used to reject obviously malformed lookups before hitting the database.
pub fn is_valid_tracking_id(candidate: &str) -> bool {
    candidate.len() == TRACKING_PREFIX.len() + TRACKING_DIGITS
        && candidate.starts_with(TRACKING_PREFIX)
        && candidate[TRACKING_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_digit())
}
