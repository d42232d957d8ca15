//! Domain error taxonomy shared across crates.

use crate::types::DbId;

/// A domain-level error.
///
/// The API crate maps each variant to an HTTP status; repositories and pure
/// domain functions return these directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by id or tracking code returned no row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field or selection is missing or invalid.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not permitted.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Validation`] with a formatted message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
