//! Domain errors
//!
//! Raised by the entities themselves when an operation violates an
//! ownership or lifecycle rule. Repositories and services wrap these in
//! `anyhow::Error`; callers can recover the kind with `downcast_ref`.

use thiserror::Error;

/// Errors raised by domain operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The acting user is not allowed to delete the entity
    #[error("cannot delete: {0}")]
    CannotDelete(String),

    /// The acting user is anonymous, unsaved, or failed a credential check
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The referenced entity does not exist (or is no longer active)
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Whether this is an unauthorized-deletion failure
    #[must_use]
    pub const fn is_cannot_delete(&self) -> bool {
        matches!(self, Self::CannotDelete(_))
    }
}
