//! User model
//!
//! A user is identified by a unique handle (`user_id`) and, once stored,
//! by a numeric [`UserId`]. Ownership checks compare stored ids only.

use serde::{Deserialize, Serialize};

use super::UserId;
use crate::core::error::DomainError;

/// Handle reserved for the anonymous user
pub const GUEST_USER_ID: &str = "guest";

/// A registered (or anonymous) user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage id, `None` until saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    /// Unique login handle (e.g. "javajigi")
    pub user_id: String,

    /// Password, compared verbatim
    pub password: String,

    /// Display name
    pub name: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Create a new, unsaved user
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            password: password.into(),
            name: name.into(),
            email,
        }
    }

    /// The anonymous user. It is never stored and owns nothing.
    #[must_use]
    pub fn guest() -> Self {
        Self::new(GUEST_USER_ID, "", "guest", None)
    }

    /// Whether this is the anonymous user
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.id.is_none() && self.user_id == GUEST_USER_ID
    }

    /// Whether both values refer to the same stored user
    ///
    /// Unsaved users never match, not even themselves.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }

    /// Whether this user is the one stored under `id`
    #[must_use]
    pub fn has_id(&self, id: UserId) -> bool {
        self.id == Some(id)
    }

    /// Check a password
    #[must_use]
    pub fn matches_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// Compare profile fields, ignoring id and credentials
    #[must_use]
    pub fn equals_name_and_email(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }

    /// Update name and email from `target`
    ///
    /// Only the user themselves may do this, and `target` must carry the
    /// current password.
    pub fn update(&mut self, login_user: &Self, target: &Self) -> Result<(), DomainError> {
        if login_user.user_id != self.user_id {
            return Err(DomainError::Unauthorized(format!(
                "{} cannot update user {}",
                login_user.user_id, self.user_id
            )));
        }
        if !self.matches_password(&target.password) {
            return Err(DomainError::Unauthorized(format!(
                "password mismatch for user {}",
                self.user_id
            )));
        }

        self.name.clone_from(&target.name);
        self.email.clone_from(&target.email);
        Ok(())
    }

    /// Stored id, or `Unauthorized` for guests and unsaved users
    pub fn require_id(&self) -> Result<UserId, DomainError> {
        self.id.ok_or_else(|| {
            DomainError::Unauthorized(format!("user {} is not registered", self.user_id))
        })
    }
}
