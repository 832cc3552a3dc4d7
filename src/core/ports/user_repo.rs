//! User repository port

use crate::core::models::{User, UserId};

/// Repository for users
pub trait UserRepository: Send + Sync {
    /// Insert or update a user, returning the stored copy with its id
    ///
    /// Handles are unique; saving a second user with a taken handle fails.
    fn save(&self, user: &User) -> anyhow::Result<User>;

    /// Find a user by storage id
    fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>>;

    /// Find a user by handle
    fn find_by_user_id(&self, user_id: &str) -> anyhow::Result<Option<User>>;

    /// All users in insertion order
    fn find_all(&self) -> anyhow::Result<Vec<User>>;

    /// Physically remove a user. Returns `false` if it did not exist.
    fn delete(&self, id: UserId) -> anyhow::Result<bool>;

    /// Make pending changes durable
    fn flush(&self) -> anyhow::Result<()>;
}
