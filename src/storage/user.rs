//! User storage

use super::Database;
use super::database::Table;
use crate::core::models::{User, UserId};
use crate::core::ports::UserRepository;

/// Users table
#[derive(Debug, Clone, Copy)]
pub struct UserStore<'a> {
    db: &'a Database,
}

impl<'a> UserStore<'a> {
    /// Repository over `db`
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl UserRepository for UserStore<'_> {
    fn save(&self, user: &User) -> anyhow::Result<User> {
        if user.is_guest() {
            anyhow::bail!("The guest user cannot be stored");
        }

        let mut tables = self.db.lock()?;
        if tables
            .users
            .iter()
            .any(|u| u.user_id == user.user_id && u.id != user.id)
        {
            anyhow::bail!("User id already taken: {}", user.user_id);
        }

        let mut stored = user.clone();
        match user.id {
            Some(id) => {
                tables.claim_id(id.get(), Table::Users)?;
                if let Some(existing) = tables.users.iter_mut().find(|u| u.id == Some(id)) {
                    *existing = stored.clone();
                } else {
                    tables.users.push(stored.clone());
                }
            },
            None => {
                stored.id = Some(UserId(tables.allocate_id()));
                tables.users.push(stored.clone());
            },
        }

        log::debug!("saved user {} as #{:?}", stored.user_id, stored.id.map(UserId::get));
        Ok(stored)
    }

    fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        Ok(self.db.lock()?.users.iter().find(|u| u.id == Some(id)).cloned())
    }

    fn find_by_user_id(&self, user_id: &str) -> anyhow::Result<Option<User>> {
        Ok(self.db.lock()?.users.iter().find(|u| u.user_id == user_id).cloned())
    }

    fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.db.lock()?.users.clone())
    }

    fn delete(&self, id: UserId) -> anyhow::Result<bool> {
        let mut tables = self.db.lock()?;
        let before = tables.users.len();
        tables.users.retain(|u| u.id != Some(id));
        Ok(tables.users.len() < before)
    }

    fn flush(&self) -> anyhow::Result<()> {
        self.db.flush()
    }
}
