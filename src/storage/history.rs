//! Delete history storage

use super::Database;
use super::database::Table;
use crate::core::models::{DeleteHistory, DeleteHistoryId};
use crate::core::ports::DeleteHistoryRepository;

/// Delete history table
#[derive(Debug, Clone, Copy)]
pub struct DeleteHistoryStore<'a> {
    db: &'a Database,
}

impl<'a> DeleteHistoryStore<'a> {
    /// Repository over `db`
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl DeleteHistoryRepository for DeleteHistoryStore<'_> {
    fn save(&self, history: &DeleteHistory) -> anyhow::Result<DeleteHistory> {
        let mut tables = self.db.lock()?;
        let mut stored = history.clone();
        match history.id {
            Some(id) => {
                tables.claim_id(id.get(), Table::DeleteHistories)?;
                if let Some(existing) =
                    tables.delete_histories.iter_mut().find(|h| h.id == Some(id))
                {
                    *existing = stored.clone();
                } else {
                    tables.delete_histories.push(stored.clone());
                }
            },
            None => {
                stored.id = Some(DeleteHistoryId(tables.allocate_id()));
                tables.delete_histories.push(stored.clone());
            },
        }
        Ok(stored)
    }

    fn find_by_id(&self, id: DeleteHistoryId) -> anyhow::Result<Option<DeleteHistory>> {
        Ok(self
            .db
            .lock()?
            .delete_histories
            .iter()
            .find(|h| h.id == Some(id))
            .cloned())
    }

    fn find_all(&self) -> anyhow::Result<Vec<DeleteHistory>> {
        Ok(self.db.lock()?.delete_histories.clone())
    }

    fn delete(&self, id: DeleteHistoryId) -> anyhow::Result<bool> {
        let mut tables = self.db.lock()?;
        let before = tables.delete_histories.len();
        tables.delete_histories.retain(|h| h.id != Some(id));
        Ok(tables.delete_histories.len() < before)
    }

    fn flush(&self) -> anyhow::Result<()> {
        self.db.flush()
    }
}
