//! Delete history repository port

use crate::core::models::{DeleteHistory, DeleteHistoryId};

/// Append-only log of soft deletes
pub trait DeleteHistoryRepository: Send + Sync {
    /// Store a history entry, returning it with its id
    fn save(&self, history: &DeleteHistory) -> anyhow::Result<DeleteHistory>;

    /// Find an entry by id
    fn find_by_id(&self, id: DeleteHistoryId) -> anyhow::Result<Option<DeleteHistory>>;

    /// All entries in insertion order
    fn find_all(&self) -> anyhow::Result<Vec<DeleteHistory>>;

    /// Physically remove an entry
    fn delete(&self, id: DeleteHistoryId) -> anyhow::Result<bool>;

    /// Make pending changes durable
    fn flush(&self) -> anyhow::Result<()>;

    /// Store several entries in order
    fn save_all(&self, histories: &[DeleteHistory]) -> anyhow::Result<Vec<DeleteHistory>> {
        histories.iter().map(|h| self.save(h)).collect()
    }
}
