//! Table store shared by the repository implementations
//!
//! All tables live in memory behind a mutex. A database opened with a path
//! loads a JSON snapshot on open and writes it back on [`Database::flush`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use super::Backend;
use crate::config::StorageConfig;
use crate::core::models::{Answer, DeleteHistory, Question, User};

/// Snapshot of every table (also the JSON file format)
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Tables {
    /// Last id handed out; ids are unique across all tables
    #[serde(default)]
    pub next_id: u64,

    /// Users in insertion order
    #[serde(default)]
    pub users: Vec<User>,

    /// Questions in insertion order
    #[serde(default)]
    pub questions: Vec<Question>,

    /// Answers in insertion order
    #[serde(default)]
    pub answers: Vec<Answer>,

    /// Delete history in insertion order
    #[serde(default)]
    pub delete_histories: Vec<DeleteHistory>,
}

impl Tables {
    /// Hand out the next id
    pub(crate) const fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Keep the id counter ahead of an explicitly assigned id
    pub(crate) fn observe_id(&mut self, id: u64) {
        self.next_id = self.next_id.max(id);
    }

    /// Accept an explicit id for a record of `table`
    ///
    /// Fails when the id already belongs to a record in another table.
    pub(crate) fn claim_id(&mut self, id: u64, table: Table) -> anyhow::Result<()> {
        if let Some(owner) = self.table_holding(id)
            && owner != table
        {
            anyhow::bail!("Id #{id} already belongs to a record in {owner}");
        }
        self.observe_id(id);
        Ok(())
    }

    fn table_holding(&self, id: u64) -> Option<Table> {
        if self.users.iter().any(|u| u.id.is_some_and(|i| i.get() == id)) {
            Some(Table::Users)
        } else if self.questions.iter().any(|q| q.id.is_some_and(|i| i.get() == id)) {
            Some(Table::Questions)
        } else if self.answers.iter().any(|a| a.id.is_some_and(|i| i.get() == id)) {
            Some(Table::Answers)
        } else if self.delete_histories.iter().any(|h| h.id.is_some_and(|i| i.get() == id)) {
            Some(Table::DeleteHistories)
        } else {
            None
        }
    }
}

/// Which table a record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Table {
    Users,
    Questions,
    Answers,
    DeleteHistories,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Users => "users",
            Self::Questions => "questions",
            Self::Answers => "answers",
            Self::DeleteHistories => "delete_histories",
        })
    }
}

/// In-process database
#[derive(Debug)]
pub struct Database {
    tables: Mutex<Tables>,
    path: Option<PathBuf>,
}

impl Database {
    /// Empty database that lives only as long as the process
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            path: None,
        }
    }

    /// Open a file-backed database
    ///
    /// A missing file yields empty tables; it is created on first flush.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let tables = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Tables::default()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    anyhow::anyhow!("Failed to parse data file {}: {e}", path.display())
                })?
            }
        } else {
            Tables::default()
        };

        log::debug!(
            "opened {} ({} users, {} questions, {} answers)",
            path.display(),
            tables.users.len(),
            tables.questions.len(),
            tables.answers.len()
        );

        Ok(Self {
            tables: Mutex::new(tables),
            path: Some(path),
        })
    }

    /// Open the database described by a storage configuration
    pub fn from_config(config: &StorageConfig) -> anyhow::Result<Self> {
        match config.backend {
            Backend::Memory => Ok(Self::in_memory()),
            Backend::File => Self::open(config.data_path()),
        }
    }

    /// Backing file, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Lock the tables
    pub(crate) fn lock(&self) -> anyhow::Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| anyhow::anyhow!("database lock poisoned"))
    }

    /// Copy of the current tables
    pub fn snapshot(&self) -> anyhow::Result<Tables> {
        Ok(self.lock()?.clone())
    }

    /// Write the tables to the backing file. No-op for in-memory databases.
    pub fn flush(&self) -> anyhow::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = {
            let tables = self.lock()?;
            serde_json::to_string_pretty(&*tables)?
        };

        // Ensure directory exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        log::debug!("flushed {}", path.display());
        Ok(())
    }

    /// User repository over this database
    #[must_use]
    pub const fn users(&self) -> super::UserStore<'_> {
        super::UserStore::new(self)
    }

    /// Question repository over this database
    #[must_use]
    pub const fn questions(&self) -> super::QuestionStore<'_> {
        super::QuestionStore::new(self)
    }

    /// Answer repository over this database
    #[must_use]
    pub const fn answers(&self) -> super::AnswerStore<'_> {
        super::AnswerStore::new(self)
    }

    /// Delete history repository over this database
    #[must_use]
    pub const fn delete_histories(&self) -> super::DeleteHistoryStore<'_> {
        super::DeleteHistoryStore::new(self)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::in_memory()
    }
}
