//! Storage backends for the repository ports
//!
//! Every repository is a thin view over one shared [`Database`]:
//! - `memory`: tables live only as long as the process
//! - `file`: tables are loaded from and flushed to a JSON file

mod answer;
mod database;
mod history;
mod question;
mod user;

use serde::{Deserialize, Serialize};

pub use answer::AnswerStore;
pub use database::{Database, Tables};
pub use history::DeleteHistoryStore;
pub use question::QuestionStore;
pub use user::UserStore;

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process memory only
    Memory,
    /// JSON file (default)
    #[default]
    File,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "files" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown backend: {s}. Use 'memory' or 'file'")),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}
