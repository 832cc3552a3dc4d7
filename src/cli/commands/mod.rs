//! Command implementations

mod answer;
mod history;
mod question;
mod user;

use std::path::Path;
use std::str::FromStr;

use qna::config::QnaConfig;
use qna::models::User;
use qna::output::OutputMode;
use qna::services::QnaService;
use qna::storage::Database;

pub use answer::answer_cmd;
pub use history::history;
pub use question::question_cmd;
pub use user::user_cmd;

/// State shared by every command
#[derive(Debug)]
pub struct Context {
    db: Database,
    acting_user: Option<String>,
    mode: OutputMode,
}

impl Context {
    /// Load config and open the database
    pub fn open(
        data: Option<&Path>,
        acting_user: Option<String>,
        mode: OutputMode,
    ) -> anyhow::Result<Self> {
        let mut config = QnaConfig::load()?;
        if let Some(path) = data {
            config.set_data_path(path);
        }
        log::debug!("storage backend: {}", config.storage.backend);

        Ok(Self {
            db: Database::from_config(&config.storage)?,
            acting_user,
            mode,
        })
    }

    /// Service over the opened database
    pub fn service(&self) -> QnaService<'_> {
        QnaService::with_database(&self.db)
    }

    /// Output mode
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// The user given with `--as`
    pub fn login_user(&self, service: &QnaService<'_>) -> anyhow::Result<User> {
        let Some(handle) = self.acting_user.as_deref() else {
            anyhow::bail!("This command requires --as <USER_ID>");
        };
        service.find_user(handle)
    }
}

/// Parse an id argument
fn parse_id<T>(value: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(|e: String| anyhow::anyhow!(e))
}
