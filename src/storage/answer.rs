//! Answer storage

use super::Database;
use super::database::{Table, Tables};
use crate::core::error::DomainError;
use crate::core::models::{Answer, AnswerId, QuestionId};
use crate::core::ports::AnswerRepository;

/// Answers table
#[derive(Debug, Clone, Copy)]
pub struct AnswerStore<'a> {
    db: &'a Database,
}

impl<'a> AnswerStore<'a> {
    /// Repository over `db`
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl AnswerRepository for AnswerStore<'_> {
    fn save(&self, answer: &Answer) -> anyhow::Result<Answer> {
        let mut tables = self.db.lock()?;
        put(&mut tables, answer)
    }

    fn find_by_id(&self, id: AnswerId) -> anyhow::Result<Option<Answer>> {
        Ok(self.db.lock()?.answers.iter().find(|a| a.id == Some(id)).cloned())
    }

    fn find_all(&self) -> anyhow::Result<Vec<Answer>> {
        Ok(self.db.lock()?.answers.clone())
    }

    fn find_by_question_id(&self, question_id: QuestionId) -> anyhow::Result<Vec<Answer>> {
        Ok(self
            .db
            .lock()?
            .answers
            .iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect())
    }

    fn delete(&self, id: AnswerId) -> anyhow::Result<bool> {
        let mut tables = self.db.lock()?;
        let before = tables.answers.len();
        tables.answers.retain(|a| a.id != Some(id));
        let removed = tables.answers.len() < before;
        if removed {
            for question in &mut tables.questions {
                question.answers.retain(|a| *a != id);
            }
        }
        Ok(removed)
    }

    fn flush(&self) -> anyhow::Result<()> {
        self.db.flush()
    }
}

/// Insert or update `answer` and attach it to its question
pub(super) fn put(tables: &mut Tables, answer: &Answer) -> anyhow::Result<Answer> {
    if !tables.questions.iter().any(|q| q.id == Some(answer.question_id)) {
        return Err(DomainError::NotFound(format!("question #{}", answer.question_id)).into());
    }

    let mut stored = answer.clone();
    let id = match answer.id {
        Some(id) => {
            tables.claim_id(id.get(), Table::Answers)?;
            id
        },
        None => AnswerId(tables.allocate_id()),
    };
    stored.id = Some(id);

    if let Some(existing) = tables.answers.iter_mut().find(|a| a.id == Some(id)) {
        if existing.question_id != stored.question_id {
            anyhow::bail!("Answer #{id} cannot move to another question");
        }
        // Soft deletes are one-way.
        stored.deleted |= existing.deleted;
        *existing = stored.clone();
    } else {
        tables.answers.push(stored.clone());
    }

    if let Some(question) =
        tables.questions.iter_mut().find(|q| q.id == Some(stored.question_id))
    {
        question.add_answer(&stored);
    }

    log::debug!(
        "saved answer #{id} for question #{} (deleted: {})",
        stored.question_id,
        stored.deleted
    );
    Ok(stored)
}
