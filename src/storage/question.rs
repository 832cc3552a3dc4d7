//! Question storage
//!
//! The stored answer list is the source of truth: saving a question
//! merges the caller's list into it and drops orphaned answers, so a stale
//! copy never detaches answers it did not know about. It also never
//! clears a soft delete.

use super::Database;
use super::database::{Table, Tables};
use crate::core::models::{Answer, Question, QuestionId};
use crate::core::ports::QuestionRepository;

/// Questions table
#[derive(Debug, Clone, Copy)]
pub struct QuestionStore<'a> {
    db: &'a Database,
}

impl<'a> QuestionStore<'a> {
    /// Repository over `db`
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl QuestionRepository for QuestionStore<'_> {
    fn save(&self, question: &Question) -> anyhow::Result<Question> {
        let mut tables = self.db.lock()?;
        put(&mut tables, question)
    }

    fn save_with_answers(
        &self,
        question: &Question,
        answers: &[Answer],
    ) -> anyhow::Result<Question> {
        let mut tables = self.db.lock()?;
        let backup = tables.clone();

        let saved = put_aggregate(&mut tables, question, answers);
        if let Err(e) = &saved {
            log::warn!("rolled back save of {}: {e}", question.describe());
            *tables = backup;
        }
        saved
    }

    fn find_by_id(&self, id: QuestionId) -> anyhow::Result<Option<Question>> {
        Ok(self.db.lock()?.questions.iter().find(|q| q.id == Some(id)).cloned())
    }

    fn find_all(&self) -> anyhow::Result<Vec<Question>> {
        Ok(self.db.lock()?.questions.clone())
    }

    fn delete(&self, id: QuestionId) -> anyhow::Result<bool> {
        let mut tables = self.db.lock()?;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != Some(id));
        let removed = tables.questions.len() < before;
        if removed {
            tables.answers.retain(|a| a.question_id != id);
        }
        Ok(removed)
    }

    fn flush(&self) -> anyhow::Result<()> {
        self.db.flush()
    }
}

fn put_aggregate(
    tables: &mut Tables,
    question: &Question,
    answers: &[Answer],
) -> anyhow::Result<Question> {
    let id = put(tables, question)?.id;
    for answer in answers {
        super::answer::put(tables, answer)?;
    }
    // Saving answers may attach new ids to the stored question.
    tables
        .questions
        .iter()
        .find(|q| q.id == id)
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!("{} vanished while saving its answers", question.describe())
        })
}

/// Insert or update `question`, removing answers detached from it
fn put(tables: &mut Tables, question: &Question) -> anyhow::Result<Question> {
    let mut stored = question.clone();
    let orphans = std::mem::take(&mut stored.orphans);

    let id = match question.id {
        Some(id) => {
            tables.claim_id(id.get(), Table::Questions)?;
            id
        },
        None => QuestionId(tables.allocate_id()),
    };
    stored.id = Some(id);

    if let Some(existing) = tables.questions.iter().find(|q| q.id == Some(id)) {
        let mut merged = existing.answers.clone();
        for answer_id in &question.answers {
            if !merged.contains(answer_id) {
                merged.push(*answer_id);
            }
        }
        stored.answers = merged;
        // Soft deletes are one-way.
        stored.deleted |= existing.deleted;
    }
    stored.answers.retain(|a| !orphans.contains(a));

    if !orphans.is_empty() {
        tables.answers.retain(|a| {
            a.question_id != id || !a.id.is_some_and(|aid| orphans.contains(&aid))
        });
        log::info!("removed {} orphaned answer(s) of question #{id}", orphans.len());
    }

    if let Some(existing) = tables.questions.iter_mut().find(|q| q.id == Some(id)) {
        *existing = stored.clone();
    } else {
        tables.questions.push(stored.clone());
    }

    log::debug!("saved question #{id} (deleted: {})", stored.deleted);
    Ok(stored)
}
