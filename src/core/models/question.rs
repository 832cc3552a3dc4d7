//! Question model
//!
//! A question is the aggregate root for its answers. It keeps their ids in
//! insertion order; the answers themselves are stored separately and
//! handed in when the whole aggregate has to be checked.

use serde::{Deserialize, Serialize};

use super::{Answer, AnswerId, DeleteHistory, QuestionId, User, UserId};
use crate::core::error::DomainError;

/// A question and its ordered answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Storage id, `None` until saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,

    /// Title
    pub title: String,

    /// Body
    #[serde(default)]
    pub contents: String,

    /// Who asked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer_id: Option<UserId>,

    /// Soft-delete flag
    #[serde(default)]
    pub deleted: bool,

    /// Answer ids in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<AnswerId>,

    /// Answers detached since the last save, removed physically on save
    #[serde(skip)]
    pub(crate) orphans: Vec<AnswerId>,

    /// When created (RFC3339)
    pub created_at: String,

    /// When last modified (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Question {
    /// Create a new, unsaved question without a writer
    #[must_use]
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            contents: contents.into(),
            writer_id: None,
            deleted: false,
            answers: Vec::new(),
            orphans: Vec::new(),
            created_at: super::now(),
            updated_at: None,
        }
    }

    /// Set the writer
    #[must_use]
    pub fn write_by(mut self, writer: &User) -> Self {
        self.writer_id = writer.id;
        self
    }

    /// Whether `user` asked this question
    #[must_use]
    pub fn is_owner(&self, user: &User) -> bool {
        self.writer_id.is_some_and(|id| user.has_id(id))
    }

    /// Whether this question is still active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Attach an answer. Attaching twice is a no-op.
    pub fn add_answer(&mut self, answer: &Answer) {
        if let Some(id) = answer.id
            && !self.answers.contains(&id)
        {
            self.answers.push(id);
        }
    }

    /// Detach an answer from this question
    ///
    /// The answer record is removed when the question is next saved.
    /// Returns `false` if the answer was not attached.
    pub fn remove_answer(&mut self, answer_id: AnswerId) -> bool {
        let before = self.answers.len();
        self.answers.retain(|id| *id != answer_id);
        let removed = self.answers.len() < before;
        if removed && !self.orphans.contains(&answer_id) {
            self.orphans.push(answer_id);
        }
        removed
    }

    /// Answers detached since the last save
    #[must_use]
    pub fn orphans(&self) -> &[AnswerId] {
        &self.orphans
    }

    /// Soft-delete this question together with its answers
    ///
    /// `answers` are this question's answers; entries that belong to
    /// another question are ignored. The delete is refused when
    /// `login_user` did not ask the question, or when any answer that is
    /// not already deleted was written by someone else. Nothing is
    /// modified on failure.
    ///
    /// Returns a history entry for the question followed by one per
    /// newly deleted answer.
    pub fn delete(
        &mut self,
        login_user: &User,
        answers: &mut [Answer],
    ) -> Result<Vec<DeleteHistory>, DomainError> {
        if !self.is_owner(login_user) {
            return Err(DomainError::CannotDelete(format!(
                "{} was asked by another user",
                self.describe()
            )));
        }
        let id = self
            .id
            .ok_or_else(|| DomainError::NotFound("question has not been saved".to_string()))?;
        let deleted_by = login_user.require_id()?;

        let mine = |a: &Answer| a.question_id == id && !a.deleted;
        if let Some(foreign) = answers.iter().filter(|a| mine(*a)).find(|a| !a.is_owner(login_user))
        {
            return Err(DomainError::CannotDelete(format!(
                "{} has {} written by another user",
                self.describe(),
                foreign.describe()
            )));
        }
        if let Some(unsaved) = answers.iter().filter(|a| mine(*a)).find(|a| a.id.is_none()) {
            return Err(DomainError::NotFound(format!("{} is not stored", unsaved.describe())));
        }

        let now = super::now();
        self.deleted = true;
        self.updated_at = Some(now.clone());

        let mut histories = vec![DeleteHistory::for_question(id, deleted_by)];
        for answer in answers.iter_mut().filter(|a| mine(&**a)) {
            answer.deleted = true;
            answer.updated_at = Some(now.clone());
            if let Some(answer_id) = answer.id {
                histories.push(DeleteHistory::for_answer(answer_id, deleted_by));
            }
        }
        Ok(histories)
    }

    /// Human-readable reference used in error messages
    #[must_use]
    pub fn describe(&self) -> String {
        self.id
            .map_or_else(|| format!("question \"{}\"", self.title), |id| format!("question #{id}"))
    }
}
