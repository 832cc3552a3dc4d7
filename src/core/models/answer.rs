//! Answer model
//!
//! An answer is bound to one question and one writer for its whole life.
//! Deleting it only flips the `deleted` flag; the record stays.

use serde::{Deserialize, Serialize};

use super::{AnswerId, DeleteHistory, Question, QuestionId, User, UserId};
use crate::core::error::DomainError;

/// A reply to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Storage id, `None` until saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AnswerId>,

    /// Who wrote it
    pub writer_id: UserId,

    /// The question it answers
    pub question_id: QuestionId,

    /// Answer body
    pub contents: String,

    /// Soft-delete flag. Once true, never reset.
    #[serde(default)]
    pub deleted: bool,

    /// When created (RFC3339)
    pub created_at: String,

    /// When last modified (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Answer {
    /// Create an answer written by `writer` under `question`
    ///
    /// The writer must be a stored, non-guest user and the question must
    /// already be stored.
    pub fn new(
        writer: &User,
        question: &Question,
        contents: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if writer.is_guest() {
            return Err(DomainError::Unauthorized("guests cannot answer".to_string()));
        }
        let writer_id = writer.require_id()?;
        let question_id = question.id.ok_or_else(|| {
            DomainError::NotFound(format!("question \"{}\" has not been saved", question.title))
        })?;

        Ok(Self {
            id: None,
            writer_id,
            question_id,
            contents: contents.into(),
            deleted: false,
            created_at: super::now(),
            updated_at: None,
        })
    }

    /// Whether `user` wrote this answer
    #[must_use]
    pub fn is_owner(&self, user: &User) -> bool {
        user.has_id(self.writer_id)
    }

    /// Whether this answer is still active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Soft-delete this answer on behalf of `login_user`
    ///
    /// Fails with [`DomainError::CannotDelete`] when `login_user` is not the
    /// writer; the flag is left untouched in that case. Deleting an
    /// already-deleted answer again is allowed for its owner.
    pub fn delete(&mut self, login_user: &User) -> Result<DeleteHistory, DomainError> {
        if !self.is_owner(login_user) {
            return Err(DomainError::CannotDelete(format!(
                "{} was written by another user",
                self.describe()
            )));
        }
        let id = self
            .id
            .ok_or_else(|| DomainError::NotFound("answer has not been saved".to_string()))?;

        self.deleted = true;
        self.updated_at = Some(super::now());
        Ok(DeleteHistory::for_answer(id, self.writer_id))
    }

    /// Human-readable reference used in error messages
    #[must_use]
    pub fn describe(&self) -> String {
        self.id.map_or_else(|| "unsaved answer".to_string(), |id| format!("answer #{id}"))
    }
}
