//! Answer repository port

use crate::core::models::{Answer, AnswerId, QuestionId};

/// Repository for answers
pub trait AnswerRepository: Send + Sync {
    /// Insert or update an answer, returning the stored copy
    ///
    /// Saving a new answer also attaches it to its question.
    fn save(&self, answer: &Answer) -> anyhow::Result<Answer>;

    /// Find an answer by id, deleted or not
    fn find_by_id(&self, id: AnswerId) -> anyhow::Result<Option<Answer>>;

    /// All answers in insertion order, deleted or not
    fn find_all(&self) -> anyhow::Result<Vec<Answer>>;

    /// Answers of one question in insertion order, deleted or not
    fn find_by_question_id(&self, question_id: QuestionId) -> anyhow::Result<Vec<Answer>>;

    /// Physically remove an answer
    fn delete(&self, id: AnswerId) -> anyhow::Result<bool>;

    /// Make pending changes durable
    fn flush(&self) -> anyhow::Result<()>;

    /// Find an answer by id unless it has been soft-deleted
    fn find_by_id_and_deleted_false(&self, id: AnswerId) -> anyhow::Result<Option<Answer>> {
        Ok(self.find_by_id(id)?.filter(Answer::is_active))
    }

    /// Active answers of one question in insertion order
    fn find_by_question_id_and_deleted_false(
        &self,
        question_id: QuestionId,
    ) -> anyhow::Result<Vec<Answer>> {
        Ok(self
            .find_by_question_id(question_id)?
            .into_iter()
            .filter(Answer::is_active)
            .collect())
    }
}
