//! Question repository port

use crate::core::models::{Answer, Question, QuestionId};

/// Repository for questions
pub trait QuestionRepository: Send + Sync {
    /// Insert or update a question, returning the stored copy
    ///
    /// Answers detached with [`Question::remove_answer`] are physically
    /// removed as part of the save.
    fn save(&self, question: &Question) -> anyhow::Result<Question>;

    /// Save a question and its answers as one unit
    ///
    /// Either every record is written or, on error, none is.
    fn save_with_answers(
        &self,
        question: &Question,
        answers: &[Answer],
    ) -> anyhow::Result<Question>;

    /// Find a question by id, deleted or not
    fn find_by_id(&self, id: QuestionId) -> anyhow::Result<Option<Question>>;

    /// All questions in insertion order, deleted or not
    fn find_all(&self) -> anyhow::Result<Vec<Question>>;

    /// Physically remove a question and its answers
    fn delete(&self, id: QuestionId) -> anyhow::Result<bool>;

    /// Make pending changes durable
    fn flush(&self) -> anyhow::Result<()>;

    /// Find a question by id unless it has been soft-deleted
    fn find_by_id_and_deleted_false(&self, id: QuestionId) -> anyhow::Result<Option<Question>> {
        Ok(self.find_by_id(id)?.filter(Question::is_active))
    }

    /// All questions that have not been soft-deleted
    fn find_by_deleted_false(&self) -> anyhow::Result<Vec<Question>> {
        Ok(self.find_all()?.into_iter().filter(Question::is_active).collect())
    }
}
