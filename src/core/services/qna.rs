//! Q&A service
//!
//! Entry point for everything a user does: registering, asking,
//! answering, and soft-deleting. Deletions are recorded in the delete
//! history.

use crate::core::error::DomainError;
use crate::core::models::{Answer, AnswerId, DeleteHistory, Question, QuestionId, User};
use crate::core::ports::{
    AnswerRepository, DeleteHistoryRepository, QuestionRepository, UserRepository,
};
use crate::storage::Database;

/// Q&A operations over a set of repositories
pub struct QnaService<'a> {
    users: Box<dyn UserRepository + 'a>,
    questions: Box<dyn QuestionRepository + 'a>,
    answers: Box<dyn AnswerRepository + 'a>,
    histories: Box<dyn DeleteHistoryRepository + 'a>,
}

impl std::fmt::Debug for QnaService<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QnaService").finish_non_exhaustive()
    }
}

impl<'a> QnaService<'a> {
    /// Service over explicit repositories
    #[must_use]
    pub fn new(
        users: Box<dyn UserRepository + 'a>,
        questions: Box<dyn QuestionRepository + 'a>,
        answers: Box<dyn AnswerRepository + 'a>,
        histories: Box<dyn DeleteHistoryRepository + 'a>,
    ) -> Self {
        Self {
            users,
            questions,
            answers,
            histories,
        }
    }

    /// Service over the repositories of one database
    #[must_use]
    pub fn with_database(db: &'a Database) -> Self {
        Self::new(
            Box::new(db.users()),
            Box::new(db.questions()),
            Box::new(db.answers()),
            Box::new(db.delete_histories()),
        )
    }

    /// Register a new user
    pub fn register_user(&self, user: &User) -> anyhow::Result<User> {
        if user.id.is_some() {
            anyhow::bail!("User {} is already registered", user.user_id);
        }
        let user = self.users.save(user)?;
        log::info!("registered user {}", user.user_id);
        Ok(user)
    }

    /// Look up a user by handle
    pub fn find_user(&self, user_id: &str) -> anyhow::Result<User> {
        self.users
            .find_by_user_id(user_id)?
            .ok_or_else(|| DomainError::NotFound(format!("user {user_id}")).into())
    }

    /// All registered users
    pub fn users(&self) -> anyhow::Result<Vec<User>> {
        self.users.find_all()
    }

    /// Ask a question as `login_user`
    pub fn ask(
        &self,
        login_user: &User,
        title: &str,
        contents: &str,
    ) -> anyhow::Result<Question> {
        if login_user.is_guest() {
            return Err(DomainError::Unauthorized("guests cannot ask".to_string()).into());
        }
        login_user.require_id()?;

        let question = self.questions.save(&Question::new(title, contents).write_by(login_user))?;
        log::info!("{} asked {}", login_user.user_id, question.describe());
        Ok(question)
    }

    /// Answer an active question as `login_user`
    pub fn answer(
        &self,
        login_user: &User,
        question_id: QuestionId,
        contents: &str,
    ) -> anyhow::Result<Answer> {
        let question = self.find_question(question_id)?;
        let answer = self.answers.save(&Answer::new(login_user, &question, contents)?)?;
        log::info!("{} answered question #{question_id}", login_user.user_id);
        Ok(answer)
    }

    /// An active question
    pub fn find_question(&self, question_id: QuestionId) -> anyhow::Result<Question> {
        self.questions
            .find_by_id_and_deleted_false(question_id)?
            .ok_or_else(|| DomainError::NotFound(format!("question #{question_id}")).into())
    }

    /// All active questions
    pub fn active_questions(&self) -> anyhow::Result<Vec<Question>> {
        self.questions.find_by_deleted_false()
    }

    /// Active answers of a question in insertion order
    pub fn active_answers(&self, question_id: QuestionId) -> anyhow::Result<Vec<Answer>> {
        self.answers.find_by_question_id_and_deleted_false(question_id)
    }

    /// An active answer
    pub fn find_answer(&self, answer_id: AnswerId) -> anyhow::Result<Answer> {
        self.answers
            .find_by_id_and_deleted_false(answer_id)?
            .ok_or_else(|| DomainError::NotFound(format!("answer #{answer_id}")).into())
    }

    /// Soft-delete an answer as `login_user`
    pub fn delete_answer(
        &self,
        login_user: &User,
        answer_id: AnswerId,
    ) -> anyhow::Result<DeleteHistory> {
        let mut answer = self.find_answer(answer_id)?;
        let history = answer.delete(login_user).inspect_err(|e| {
            log::warn!("{} tried to delete answer #{answer_id}: {e}", login_user.user_id);
        })?;

        self.answers.save(&answer)?;
        let history = self.histories.save(&history)?;
        log::info!("{} deleted answer #{answer_id}", login_user.user_id);
        Ok(history)
    }

    /// Soft-delete a question and its answers as `login_user`
    ///
    /// Nothing is saved unless the whole aggregate may be deleted. The
    /// question and its answers are written together; history entries
    /// follow once they are stored.
    pub fn delete_question(
        &self,
        login_user: &User,
        question_id: QuestionId,
    ) -> anyhow::Result<Vec<DeleteHistory>> {
        let mut question = self.find_question(question_id)?;
        let mut answers = self.answers.find_by_question_id(question_id)?;

        let histories = question.delete(login_user, &mut answers).inspect_err(|e| {
            log::warn!("{} tried to delete question #{question_id}: {e}", login_user.user_id);
        })?;

        self.questions.save_with_answers(&question, &answers)?;
        let histories = self.histories.save_all(&histories)?;
        log::info!(
            "{} deleted question #{question_id} with {} answer(s)",
            login_user.user_id,
            histories.len() - 1
        );
        Ok(histories)
    }

    /// Detach an answer from its question and remove the record
    ///
    /// Maintenance operation: no ownership check, no history entry.
    pub fn remove_answer(
        &self,
        question_id: QuestionId,
        answer_id: AnswerId,
    ) -> anyhow::Result<bool> {
        let mut question = self
            .questions
            .find_by_id(question_id)?
            .ok_or_else(|| DomainError::NotFound(format!("question #{question_id}")))?;

        if !question.remove_answer(answer_id) {
            return Ok(false);
        }
        self.questions.save(&question)?;
        Ok(true)
    }

    /// Every recorded soft delete
    pub fn delete_histories(&self) -> anyhow::Result<Vec<DeleteHistory>> {
        self.histories.find_all()
    }

    /// Make all pending changes durable
    pub fn flush(&self) -> anyhow::Result<()> {
        self.answers.flush()?;
        self.questions.flush()?;
        self.users.flush()?;
        self.histories.flush()
    }
}
