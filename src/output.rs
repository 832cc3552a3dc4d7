//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Answer, DeleteHistory, Question, User};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Information about a user
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// Storage id
    pub id: Option<u64>,
    /// Login handle
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: Option<String>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.map(|id| id.get()),
            user_id: user.user_id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Information about an answer
#[derive(Debug, Serialize)]
pub struct AnswerInfo {
    /// Answer id
    pub id: Option<u64>,
    /// Question it belongs to
    pub question_id: u64,
    /// Writer's storage id
    pub writer_id: u64,
    /// Body
    pub contents: String,
    /// Soft-delete flag
    pub deleted: bool,
    /// When created
    pub created_at: String,
}

impl From<&Answer> for AnswerInfo {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.map(|id| id.get()),
            question_id: answer.question_id.get(),
            writer_id: answer.writer_id.get(),
            contents: answer.contents.clone(),
            deleted: answer.deleted,
            created_at: answer.created_at.clone(),
        }
    }
}

/// Information about a question
#[derive(Debug, Serialize)]
pub struct QuestionInfo {
    /// Question id
    pub id: Option<u64>,
    /// Title
    pub title: String,
    /// Body
    pub contents: String,
    /// Writer's storage id
    pub writer_id: Option<u64>,
    /// Soft-delete flag
    pub deleted: bool,
    /// Number of attached answers (deleted ones included)
    pub answer_count: usize,
    /// When created
    pub created_at: String,
}

impl From<&Question> for QuestionInfo {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.map(|id| id.get()),
            title: question.title.clone(),
            contents: question.contents.clone(),
            writer_id: question.writer_id.map(|id| id.get()),
            deleted: question.deleted,
            answer_count: question.answers.len(),
            created_at: question.created_at.clone(),
        }
    }
}

/// Information about a delete history entry
#[derive(Debug, Serialize)]
pub struct HistoryInfo {
    /// Entry id
    pub id: Option<u64>,
    /// "question" or "answer"
    pub content_type: String,
    /// Deleted content id
    pub content_id: u64,
    /// Storage id of the deleting user
    pub deleted_by: u64,
    /// When deleted
    pub created_at: String,
}

impl From<&DeleteHistory> for HistoryInfo {
    fn from(history: &DeleteHistory) -> Self {
        Self {
            id: history.id.map(|id| id.get()),
            content_type: history.content_type.to_string(),
            content_id: history.content_id,
            deleted_by: history.deleted_by.get(),
            created_at: history.created_at.clone(),
        }
    }
}

/// Result of `question show`
#[derive(Debug, Serialize)]
pub struct QuestionShowResult {
    /// The question
    pub question: QuestionInfo,
    /// Its active answers
    pub answers: Vec<AnswerInfo>,
}

/// Result of `question list`
#[derive(Debug, Serialize)]
pub struct QuestionListResult {
    /// Active questions
    pub questions: Vec<QuestionInfo>,
}

/// Result of `answer list`
#[derive(Debug, Serialize)]
pub struct AnswerListResult {
    /// Question the answers belong to
    pub question_id: u64,
    /// Active answers
    pub answers: Vec<AnswerInfo>,
}

/// Result of `user list`
#[derive(Debug, Serialize)]
pub struct UserListResult {
    /// Registered users
    pub users: Vec<UserInfo>,
}

/// Result of a delete command, and of `history`
#[derive(Debug, Serialize)]
pub struct HistoryListResult {
    /// History entries
    pub histories: Vec<HistoryInfo>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Id of the created or affected entity, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl OperationResult {
    /// Successful result
    #[must_use]
    pub fn ok(message: impl Into<String>, id: Option<u64>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_answer(answer: &AnswerInfo) {
    let id = answer.id.map_or_else(|| "-".to_string(), |id| id.to_string());
    println!("  [{}] by user #{}", id.bold(), answer.writer_id);
    println!("      {}", answer.contents);
}

impl QuestionShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let q = &self.question;
        println!("#{} {}", q.id.unwrap_or_default(), q.title.bold());
        if let Some(writer) = q.writer_id {
            println!("Asked by user #{writer} at {}", q.created_at);
        }
        println!("\n{}\n", q.contents);

        if self.answers.is_empty() {
            println!("No answers yet.");
            return;
        }
        println!("Answers ({}):", self.answers.len());
        for a in &self.answers {
            print_answer(a);
        }
    }
}

impl QuestionListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.questions.is_empty() {
            println!("No questions found.");
            return;
        }

        println!("Questions:\n");
        for q in &self.questions {
            println!(
                "  [{}] {} ({} answer(s))",
                q.id.unwrap_or_default().to_string().bold(),
                q.title,
                q.answer_count
            );
        }
    }
}

impl AnswerListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.answers.is_empty() {
            println!("No active answers for question #{}.", self.question_id);
            return;
        }

        println!("Answers for question #{}:\n", self.question_id);
        for a in &self.answers {
            print_answer(a);
        }
    }
}

impl UserListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.users.is_empty() {
            println!("No users registered.");
            return;
        }

        for u in &self.users {
            let email = u.email.as_deref().unwrap_or("-");
            println!("  [{}] {} ({}, {email})", u.id.unwrap_or_default(), u.user_id.bold(), u.name);
        }
    }
}

impl HistoryListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.histories.is_empty() {
            println!("Nothing deleted.");
            return;
        }

        for h in &self.histories {
            println!(
                "  {} {} #{} by user #{} at {}",
                "deleted".red(),
                h.content_type,
                h.content_id,
                h.deleted_by,
                h.created_at
            );
        }
    }
}
