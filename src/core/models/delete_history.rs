//! Delete history model
//!
//! One record per soft-deleted question or answer.

use serde::{Deserialize, Serialize};

use super::{AnswerId, DeleteHistoryId, QuestionId, UserId};

/// Kind of content a history entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A question
    Question,
    /// An answer
    Answer,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question => write!(f, "question"),
            Self::Answer => write!(f, "answer"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "question" | "q" => Ok(Self::Question),
            "answer" | "a" => Ok(Self::Answer),
            _ => Err(format!("Invalid content type: {s}. Use: question, answer")),
        }
    }
}

/// Audit record of a soft delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteHistory {
    /// Storage id, `None` until saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DeleteHistoryId>,

    /// What was deleted
    pub content_type: ContentType,

    /// Id of the deleted question or answer
    pub content_id: u64,

    /// Who deleted it
    pub deleted_by: UserId,

    /// When it was deleted (RFC3339)
    pub created_at: String,
}

impl DeleteHistory {
    /// Create a new, unsaved history entry
    #[must_use]
    pub fn new(content_type: ContentType, content_id: u64, deleted_by: UserId) -> Self {
        Self {
            id: None,
            content_type,
            content_id,
            deleted_by,
            created_at: super::now(),
        }
    }

    /// History entry for a deleted question
    #[must_use]
    pub fn for_question(id: QuestionId, deleted_by: UserId) -> Self {
        Self::new(ContentType::Question, id.get(), deleted_by)
    }

    /// History entry for a deleted answer
    #[must_use]
    pub fn for_answer(id: AnswerId, deleted_by: UserId) -> Self {
        Self::new(ContentType::Answer, id.get(), deleted_by)
    }

    /// Compare everything except the storage id and timestamp
    #[must_use]
    pub fn same_event(&self, other: &Self) -> bool {
        self.content_type == other.content_type
            && self.content_id == other.content_id
            && self.deleted_by == other.deleted_by
    }
}
