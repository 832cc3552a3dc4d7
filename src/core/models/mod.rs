//! Domain models for qna
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`User`] - someone who asks and answers
//! - [`Question`] - aggregate root owning an ordered list of answers
//! - [`Answer`] - a reply bound to one question and one writer
//! - [`DeleteHistory`] - audit record of a soft delete

mod answer;
mod delete_history;
mod id;
mod question;
mod user;

pub use answer::Answer;
pub use delete_history::{ContentType, DeleteHistory};
pub use id::{AnswerId, DeleteHistoryId, QuestionId, UserId};
pub use question::Question;
pub use user::{GUEST_USER_ID, User};

/// Current time as an RFC3339 timestamp
pub(crate) fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}
