//! Port traits (interfaces) for persistence
//!
//! These traits define the boundary between the domain services and the
//! storage backends. Implementations live in the `storage` module; tests
//! may provide their own.
//!
//! Every repository offers the same generic CRUD surface (`save`,
//! `find_by_id`, `find_all`, `delete`, `flush`). Entity repositories with a
//! soft-delete flag add "active-only" queries that never return deleted
//! records.

mod answer_repo;
mod delete_history_repo;
mod question_repo;
mod user_repo;

pub use answer_repo::AnswerRepository;
pub use delete_history_repo::DeleteHistoryRepository;
pub use question_repo::QuestionRepository;
pub use user_repo::UserRepository;
