//! Core domain logic for qna
//!
//! ## Architecture
//!
//! - `models/` - Domain types (User, Question, Answer, DeleteHistory)
//! - `ports/` - Repository traits implemented by `storage`
//! - `services/` - Business logic orchestration
//! - `error` - Domain errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
