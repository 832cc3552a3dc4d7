//! qna - A Q&A domain model with soft-delete aware repositories
//!
//! Users ask questions and answer them. Questions and answers are never
//! physically removed by their owners; they are flagged as deleted, hidden
//! from active-only queries, and recorded in a delete history.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod storage;

pub use crate::core::error::DomainError;
pub use crate::core::{models, ports, services};
