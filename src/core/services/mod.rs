//! Business logic services
//!
//! Orchestration over the repository ports. The entities enforce their
//! own rules; services load them, call into the domain, and save the
//! results together with the delete history.
//!
//! - [`qna`] - asking, answering and deleting

pub mod qna;

pub use qna::QnaService;
