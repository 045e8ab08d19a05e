// junction/src/history/mod.rs

//! Structured indexing of a session's recorded answer keys.
//!
//! The session runtime flattens every answered step into a single string key.
//! This module parses that namespace back into typed records once per
//! evaluation, so that decision policies query structure instead of
//! re-matching string patterns at each call site.

pub mod index;
pub mod record;

pub use index::AnswerHistoryIndex;
pub use record::HistoryRecord;
