//! Core domain types for Wordle
//!
//! Words, feedback patterns and candidate sets. Everything here is pure:
//! evaluation and filtering never mutate their inputs.

mod candidates;
pub(crate) mod pattern;
pub(crate) mod word;

pub use candidates::CandidateSet;
pub use pattern::{Mark, Pattern};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
