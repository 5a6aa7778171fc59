//! Error types shared across the crate

use crate::core::WordError;
use crate::solver::CacheError;
use crate::wordlists::FrequencyError;
use std::io;
use thiserror::Error;

/// Errors raised by the solving engine and the game sessions
#[derive(Debug, Error)]
pub enum WordleError {
    /// Two words (or a word and a pattern) that must line up have different lengths
    #[error("expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("invalid pattern '{input}': {reason}")]
    InvalidPattern { input: String, reason: String },

    /// Filtering eliminated every candidate
    #[error("no candidates remain; the feedback so far is inconsistent with the dictionary")]
    EmptyCandidateSet,

    #[error("first-guess cache unavailable")]
    CacheUnavailable(#[from] CacheError),

    #[error("the game is already over")]
    GameOver,

    #[error("no dictionary word is common enough to be a secret")]
    NoEligibleSecret,

    #[error(transparent)]
    Frequency(#[from] FrequencyError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl WordleError {
    /// Build an `InvalidPattern` error
    pub(crate) fn invalid_pattern(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the library
pub type Result<T, E = WordleError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn cache_cause_is_reported_once() {
        let err = WordleError::from(CacheError::Empty);
        assert_eq!(err.to_string(), "first-guess cache unavailable");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("cache has no entries")
        );

        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chain, "first-guess cache unavailable: cache has no entries");
    }
}
