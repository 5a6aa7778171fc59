//! Solver configuration
//!
//! Plain settings shared by the solving engine and both game modes. The CLI
//! maps its flags onto this struct.

use crate::solver::{DEFAULT_THRESHOLD, Sampling};
use crate::wordlists::{DEFAULT_LOCALE, DEFAULT_WORD_LENGTH, POPULAR_CUTOFF};

/// Number of guesses allowed in a game
pub const DEFAULT_ROUNDS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Above this best score, suggest the most frequent candidate instead
    pub threshold: f64,
    /// Which guesses the ranker scores
    pub sampling: Sampling,
    /// Rounds per game
    pub rounds: usize,
    /// Locale passed to the frequency oracle
    pub locale: String,
    /// Minimum frequency for a word to be a secret or enter the first-guess cache
    pub popular_cutoff: f64,
    pub word_length: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            sampling: Sampling::exhaustive(),
            rounds: DEFAULT_ROUNDS,
            locale: DEFAULT_LOCALE.to_string(),
            popular_cutoff: POPULAR_CUTOFF,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}
