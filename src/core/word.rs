//! Wordle word representation
//!
//! A Word stores a lowercase ASCII word along with per-letter counts used by
//! feedback evaluation and candidate filtering.

use std::fmt;
use thiserror::Error;

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;

/// Longest word accepted by [`Word::new`]
pub const MAX_WORD_LENGTH: usize = 32;

/// A lowercase word with letter count tracking
///
/// Words of any length up to [`MAX_WORD_LENGTH`] can be built; everything that
/// compares two words requires them to have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word must be at most {MAX_WORD_LENGTH} letters, got {0}")]
    TooLong(usize),
    #[error("word '{0}' must contain only the letters a-z")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, too long, or contains anything
    /// other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_analysis::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if text.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(text.len()));
        }
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        for b in text.bytes() {
            counts[letter_index(b)] += 1;
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words are never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// How many times a letter appears in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Count of each letter, indexed by `letter - b'a'`
    #[inline]
    pub(crate) const fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        self.counts
    }
}

/// Index of a lowercase ASCII letter in a count table
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
