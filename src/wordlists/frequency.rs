//! Word frequency lookup
//!
//! The solver only asks "how common is this word?"; where the numbers come
//! from is up to the [`FrequencyOracle`] implementation.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fs;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Words at or above this frequency are common enough to be a secret
pub const POPULAR_CUTOFF: f64 = 1.17e-7;

/// Relative usage score of a word, 0.0 for unknown words
pub trait FrequencyOracle {
    fn frequency(&self, word: &str, locale: &str) -> f64;

    /// Any nonzero frequency counts as a known word
    fn is_known(&self, word: &str, locale: &str) -> bool {
        self.frequency(word, locale) > 0.0
    }
}

impl<F> FrequencyOracle for F
where
    F: Fn(&str, &str) -> f64,
{
    fn frequency(&self, word: &str, locale: &str) -> f64 {
        self(word, locale)
    }
}

#[derive(Error, Debug)]
pub enum FrequencyError {
    #[error("could not read frequency file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected 'word frequency', got '{content}'")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: malformed frequency '{value}'")]
    BadFloat {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: frequency must be a finite non-negative number, got {value}")]
    OutOfRange { line: usize, value: f64 },
}

/// Frequencies for a single locale, read from a `word frequency` text file
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    locale: String,
    scores: FxHashMap<String, f64>,
}

impl FrequencyTable {
    /// Build a table from (word, frequency) pairs
    pub fn from_pairs<I, S>(locale: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let scores = pairs
            .into_iter()
            .map(|(word, freq)| (word.as_ref().trim().to_ascii_lowercase(), freq))
            .collect();
        Self {
            locale: locale.to_string(),
            scores,
        }
    }

    /// Parse the text format: one `word frequency` pair per line
    ///
    /// Blank lines and lines starting with `#` are skipped. A word listed twice
    /// keeps its last frequency.
    ///
    /// # Errors
    /// Returns `FrequencyError` naming the first malformed line.
    pub fn parse(locale: &str, text: &str) -> Result<Self, FrequencyError> {
        let mut scores = FxHashMap::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let (Some(word), Some(value), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(FrequencyError::MalformedLine {
                    line,
                    content: trimmed.to_string(),
                });
            };

            let freq: f64 = value.parse().map_err(|source| FrequencyError::BadFloat {
                line,
                value: value.to_string(),
                source,
            })?;
            if !freq.is_finite() || freq < 0.0 {
                return Err(FrequencyError::OutOfRange { line, value: freq });
            }

            scores.insert(word.to_ascii_lowercase(), freq);
        }

        Ok(Self {
            locale: locale.to_string(),
            scores,
        })
    }

    /// Load a frequency file from disk
    ///
    /// # Errors
    /// Returns `FrequencyError` if the file cannot be read or is malformed.
    pub fn load<P: AsRef<Path>>(path: P, locale: &str) -> Result<Self, FrequencyError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FrequencyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(locale, &text)?;
        log::info!(
            "loaded {} word frequencies from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FrequencyOracle for FrequencyTable {
    fn frequency(&self, word: &str, locale: &str) -> f64 {
        if locale != self.locale {
            return 0.0;
        }
        self.scores.get(word).copied().unwrap_or(0.0)
    }
}

/// Words ordered from most to least frequent, ties alphabetical
#[must_use]
pub fn by_frequency<'a, O>(oracle: &O, words: &'a [Word], locale: &str) -> Vec<(&'a str, f64)>
where
    O: FrequencyOracle + ?Sized,
{
    let mut scored: Vec<(&str, f64)> = words
        .iter()
        .map(|w| (w.text(), oracle.frequency(w.text(), locale)))
        .collect();
    scored.sort_by(|(w1, f1), (w2, f2)| f2.total_cmp(f1).then_with(|| w1.cmp(w2)));
    scored
}
