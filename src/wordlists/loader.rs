//! Dictionary loading utilities
//!
//! Turns a newline-delimited word file into the ordered word list the solver
//! works from.

use super::frequency::FrequencyOracle;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Length of a standard Wordle word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Load words of `length` letters from a file
///
/// Lines are trimmed and lowercased; blank lines, words of other lengths,
/// words with non-letters and repeats are skipped. File order is kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_analysis::wordlists::loader::load_from_file;
///
/// let words = load_from_file("english3.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, length);
    log::info!(
        "loaded {} {length}-letter words from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Parse newline-delimited words, keeping those of `length` letters
#[must_use]
pub fn parse_words(content: &str, length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .map(str::trim)
        .filter(|line| line.len() == length)
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_analysis::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "sl4te", "trace"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Keep the words the oracle knows (nonzero frequency)
#[must_use]
pub fn known_words<O>(words: Vec<Word>, oracle: &O, locale: &str) -> Vec<Word>
where
    O: FrequencyOracle + ?Sized,
{
    let before = words.len();
    let known: Vec<Word> = words
        .into_iter()
        .filter(|w| oracle.is_known(w.text(), locale))
        .collect();
    log::debug!("{} of {before} words have a known frequency", known.len());
    known
}

/// Keep the words at or above a frequency cutoff
#[must_use]
pub fn popular_words<O>(words: &[Word], oracle: &O, locale: &str, cutoff: f64) -> Vec<Word>
where
    O: FrequencyOracle + ?Sized,
{
    words
        .iter()
        .filter(|w| oracle.frequency(w.text(), locale) >= cutoff)
        .cloned()
        .collect()
}
