//! Frequency listing of the dictionary

use crate::core::Word;
use crate::wordlists::{FrequencyOracle, by_frequency};
use std::io::{self, Write};

/// Print `word frequency` lines, most frequent first
///
/// Shows at most `limit` lines when given. The output is in the same format
/// the frequency table is loaded from.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_frequencies<O, W>(
    oracle: &O,
    words: &[Word],
    locale: &str,
    limit: Option<usize>,
    mut out: W,
) -> io::Result<()>
where
    O: FrequencyOracle + ?Sized,
    W: Write,
{
    let sorted = by_frequency(oracle, words, locale);
    let shown = limit.unwrap_or(sorted.len());
    for (word, freq) in sorted.into_iter().take(shown) {
        writeln!(out, "{word} {freq:e}")?;
    }
    Ok(())
}
