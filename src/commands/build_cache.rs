//! Offline first-guess cache build

use crate::core::CandidateSet;
use crate::error::{Result, WordleError};
use crate::solver::{FirstGuessCache, Solver};
use crate::wordlists::FrequencyOracle;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for scoring `len` guesses
#[must_use]
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Rank every popular dictionary word as an opening guess
///
/// `progress` advances once per scored guess; its length is set here.
///
/// # Errors
///
/// Returns `WordleError::EmptyCandidateSet` if no dictionary word reaches the
/// popularity cutoff.
pub fn build_cache<O>(
    solver: &Solver<'_, O>,
    dictionary: &CandidateSet,
    progress: &ProgressBar,
) -> Result<FirstGuessCache>
where
    O: FrequencyOracle + ?Sized,
{
    let popular = solver.popular(dictionary);
    if popular.is_empty() {
        return Err(WordleError::EmptyCandidateSet);
    }

    progress.set_length(popular.len() as u64);
    let cache = FirstGuessCache::build_with_progress(&popular, |_| progress.inc(1));
    progress.finish_and_clear();

    Ok(cache)
}
