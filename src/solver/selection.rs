//! Picking a guess from a ranking
//!
//! The lowest-score guess wins while it still eliminates enough candidates.
//! Once even the best guess would leave more than the threshold fraction on
//! average, the most frequent candidate is suggested instead.

use super::ranker::RankedGuess;
use crate::core::{CandidateSet, Word};
use crate::wordlists::FrequencyOracle;
use rustc_hash::FxHashMap;

/// Best-score threshold above which frequency decides the suggestion
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Why the first suggestion of a round was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Lowest expected remaining fraction
    Elimination,
    /// Highest word frequency, the ranking was above the threshold
    Frequency,
    /// Precomputed opening ranking
    Cached,
}

/// The words offered for one round, best first
///
/// Rejecting a suggestion moves to the next word in the same list; nothing
/// is recomputed.
#[derive(Debug, Clone)]
pub struct Suggestions {
    words: Vec<Word>,
    ranking: Vec<RankedGuess>,
    cursor: usize,
    basis: Basis,
}

impl Suggestions {
    /// Order a round's ranking into suggestions
    ///
    /// If the best score exceeds `threshold`, the candidate with the highest
    /// frequency goes first (ties by ranking order, then candidate order);
    /// the rest of the ranking follows.
    pub fn from_ranking<O>(
        ranking: Vec<RankedGuess>,
        candidates: &CandidateSet,
        oracle: &O,
        locale: &str,
        threshold: f64,
    ) -> Self
    where
        O: FrequencyOracle + ?Sized,
    {
        let Some(best) = ranking.first() else {
            return Self::empty();
        };

        if best.score <= threshold {
            let words = ranking.iter().map(|r| r.word.clone()).collect();
            return Self {
                words,
                ranking,
                cursor: 0,
                basis: Basis::Elimination,
            };
        }

        let Some(favourite) = most_frequent(&ranking, candidates, oracle, locale) else {
            return Self::empty();
        };
        log::debug!(
            "best score {:.4} above threshold {threshold}, suggesting frequent word {favourite}",
            best.score
        );

        let mut words = Vec::with_capacity(ranking.len() + 1);
        words.push(favourite.clone());
        words.extend(
            ranking
                .iter()
                .filter(|r| r.word != *favourite)
                .map(|r| r.word.clone()),
        );

        Self {
            words,
            ranking,
            cursor: 0,
            basis: Basis::Frequency,
        }
    }

    /// Suggestions in a fixed precomputed order
    #[must_use]
    pub fn from_cached(ranking: Vec<RankedGuess>) -> Self {
        let words = ranking.iter().map(|r| r.word.clone()).collect();
        Self {
            words,
            ranking,
            cursor: 0,
            basis: Basis::Cached,
        }
    }

    /// No suggestions at all
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            words: Vec::new(),
            ranking: Vec::new(),
            cursor: 0,
            basis: Basis::Elimination,
        }
    }

    /// The suggestion currently on offer
    #[must_use]
    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.cursor)
    }

    /// Reject the current suggestion and move to the next one
    ///
    /// Returns `None` once the list is used up.
    pub fn alternate(&mut self) -> Option<&Word> {
        if self.cursor < self.words.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// The first `n` suggestions, regardless of rejections
    pub fn top(&self, n: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().take(n)
    }

    #[must_use]
    pub fn ranking(&self) -> &[RankedGuess] {
        &self.ranking
    }

    #[must_use]
    pub const fn basis(&self) -> Basis {
        self.basis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Candidate with the highest frequency; ties by ranking position, then set order
fn most_frequent<'a, O>(
    ranking: &[RankedGuess],
    candidates: &'a CandidateSet,
    oracle: &O,
    locale: &str,
) -> Option<&'a Word>
where
    O: FrequencyOracle + ?Sized,
{
    let positions: FxHashMap<&str, usize> = ranking
        .iter()
        .enumerate()
        .map(|(i, r)| (r.word.text(), i))
        .collect();

    candidates
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let freq = oracle.frequency(word.text(), locale);
            let position = positions.get(word.text()).copied().unwrap_or(usize::MAX);
            (word, freq, position, i)
        })
        .min_by(|a, b| {
            b.1.total_cmp(&a.1)
                .then_with(|| a.2.cmp(&b.2))
                .then_with(|| a.3.cmp(&b.3))
        })
        .map(|(word, ..)| word)
}
