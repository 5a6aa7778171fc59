//! Main Wordle solver interface

use super::cache::{FirstGuessCache, fingerprint};
use super::ranker::{RankedGuess, rank};
use super::selection::Suggestions;
use crate::config::SolverConfig;
use crate::core::{CandidateSet, Word};
use crate::error::WordleError;
use crate::wordlists::{FrequencyOracle, popular_words};
use std::path::Path;

/// Main Wordle solver
///
/// Ties the ranker and the selection policy to a frequency oracle and a
/// configuration. Holds no game state; sessions pass their candidate set in.
pub struct Solver<'a, O: FrequencyOracle + ?Sized> {
    oracle: &'a O,
    config: SolverConfig,
}

impl<'a, O: FrequencyOracle + ?Sized> Solver<'a, O> {
    pub const fn new(oracle: &'a O, config: SolverConfig) -> Self {
        Self { oracle, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn oracle(&self) -> &'a O {
        self.oracle
    }

    /// Frequency of a word in the configured locale
    #[must_use]
    pub fn frequency(&self, word: &Word) -> f64 {
        self.oracle.frequency(word.text(), &self.config.locale)
    }

    /// Whether a word is common enough to be a secret
    #[must_use]
    pub fn is_popular(&self, word: &Word) -> bool {
        self.frequency(word) >= self.config.popular_cutoff
    }

    /// The words of `dictionary` common enough to be a secret
    #[must_use]
    pub fn popular(&self, dictionary: &CandidateSet) -> CandidateSet {
        CandidateSet::new(popular_words(
            dictionary.words(),
            self.oracle,
            &self.config.locale,
            self.config.popular_cutoff,
        ))
    }

    /// Load the first-guess cache built for `dictionary`
    ///
    /// A missing, malformed or stale file is logged and gives `None`, which
    /// makes [`Solver::opening`] rank the dictionary instead.
    #[must_use]
    pub fn load_cache<P: AsRef<Path>>(
        &self,
        dictionary: &CandidateSet,
        path: P,
    ) -> Option<FirstGuessCache> {
        let expected = fingerprint(self.popular(dictionary).words());
        match FirstGuessCache::load(path, Some(expected)) {
            Ok(cache) => Some(cache),
            Err(e) => {
                let e = anyhow::Error::new(WordleError::CacheUnavailable(e));
                log::warn!("{e:#}; ranking the dictionary instead");
                None
            }
        }
    }

    /// Rank the candidates as guesses using the configured sampling
    #[must_use]
    pub fn rank(&self, candidates: &CandidateSet) -> Vec<RankedGuess> {
        rank(candidates, self.config.sampling)
    }

    /// Ordered suggestions for a round
    #[must_use]
    pub fn suggest(&self, candidates: &CandidateSet) -> Suggestions {
        Suggestions::from_ranking(
            self.rank(candidates),
            candidates,
            self.oracle,
            &self.config.locale,
            self.config.threshold,
        )
    }

    /// Suggestions for the first round of a session
    ///
    /// Uses the cache when there is one, otherwise ranks the whole set.
    #[must_use]
    pub fn opening(
        &self,
        cache: Option<&FirstGuessCache>,
        candidates: &CandidateSet,
    ) -> Suggestions {
        match cache {
            Some(cache) if !cache.is_empty() => Suggestions::from_cached(cache.entries().to_vec()),
            _ => {
                log::info!(
                    "no first-guess cache, ranking {} words on the fly",
                    candidates.len()
                );
                self.suggest(candidates)
            }
        }
    }

    /// The single best guess for the candidates, or `None` if there are none
    ///
    /// # Examples
    /// ```
    /// use wordle_analysis::config::SolverConfig;
    /// use wordle_analysis::core::{CandidateSet, Word};
    /// use wordle_analysis::solver::Solver;
    ///
    /// let oracle = |_: &str, _: &str| 1e-6;
    /// let solver = Solver::new(&oracle, SolverConfig::default());
    ///
    /// let set: CandidateSet = ["crane"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// assert_eq!(solver.next_guess(&set).unwrap().text(), "crane");
    /// assert!(solver.next_guess(&CandidateSet::default()).is_none());
    /// ```
    #[must_use]
    pub fn next_guess(&self, candidates: &CandidateSet) -> Option<Word> {
        self.suggest(candidates).current().cloned()
    }
}
