//! Expected-elimination ranking of guesses
//!
//! A guess scores the mean fraction of the candidate set left over after
//! guessing it, averaged over every candidate as the secret. Lower is better.

use crate::core::pattern::{Mark, fill_marks, marks_code};
use crate::core::{CandidateSet, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// A guess and its expected remaining fraction
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    pub score: f64,
}

/// Which candidates the ranker scores as guesses
///
/// Every candidate is still used as a possible secret; sampling only limits
/// the outer loop. The same seed always picks the same sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sampling {
    /// Maximum number of guesses to score, `None` for all
    pub size: Option<usize>,
    pub seed: u64,
}

impl Sampling {
    /// Score every candidate
    #[must_use]
    pub const fn exhaustive() -> Self {
        Self { size: None, seed: 0 }
    }

    /// Score at most `size` candidates chosen with `seed`
    ///
    /// A size of 0 scores every candidate.
    #[must_use]
    pub const fn sample(size: usize, seed: u64) -> Self {
        Self {
            size: Some(size),
            seed,
        }
    }

    /// Pick the guesses to score, in candidate order
    fn pick<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        match self.size {
            Some(size) if size > 0 && size < words.len() => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                let mut indices = rand::seq::index::sample(&mut rng, words.len(), size).into_vec();
                indices.sort_unstable();
                indices.into_iter().map(|i| &words[i]).collect()
            }
            _ => words.iter().collect(),
        }
    }
}

/// Expected fraction of `candidates` remaining after guessing `guess`
///
/// Equal to the mean over every secret `s` of
/// `|candidates.filter(guess, evaluate(guess, s))| / |candidates|`. Secrets
/// that produce the same pattern leave the same filtered set, so the secrets
/// are grouped by pattern and each group of size `k` contributes `k² / n²`.
///
/// Returns 0.0 for an empty set.
///
/// # Examples
/// ```
/// use wordle_analysis::core::{CandidateSet, Word};
/// use wordle_analysis::solver::expected_fraction;
///
/// let set: CandidateSet = ["crane", "slate"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let score = expected_fraction(&Word::new("crane").unwrap(), &set);
/// assert!((score - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn expected_fraction(guess: &Word, candidates: &CandidateSet) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let groups = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    groups
        .values()
        .map(|&count| {
            let share = count as f64 / total;
            share * share
        })
        .sum()
}

/// Count secrets per pattern code
fn group_by_pattern(guess: &Word, candidates: &CandidateSet) -> FxHashMap<u64, usize> {
    let mut counts = FxHashMap::default();
    let mut marks = vec![Mark::Miss; guess.len()];

    for secret in candidates.iter().filter(|s| s.len() == guess.len()) {
        fill_marks(guess, secret, &mut marks);
        *counts.entry(marks_code(&marks)).or_insert(0) += 1;
    }

    counts
}

/// Rank candidates as guesses, best (lowest score) first
///
/// Ties keep candidate order. An empty set gives an empty ranking.
#[must_use]
pub fn rank(candidates: &CandidateSet, sampling: Sampling) -> Vec<RankedGuess> {
    rank_with_progress(candidates, sampling, |_| {})
}

/// [`rank`], calling `on_scored` as each guess is scored
///
/// Guesses are scored in parallel, so `on_scored` runs on worker threads in
/// no particular order.
pub fn rank_with_progress<F>(
    candidates: &CandidateSet,
    sampling: Sampling,
    on_scored: F,
) -> Vec<RankedGuess>
where
    F: Fn(&RankedGuess) + Sync,
{
    let start = Instant::now();
    let guesses = sampling.pick(candidates.words());

    let mut ranking: Vec<RankedGuess> = guesses
        .par_iter()
        .map(|&guess| {
            let ranked = RankedGuess {
                word: guess.clone(),
                score: expected_fraction(guess, candidates),
            };
            on_scored(&ranked);
            ranked
        })
        .collect();

    ranking.sort_by(|a, b| a.score.total_cmp(&b.score));

    log::debug!(
        "ranked {} guesses against {} candidates in {:.2?}",
        ranking.len(),
        candidates.len(),
        start.elapsed()
    );

    ranking
}
