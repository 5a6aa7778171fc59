//! Wordle solving algorithms
//!
//! Ranking guesses by expected remaining candidates, choosing among them, and
//! caching the opening ranking.

pub mod cache;
mod engine;
pub mod ranker;
pub mod selection;

pub use cache::{CACHE_VERSION, CacheError, FirstGuessCache, fingerprint};
pub use engine::Solver;
pub use ranker::{RankedGuess, Sampling, expected_fraction, rank, rank_with_progress};
pub use selection::{Basis, DEFAULT_THRESHOLD, Suggestions};
