//! Wordle Analysis
//!
//! Plays Wordle against the user or helps them solve a game they are playing
//! elsewhere. Guesses are ranked by the fraction of candidates they are
//! expected to leave; when even the best guess leaves too many, the most
//! common candidate word is suggested instead.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_analysis::core::{CandidateSet, Pattern, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let pattern = Pattern::evaluate(&guess, &secret).unwrap();
//! assert_eq!(pattern.to_string(), "0,2,2,1,2");
//!
//! let candidates: CandidateSet = ["crane", "trace", "slate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let remaining = candidates.filter(&guess, &pattern).unwrap();
//! assert_eq!(remaining.len(), 1);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Dictionary and frequency data
pub mod wordlists;

// Play and solve sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;

pub use error::{Result, WordleError};
