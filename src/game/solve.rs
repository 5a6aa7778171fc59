//! Solve mode: the system assists a player of an external game
//!
//! No secret is known. The player reports each guess and the feedback the
//! real game showed; the session narrows the candidates and suggests the
//! next guess.

use super::GameState;
use crate::core::{CandidateSet, Pattern, Word};
use crate::error::{Result, WordleError};
use crate::solver::{FirstGuessCache, Solver, Suggestions};
use crate::wordlists::FrequencyOracle;

/// What happened after feedback was recorded
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    Continue { suggestion: Option<Word> },
    Solved,
    /// The feedback ruled out every dictionary word
    NoCandidates,
    /// Out of rounds without a solve
    Exhausted,
}

/// One recorded round
#[derive(Debug, Clone, PartialEq)]
pub struct SolveRound {
    pub round: usize,
    pub guess: Word,
    pub pattern: Pattern,
    pub remaining: usize,
    pub status: SolveStatus,
}

/// State before a round, kept for undo
struct Snapshot {
    guess: Word,
    pattern: Pattern,
    candidates: CandidateSet,
    suggestions: Suggestions,
    state: GameState,
}

/// An assisted game
pub struct SolveSession<'a, O: FrequencyOracle + ?Sized> {
    solver: &'a Solver<'a, O>,
    candidates: CandidateSet,
    suggestions: Suggestions,
    word_length: usize,
    round: usize,
    state: GameState,
    history: Vec<Snapshot>,
}

impl<'a, O: FrequencyOracle + ?Sized> SolveSession<'a, O> {
    /// Start a session over the dictionary
    ///
    /// The first suggestions come from `cache` when given, otherwise from
    /// ranking the whole dictionary.
    pub fn new(
        solver: &'a Solver<'a, O>,
        dictionary: CandidateSet,
        cache: Option<&FirstGuessCache>,
    ) -> Self {
        let suggestions = solver.opening(cache, &dictionary);
        let word_length = dictionary
            .word_length()
            .unwrap_or(solver.config().word_length);

        Self {
            solver,
            candidates: dictionary,
            suggestions,
            word_length,
            round: 0,
            state: GameState::AwaitingGuess,
            history: Vec::new(),
        }
    }

    /// The suggestion currently on offer
    #[must_use]
    pub fn suggestion(&self) -> Option<&Word> {
        self.suggestions.current()
    }

    #[must_use]
    pub const fn suggestions(&self) -> &Suggestions {
        &self.suggestions
    }

    /// Reject the current suggestion and offer the next one from this
    /// round's list; does not use up a round
    ///
    /// # Errors
    /// Returns `WordleError::GameOver` once the session has ended.
    pub fn reject_suggestion(&mut self) -> Result<Option<&Word>> {
        if self.state.is_over() {
            return Err(WordleError::GameOver);
        }
        Ok(self.suggestions.alternate())
    }

    /// Validate a guess typed by the player
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` or `WordleError::InvalidWord`.
    pub fn parse_guess(&self, input: &str) -> Result<Word> {
        let trimmed = input.trim();
        let length = trimmed.chars().count();
        if length != self.word_length {
            return Err(WordleError::LengthMismatch {
                expected: self.word_length,
                actual: length,
            });
        }
        Ok(Word::new(trimmed)?)
    }

    /// Validate feedback typed by the player for `guess`
    ///
    /// # Errors
    /// Returns `WordleError::InvalidPattern` if the feedback is malformed.
    pub fn parse_pattern(&self, input: &str, guess: &Word) -> Result<Pattern> {
        Pattern::parse(input, guess.len())
    }

    /// Apply the feedback the real game gave for `guess`
    ///
    /// An empty candidate set is reported as [`SolveStatus::NoCandidates`]
    /// rather than an error.
    ///
    /// # Errors
    /// - `WordleError::GameOver` once the session has ended
    /// - `WordleError::LengthMismatch` if the guess or pattern has the wrong length
    pub fn record(&mut self, guess: Word, pattern: Pattern) -> Result<SolveRound> {
        if self.state.is_over() {
            return Err(WordleError::GameOver);
        }
        if guess.len() != self.word_length {
            return Err(WordleError::LengthMismatch {
                expected: self.word_length,
                actual: guess.len(),
            });
        }
        if pattern.len() != guess.len() {
            return Err(WordleError::LengthMismatch {
                expected: guess.len(),
                actual: pattern.len(),
            });
        }

        let filtered = if pattern.is_solved() {
            CandidateSet::new([guess.clone()])
        } else {
            self.candidates.filter(&guess, &pattern)?
        };

        self.history.push(Snapshot {
            guess: guess.clone(),
            pattern: pattern.clone(),
            candidates: std::mem::replace(&mut self.candidates, filtered),
            suggestions: std::mem::replace(&mut self.suggestions, Suggestions::empty()),
            state: self.state,
        });
        self.round += 1;

        let status = if pattern.is_solved() {
            self.state = GameState::Solved;
            SolveStatus::Solved
        } else if self.round >= self.rounds() {
            self.state = GameState::Exhausted;
            SolveStatus::Exhausted
        } else if self.candidates.is_empty() {
            log::warn!("feedback {pattern} for {guess} left no candidates");
            SolveStatus::NoCandidates
        } else {
            self.suggestions = self.solver.suggest(&self.candidates);
            SolveStatus::Continue {
                suggestion: self.suggestions.current().cloned(),
            }
        };

        Ok(SolveRound {
            round: self.round,
            guess,
            pattern,
            remaining: self.candidates.len(),
            status,
        })
    }

    /// Take back the last recorded round
    ///
    /// Returns the guess and feedback that were undone, or `None` if nothing
    /// has been recorded.
    pub fn undo(&mut self) -> Option<(Word, Pattern)> {
        let snapshot = self.history.pop()?;
        self.candidates = snapshot.candidates;
        self.suggestions = snapshot.suggestions;
        self.state = snapshot.state;
        self.round -= 1;
        Some((snapshot.guess, snapshot.pattern))
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub fn rounds(&self) -> usize {
        self.solver.config().rounds
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }
}
