//! Play mode: the system hides a secret and the player guesses it

use super::GameState;
use crate::core::{CandidateSet, Pattern, Word};
use crate::error::{Result, WordleError};
use crate::solver::Solver;
use crate::wordlists::FrequencyOracle;
use rand::Rng;
use rand::seq::IndexedRandom;

/// What happened after a guess
#[derive(Debug, Clone, PartialEq)]
pub enum PlayStatus {
    /// Keep guessing; `suggestion` is `None` on the last round or when no
    /// candidate is left
    Continue { suggestion: Option<Word> },
    Solved,
    /// Out of rounds; the only place the secret is revealed
    Exhausted { secret: Word },
}

/// One completed round
#[derive(Debug, Clone, PartialEq)]
pub struct PlayRound {
    pub round: usize,
    pub guess: Word,
    pub pattern: Pattern,
    /// Dictionary words still consistent with all feedback
    pub remaining: usize,
    pub status: PlayStatus,
}

/// A game against a hidden secret
pub struct PlaySession<'a, O: FrequencyOracle + ?Sized> {
    solver: &'a Solver<'a, O>,
    secret: Word,
    candidates: CandidateSet,
    round: usize,
    state: GameState,
    history: Vec<(Word, Pattern)>,
}

impl<'a, O: FrequencyOracle + ?Sized> PlaySession<'a, O> {
    /// Start a game with a random secret common enough to be a real answer
    ///
    /// # Errors
    /// Returns `WordleError::NoEligibleSecret` if no dictionary word reaches
    /// the popularity cutoff.
    pub fn new<R: Rng + ?Sized>(
        solver: &'a Solver<'a, O>,
        dictionary: CandidateSet,
        rng: &mut R,
    ) -> Result<Self> {
        let eligible: Vec<&Word> = dictionary
            .iter()
            .filter(|w| solver.is_popular(w))
            .collect();
        let secret = eligible
            .choose(rng)
            .map(|&w| w.clone())
            .ok_or(WordleError::NoEligibleSecret)?;

        log::debug!(
            "picked a secret from {} eligible of {} words",
            eligible.len(),
            dictionary.len()
        );
        Ok(Self::with_secret(solver, dictionary, secret))
    }

    /// Start a game with a known secret
    #[must_use]
    pub fn with_secret(solver: &'a Solver<'a, O>, dictionary: CandidateSet, secret: Word) -> Self {
        Self {
            solver,
            secret,
            candidates: dictionary,
            round: 0,
            state: GameState::AwaitingGuess,
            history: Vec::new(),
        }
    }

    /// Score a guess against the secret
    ///
    /// Invalid input is rejected before anything changes and does not use up
    /// a round.
    ///
    /// # Errors
    /// - `WordleError::GameOver` once the game is solved or exhausted
    /// - `WordleError::LengthMismatch` if the guess length differs from the secret
    /// - `WordleError::InvalidWord` if the guess is not made of letters
    pub fn submit_guess(&mut self, input: &str) -> Result<PlayRound> {
        if self.state.is_over() {
            return Err(WordleError::GameOver);
        }

        let trimmed = input.trim();
        let length = trimmed.chars().count();
        if length != self.secret.len() {
            return Err(WordleError::LengthMismatch {
                expected: self.secret.len(),
                actual: length,
            });
        }
        let guess = Word::new(trimmed)?;

        let pattern = Pattern::evaluate(&guess, &self.secret)?;
        self.round += 1;
        self.history.push((guess.clone(), pattern.clone()));

        if pattern.is_solved() {
            self.state = GameState::Solved;
            self.candidates = CandidateSet::new([self.secret.clone()]);
            return Ok(PlayRound {
                round: self.round,
                guess,
                pattern,
                remaining: 1,
                status: PlayStatus::Solved,
            });
        }

        self.candidates = self.candidates.filter(&guess, &pattern)?;

        let status = if self.round >= self.rounds() {
            self.state = GameState::Exhausted;
            PlayStatus::Exhausted {
                secret: self.secret.clone(),
            }
        } else {
            PlayStatus::Continue {
                suggestion: self.solver.next_guess(&self.candidates),
            }
        };

        Ok(PlayRound {
            round: self.round,
            guess,
            pattern,
            remaining: self.candidates.len(),
            status,
        })
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Rounds played so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub fn rounds(&self) -> usize {
        self.solver.config().rounds
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }
}
