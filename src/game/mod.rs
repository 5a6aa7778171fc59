//! Game sessions
//!
//! [`play`] hides a secret and scores the player's guesses; [`solve`] assists
//! a player of an external game from the feedback they report.

pub mod play;
pub mod solve;

pub use play::{PlayRound, PlaySession, PlayStatus};
pub use solve::{SolveRound, SolveSession, SolveStatus};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Solved,
    /// All rounds used without a solve
    Exhausted,
}

impl GameState {
    /// Whether no more guesses are accepted
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}
