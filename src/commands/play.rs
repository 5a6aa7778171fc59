//! Interactive play mode

use super::{SessionEnd, is_quit, prompt};
use crate::error::{Result, WordleError};
use crate::game::{PlaySession, PlayStatus};
use crate::output::{print_banner, print_feedback};
use crate::wordlists::FrequencyOracle;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run a play-mode game over text input and output
///
/// Invalid guesses are reported and the player is asked again.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<O, R, W>(
    session: &mut PlaySession<'_, O>,
    mut input: R,
    mut out: W,
) -> Result<SessionEnd>
where
    O: FrequencyOracle + ?Sized,
    R: BufRead,
    W: Write,
{
    print_banner(&mut out, "Wordle")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} rounds. Type 'quit' to give up.\n",
        session.word_length(),
        session.rounds()
    )?;

    loop {
        let Some(line) = prompt(&mut input, &mut out, "What is your guess?")? else {
            return Ok(SessionEnd::Quit);
        };
        if is_quit(&line) {
            return Ok(SessionEnd::Quit);
        }

        let round = match session.submit_guess(&line) {
            Ok(round) => round,
            Err(e @ (WordleError::LengthMismatch { .. } | WordleError::InvalidWord(_))) => {
                writeln!(out, "{e}. Try again.")?;
                continue;
            }
            Err(e) => return Err(e),
        };

        print_feedback(&mut out, round.round, &round.guess, &round.pattern)?;

        match round.status {
            PlayStatus::Solved => {
                writeln!(out, "{}", "You won!".bright_green().bold())?;
                return Ok(SessionEnd::Solved);
            }
            PlayStatus::Exhausted { secret } => {
                writeln!(out, "You lose. The correct word was {secret}.")?;
                return Ok(SessionEnd::Exhausted);
            }
            PlayStatus::Continue { suggestion } => {
                writeln!(out, "Candidates remaining: {}", round.remaining)?;
                if let Some(word) = suggestion {
                    writeln!(
                        out,
                        "Your suggested word is: {}",
                        word.text().bright_yellow()
                    )?;
                }
            }
        }
    }
}
