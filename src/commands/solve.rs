//! Interactive solve mode
//!
//! The player relays each guess and the feedback from an external game.

use super::{SessionEnd, is_quit, prompt};
use crate::core::Word;
use crate::error::{Result, WordleError};
use crate::game::{SolveSession, SolveStatus};
use crate::output::{pattern_to_emoji, print_banner, print_feedback, print_word_list};
use crate::wordlists::FrequencyOracle;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Number of opening suggestions listed at the start
const OPENING_LIST: usize = 10;

/// What the player did at the guess prompt
enum Action {
    Guess(Word),
    Alternate,
    Undo,
    Quit,
}

/// Run a solve-mode session over text input and output
///
/// At the guess prompt an empty line accepts the suggestion, `X` asks for
/// another one, `undo` takes back the last round and `quit` ends the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_solve<O, R, W>(
    session: &mut SolveSession<'_, O>,
    mut input: R,
    mut out: W,
) -> Result<SessionEnd>
where
    O: FrequencyOracle + ?Sized,
    R: BufRead,
    W: Write,
{
    print_banner(&mut out, "Wordle Solver")?;
    writeln!(
        out,
        "Enter each guess you play and the feedback you get back.\n\
         Feedback: 0 = not in word, 1 = wrong spot, 2 = right spot (G/Y/- also work).\n"
    )?;
    print_word_list(
        &mut out,
        "Best first guesses include:",
        session.suggestions().top(OPENING_LIST),
    )?;

    let mut announce = true;
    loop {
        if announce {
            match session.suggestion() {
                Some(word) => writeln!(
                    out,
                    "Your suggested word is: {}",
                    word.text().bright_yellow().bold()
                )?,
                None => writeln!(out, "No suggestion available.")?,
            }
        }
        announce = true;

        let guess = match read_action(session, &mut input, &mut out)? {
            Action::Quit => return Ok(SessionEnd::Quit),
            Action::Alternate => {
                match session.reject_suggestion()? {
                    Some(word) => writeln!(out, "Your new suggested word is {word}")?,
                    None => writeln!(out, "No more suggestions this round.")?,
                }
                announce = false;
                continue;
            }
            Action::Undo => {
                match session.undo() {
                    Some((guess, pattern)) => writeln!(
                        out,
                        "Undid {guess} {}, back to round {}.",
                        pattern_to_emoji(&pattern),
                        session.round() + 1
                    )?,
                    None => writeln!(out, "Nothing to undo.")?,
                }
                continue;
            }
            Action::Guess(word) => word,
        };

        let pattern = loop {
            let Some(line) = prompt(
                &mut input,
                &mut out,
                &format!("What feedback did {guess} get? Example input: 0,0,0,2,0"),
            )?
            else {
                return Ok(SessionEnd::Quit);
            };
            if is_quit(&line) {
                return Ok(SessionEnd::Quit);
            }
            match session.parse_pattern(&line, &guess) {
                Ok(pattern) => break pattern,
                Err(e) => writeln!(out, "{e}")?,
            }
        };

        let round = session.record(guess, pattern)?;
        print_feedback(&mut out, round.round, &round.guess, &round.pattern)?;

        match round.status {
            SolveStatus::Solved => {
                writeln!(
                    out,
                    "{}",
                    format!("Solved in {} guesses!", round.round)
                        .bright_green()
                        .bold()
                )?;
                return Ok(SessionEnd::Solved);
            }
            SolveStatus::Exhausted => {
                writeln!(out, "Mission failed. We'll get them next time")?;
                return Ok(SessionEnd::Exhausted);
            }
            SolveStatus::NoCandidates => {
                writeln!(
                    out,
                    "{}",
                    "No dictionary word fits that feedback. Type 'undo' to take it back.".red()
                )?;
            }
            SolveStatus::Continue { .. } => {
                writeln!(out, "Candidates remaining: {}", round.remaining)?;
            }
        }
    }
}

/// Ask for the played guess until the input is usable
fn read_action<O, R, W>(
    session: &SolveSession<'_, O>,
    input: &mut R,
    out: &mut W,
) -> Result<Action>
where
    O: FrequencyOracle + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt(
            input,
            out,
            "What did you guess? (Enter for the suggestion, X for another, undo, quit)",
        )?
        else {
            return Ok(Action::Quit);
        };

        match line.to_ascii_lowercase().as_str() {
            "" => match session.suggestion() {
                Some(word) => return Ok(Action::Guess(word.clone())),
                None => writeln!(out, "There is no suggestion; type the word you played.")?,
            },
            "x" => return Ok(Action::Alternate),
            "undo" | "u" => return Ok(Action::Undo),
            text if is_quit(text) => return Ok(Action::Quit),
            text => match session.parse_guess(text) {
                Ok(word) => return Ok(Action::Guess(word)),
                Err(e @ (WordleError::LengthMismatch { .. } | WordleError::InvalidWord(_))) => {
                    writeln!(out, "{e}. Try again.")?;
                }
                Err(e) => return Err(e),
            },
        }
    }
}
