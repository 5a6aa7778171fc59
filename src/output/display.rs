//! Display functions for game sessions
//!
//! Everything here writes to a caller-supplied writer so the interactive
//! drivers can run against in-memory buffers.

use super::formatters::{colored_tiles, format_fraction, pattern_to_emoji};
use crate::core::{Pattern, Word};
use crate::solver::RankedGuess;
use colored::Colorize;
use std::io::{self, Write};

/// Print a boxed title
///
/// # Errors
/// Returns any error from the writer.
pub fn print_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let width = title.chars().count() + 4;
    writeln!(out, "\n{}", "═".repeat(width).cyan())?;
    writeln!(out, "  {}", title.bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(width).cyan())
}

/// Print a scored guess as tiles and squares
///
/// # Errors
/// Returns any error from the writer.
pub fn print_feedback<W: Write>(
    out: &mut W,
    round: usize,
    guess: &Word,
    pattern: &Pattern,
) -> io::Result<()> {
    writeln!(
        out,
        "{}. {}  {}",
        round.to_string().bright_black(),
        colored_tiles(guess, pattern),
        pattern_to_emoji(pattern)
    )
}

/// Print the words of a list on one line
///
/// # Errors
/// Returns any error from the writer.
pub fn print_word_list<'a, W, I>(out: &mut W, heading: &str, words: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Word>,
{
    let list: Vec<&str> = words.into_iter().map(Word::text).collect();
    writeln!(out, "{heading} {}", list.join(", "))
}

/// Print a ranking with scores
///
/// # Errors
/// Returns any error from the writer.
pub fn print_ranking<W: Write>(out: &mut W, ranking: &[RankedGuess]) -> io::Result<()> {
    for (i, entry) in ranking.iter().enumerate() {
        writeln!(
            out,
            "{:>4}. {} {}",
            i + 1,
            entry.word.text().bright_white().bold(),
            format_fraction(entry.score).bright_black()
        )?;
    }
    Ok(())
}
