//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Format a pattern as coloured squares
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Miss => '⬜',
            Mark::Present => '🟨',
            Mark::Hit => '🟩',
        })
        .collect()
}

/// One guess letter on its feedback colour
fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Miss => text.white().on_bright_black(),
        Mark::Present => text.black().on_yellow(),
        Mark::Hit => text.black().on_green(),
    }
}

/// Format a guess as coloured letter tiles
#[must_use]
pub fn colored_tiles(guess: &Word, pattern: &Pattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

/// Format an expected remaining fraction as a percentage
#[must_use]
pub fn format_fraction(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}
