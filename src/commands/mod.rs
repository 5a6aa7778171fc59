//! Command implementations
//!
//! Line-based drivers for the two game modes plus the batch commands. The
//! drivers read from any `BufRead` and write to any `Write`; `main` passes
//! stdin and stdout.

pub mod build_cache;
pub mod frequencies;
pub mod play;
pub mod solve;

pub use build_cache::{build_cache, progress_bar};
pub use frequencies::print_frequencies;
pub use play::run_play;
pub use solve::run_solve;

use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Solved,
    Exhausted,
    /// The player typed `quit` or input ran out
    Quit,
}

/// Print a prompt and read one trimmed line
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    writeln!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "quit" | "q" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_reads_trimmed_line() {
        let mut input = "  crane \nslate\n".as_bytes();
        let mut out = Vec::new();
        assert_eq!(
            prompt(&mut input, &mut out, "Guess?").unwrap().as_deref(),
            Some("crane")
        );
        assert_eq!(String::from_utf8(out).unwrap(), "Guess?\n");
    }

    #[test]
    fn prompt_reports_end_of_input() {
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        assert!(prompt(&mut input, &mut out, "Guess?").unwrap().is_none());
    }

    #[test]
    fn quit_words() {
        assert!(is_quit("quit"));
        assert!(is_quit("Q"));
        assert!(!is_quit("quilt"));
    }
}
