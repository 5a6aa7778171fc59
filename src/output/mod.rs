//! Terminal output formatting
//!
//! Display utilities for the interactive sessions and batch commands.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_feedback, print_ranking, print_word_list};
pub use formatters::{colored_tiles, format_fraction, pattern_to_emoji};
