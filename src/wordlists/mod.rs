//! Word lists and word frequencies
//!
//! The dictionary is read from a plain text file; frequencies come from any
//! [`FrequencyOracle`].

pub mod frequency;
pub mod loader;

pub use frequency::{
    DEFAULT_LOCALE, FrequencyError, FrequencyOracle, FrequencyTable, POPULAR_CUTOFF,
    by_frequency,
};
pub use loader::{DEFAULT_WORD_LENGTH, known_words, load_from_file, popular_words};
