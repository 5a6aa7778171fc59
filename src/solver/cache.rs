//! Precomputed ranking of opening guesses
//!
//! Ranking the full popular vocabulary is the most expensive computation the
//! solver does, and its result only changes when the vocabulary does. It is
//! built once offline and stored as JSON:
//!
//! ```json
//! { "version": 1, "fingerprint": 1234, "entries": [["crane", 0.0123], ...] }
//! ```
//!
//! The fingerprint identifies the vocabulary the ranking was computed over,
//! so a cache left over from another dictionary is rejected instead of
//! silently used.

use super::ranker::{RankedGuess, Sampling, rank_with_progress};
use crate::core::{CandidateSet, Word};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::hash::Hasher;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current persisted schema version
pub const CACHE_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed cache data")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported cache version {found}, expected {CACHE_VERSION}")]
    UnsupportedVersion { found: u32 },
    #[error("cache was built for a different vocabulary (fingerprint {found:#x}, expected {expected:#x})")]
    Stale { expected: u64, found: u64 },
    #[error("cache has no entries")]
    Empty,
    #[error("invalid cache entry '{word}' with score {score}")]
    InvalidEntry { word: String, score: f64 },
    #[error("cache entries are not sorted by score")]
    Unsorted,
}

#[derive(Deserialize)]
struct Header {
    version: u32,
}

#[derive(Serialize, Deserialize)]
struct CacheFile {
    version: u32,
    fingerprint: u64,
    entries: Vec<(String, f64)>,
}

/// Opening guesses ranked best first, read-only once built
#[derive(Debug, Clone, PartialEq)]
pub struct FirstGuessCache {
    fingerprint: u64,
    entries: Vec<RankedGuess>,
}

impl FirstGuessCache {
    /// Rank every word of the popular vocabulary, no sampling
    #[must_use]
    pub fn build(popular: &CandidateSet) -> Self {
        Self::build_with_progress(popular, |_| {})
    }

    /// [`FirstGuessCache::build`], reporting each scored guess
    pub fn build_with_progress<F>(popular: &CandidateSet, on_scored: F) -> Self
    where
        F: Fn(&RankedGuess) + Sync,
    {
        log::info!("building first-guess cache over {} words", popular.len());
        let entries = rank_with_progress(popular, Sampling::exhaustive(), on_scored);
        Self {
            fingerprint: fingerprint(popular.words()),
            entries,
        }
    }

    /// Wrap an existing ranking
    #[must_use]
    pub const fn from_ranking(fingerprint: u64, entries: Vec<RankedGuess>) -> Self {
        Self {
            fingerprint,
            entries,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[RankedGuess] {
        &self.entries
    }

    /// The canonical opening guess
    #[must_use]
    pub fn best(&self) -> Option<&RankedGuess> {
        self.entries.first()
    }

    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as JSON
    ///
    /// # Errors
    /// Returns `CacheError::Malformed` if writing fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), CacheError> {
        let file = CacheFile {
            version: CACHE_VERSION,
            fingerprint: self.fingerprint,
            entries: self
                .entries
                .iter()
                .map(|r| (r.word.text().to_string(), r.score))
                .collect(),
        };
        serde_json::to_writer(writer, &file)?;
        Ok(())
    }

    /// Read and validate JSON written by [`FirstGuessCache::write_to`]
    ///
    /// When `expected_fingerprint` is given, a cache built over another
    /// vocabulary is rejected as stale.
    ///
    /// # Errors
    /// Returns `CacheError` if the data is unreadable, of another version,
    /// stale, empty, unsorted or holds invalid words or scores.
    pub fn read_from<R: Read>(
        mut reader: R,
        expected_fingerprint: Option<u64>,
    ) -> Result<Self, CacheError> {
        let mut raw = String::new();
        reader
            .read_to_string(&mut raw)
            .map_err(serde_json::Error::io)?;

        let header: Header = serde_json::from_str(&raw)?;
        if header.version != CACHE_VERSION {
            return Err(CacheError::UnsupportedVersion {
                found: header.version,
            });
        }

        let file: CacheFile = serde_json::from_str(&raw)?;
        if let Some(expected) = expected_fingerprint
            && expected != file.fingerprint
        {
            return Err(CacheError::Stale {
                expected,
                found: file.fingerprint,
            });
        }
        if file.entries.is_empty() {
            return Err(CacheError::Empty);
        }

        let entries = file
            .entries
            .into_iter()
            .map(|(text, score)| match Word::new(&text) {
                Ok(word) if score.is_finite() && score >= 0.0 => Ok(RankedGuess { word, score }),
                _ => Err(CacheError::InvalidEntry { word: text, score }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if entries.windows(2).any(|w| w[0].score > w[1].score) {
            return Err(CacheError::Unsorted);
        }

        Ok(Self {
            fingerprint: file.fingerprint,
            entries,
        })
    }

    /// Write the cache to a file
    ///
    /// # Errors
    /// Returns `CacheError` if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CacheError> {
        let path = path.as_ref();
        let io_err = |source| CacheError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        self.write_to(&mut writer)?;
        writer.flush().map_err(io_err)?;

        log::info!("saved {} opening guesses to {}", self.len(), path.display());
        Ok(())
    }

    /// Read a cache file
    ///
    /// # Errors
    /// Returns `CacheError` if the file is missing or fails validation.
    pub fn load<P: AsRef<Path>>(
        path: P,
        expected_fingerprint: Option<u64>,
    ) -> Result<Self, CacheError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CacheError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cache = Self::read_from(BufReader::new(file), expected_fingerprint)?;

        log::info!(
            "loaded {} opening guesses from {}",
            cache.len(),
            path.display()
        );
        Ok(cache)
    }
}

/// Stable hash of a vocabulary, independent of word order
#[must_use]
pub fn fingerprint(words: &[Word]) -> u64 {
    let mut texts: Vec<&str> = words.iter().map(Word::text).collect();
    texts.sort_unstable();
    texts.dedup();

    let mut hasher = FxHasher::default();
    for text in texts {
        hasher.write(text.as_bytes());
        hasher.write_u8(b'\n');
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popular() -> CandidateSet {
        ["crane", "slate", "trace", "crate", "irate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    fn encode(cache: &FirstGuessCache) -> Vec<u8> {
        let mut buf = Vec::new();
        cache.write_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn build_ranks_whole_vocabulary() {
        let words = popular();
        let cache = FirstGuessCache::build(&words);
        assert_eq!(cache.len(), words.len());
        assert_eq!(cache.fingerprint(), fingerprint(words.words()));
        assert!(cache.entries().windows(2).all(|w| w[0].score <= w[1].score));
        assert_eq!(cache.best(), cache.entries().first());
    }

    #[test]
    fn round_trip_is_exact() {
        let words = popular();
        let cache = FirstGuessCache::build(&words);
        let restored =
            FirstGuessCache::read_from(encode(&cache).as_slice(), Some(cache.fingerprint()))
                .unwrap();
        assert_eq!(restored, cache);
    }

    #[test]
    fn awkward_scores_round_trip() {
        let cache = FirstGuessCache::from_ranking(
            99,
            vec![
                RankedGuess {
                    word: Word::new("crane").unwrap(),
                    score: 1.0 / 3.0,
                },
                RankedGuess {
                    word: Word::new("slate").unwrap(),
                    score: 0.1 + 0.2,
                },
            ],
        );
        let restored = FirstGuessCache::read_from(encode(&cache).as_slice(), None).unwrap();
        assert_eq!(restored.entries()[0].score.to_bits(), (1.0f64 / 3.0).to_bits());
        assert_eq!(restored.entries()[1].score.to_bits(), (0.1f64 + 0.2).to_bits());
    }

    #[test]
    fn stale_cache_is_rejected() {
        let cache = FirstGuessCache::build(&popular());
        let other = fingerprint(&[Word::new("blimp").unwrap()]);
        assert!(matches!(
            FirstGuessCache::read_from(encode(&cache).as_slice(), Some(other)),
            Err(CacheError::Stale { .. })
        ));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let json = r#"{"version": 2, "fingerprint": 0, "entries": [["crane", 0.1]]}"#;
        assert!(matches!(
            FirstGuessCache::read_from(json.as_bytes(), None),
            Err(CacheError::UnsupportedVersion { found: 2 })
        ));
    }

    #[test]
    fn flat_legacy_list_is_malformed() {
        let json = r#"[["crane", 0.1], ["slate", 0.2]]"#;
        assert!(matches!(
            FirstGuessCache::read_from(json.as_bytes(), None),
            Err(CacheError::Malformed(_))
        ));
    }

    #[test]
    fn bad_entries_are_rejected() {
        let empty = r#"{"version": 1, "fingerprint": 0, "entries": []}"#;
        assert!(matches!(
            FirstGuessCache::read_from(empty.as_bytes(), None),
            Err(CacheError::Empty)
        ));

        let bad_word = r#"{"version": 1, "fingerprint": 0, "entries": [["cr4ne", 0.1]]}"#;
        assert!(matches!(
            FirstGuessCache::read_from(bad_word.as_bytes(), None),
            Err(CacheError::InvalidEntry { .. })
        ));

        let unsorted =
            r#"{"version": 1, "fingerprint": 0, "entries": [["crane", 0.3], ["slate", 0.1]]}"#;
        assert!(matches!(
            FirstGuessCache::read_from(unsorted.as_bytes(), None),
            Err(CacheError::Unsorted)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            FirstGuessCache::load("/nonexistent/first_guess.json", None),
            Err(CacheError::Io { .. })
        ));
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "wordle_analysis_cache_{}.json",
            std::process::id()
        ));
        let cache = FirstGuessCache::build(&popular());
        cache.save(&path).unwrap();
        let restored = FirstGuessCache::load(&path, Some(cache.fingerprint())).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(restored, cache);
    }

    #[test]
    fn fingerprint_ignores_order() {
        let a = popular();
        let mut reversed: Vec<Word> = a.words().to_vec();
        reversed.reverse();
        assert_eq!(fingerprint(a.words()), fingerprint(&reversed));
        assert_ne!(fingerprint(a.words()), fingerprint(&reversed[1..]));
    }
}
