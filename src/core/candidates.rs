//! Candidate set and feedback-driven elimination

use super::pattern::{Mark, Pattern};
use super::word::{ALPHABET_SIZE, Word, letter_index};
use crate::error::{Result, WordleError};
use rustc_hash::FxHashSet;

/// The words still consistent with all feedback received so far
///
/// Words are unique and keep their insertion order, so ranking and selection
/// over a set are deterministic. A set is never modified in place; filtering
/// returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Build a set from words, dropping repeats
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Length of the words in the set, if it has any
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.words.first().map(Word::len)
    }

    /// Keep only the candidates consistent with `pattern` observed for `guess`
    ///
    /// Per position: a hit keeps candidates with the guessed letter there; a
    /// present keeps candidates containing the letter elsewhere; a miss keeps
    /// candidates without the letter. When a letter occurs several times in
    /// the guess, the marks fix how many copies a candidate must hold: at
    /// least the number of hit/present marks, exactly that many once any copy
    /// is a miss.
    ///
    /// The result may be empty, which means the feedback is inconsistent with
    /// every word in the set.
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the pattern length differs
    /// from the guess, or the guess length differs from the candidates.
    ///
    /// # Examples
    /// ```
    /// use wordle_analysis::core::{CandidateSet, Pattern, Word};
    ///
    /// let set: CandidateSet = ["crane", "trace", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let guess = Word::new("trace").unwrap();
    /// let pattern = Pattern::evaluate(&guess, &Word::new("crane").unwrap()).unwrap();
    ///
    /// let remaining = set.filter(&guess, &pattern).unwrap();
    /// assert_eq!(remaining.len(), 1);
    /// assert_eq!(remaining.words()[0].text(), "crane");
    /// ```
    pub fn filter(&self, guess: &Word, pattern: &Pattern) -> Result<Self> {
        if pattern.len() != guess.len() {
            return Err(WordleError::LengthMismatch {
                expected: guess.len(),
                actual: pattern.len(),
            });
        }
        if let Some(length) = self.word_length()
            && length != guess.len()
        {
            return Err(WordleError::LengthMismatch {
                expected: length,
                actual: guess.len(),
            });
        }

        let constraints = Constraints::new(guess, pattern);
        let words: Vec<Word> = self
            .words
            .iter()
            .filter(|candidate| constraints.admits(candidate))
            .cloned()
            .collect();

        log::debug!(
            "filter {guess} [{pattern}]: {} -> {} candidates",
            self.len(),
            words.len()
        );

        Ok(Self { words })
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// What a (guess, pattern) pair says about the secret
struct Constraints<'a> {
    guess: &'a Word,
    marks: &'a [Mark],
    /// Copies of each letter credited by hit/present marks
    min_count: [u8; ALPHABET_SIZE],
    /// Letters with at least one miss mark: the count is exact
    capped: [bool; ALPHABET_SIZE],
}

impl<'a> Constraints<'a> {
    fn new(guess: &'a Word, pattern: &'a Pattern) -> Self {
        let mut min_count = [0u8; ALPHABET_SIZE];
        let mut capped = [false; ALPHABET_SIZE];

        for (&letter, &mark) in guess.letters().iter().zip(pattern.marks()) {
            let idx = letter_index(letter);
            if mark == Mark::Miss {
                capped[idx] = true;
            } else {
                min_count[idx] += 1;
            }
        }

        Self {
            guess,
            marks: pattern.marks(),
            min_count,
            capped,
        }
    }

    fn admits(&self, candidate: &Word) -> bool {
        if candidate.len() != self.guess.len() {
            return false;
        }

        let positions_ok = self
            .guess
            .letters()
            .iter()
            .zip(candidate.letters())
            .zip(self.marks)
            .all(|((&g, &c), &mark)| match mark {
                Mark::Hit => g == c,
                Mark::Present | Mark::Miss => g != c,
            });
        if !positions_ok {
            return false;
        }

        self.guess.letters().iter().all(|&letter| {
            let idx = letter_index(letter);
            let count = candidate.count_of(letter);
            count >= self.min_count[idx] && (!self.capped[idx] || count == self.min_count[idx])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.iter().map(Word::text).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_drops_duplicates_keeping_order() {
        let candidates = set(&["slate", "crane", "slate", "trace"]);
        assert_eq!(texts(&candidates), vec!["slate", "crane", "trace"]);
    }

    #[test]
    fn hit_keeps_letter_at_position() {
        let candidates = set(&["crane", "crate", "slate"]);
        let pattern: Pattern = "2,0,0,0,0".parse().unwrap();
        let remaining = candidates.filter(&word("cxxxx"), &pattern).unwrap();
        assert_eq!(texts(&remaining), vec!["crane", "crate"]);
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let candidates = set(&["crane", "acorn", "slate"]);
        // c present at position 1: must contain c, not at position 1
        let pattern: Pattern = "0,1,0,0,0".parse().unwrap();
        let remaining = candidates.filter(&word("xcxxx"), &pattern).unwrap();
        assert_eq!(texts(&remaining), vec!["crane"]);
    }

    #[test]
    fn miss_removes_words_with_letter() {
        let candidates = set(&["crane", "slate", "pious"]);
        let pattern: Pattern = "0,0,0,0,0".parse().unwrap();
        let remaining = candidates.filter(&word("eeeee"), &pattern).unwrap();
        assert_eq!(texts(&remaining), vec!["pious"]);
    }

    #[test]
    fn end_to_end_trace_against_crane() {
        let candidates = set(&["crane", "trace", "slate"]);
        let guess = word("trace");
        let pattern = Pattern::evaluate(&guess, &word("crane")).unwrap();
        let remaining = candidates.filter(&guess, &pattern).unwrap();
        assert_eq!(texts(&remaining), vec!["crane"]);
    }

    #[test]
    fn duplicate_miss_caps_count() {
        // ALLOW vs ALOFT: the second L is a miss, so exactly one L
        let candidates = set(&["aloft", "allot", "alone", "atoll"]);
        let guess = word("allow");
        let pattern = Pattern::evaluate(&guess, &word("aloft")).unwrap();
        let remaining = candidates.filter(&guess, &pattern).unwrap();
        assert_eq!(texts(&remaining), vec!["aloft", "alone"]);
    }

    #[test]
    fn duplicate_present_requires_both_copies() {
        let candidates = set(&["erase", "crane", "eager"]);
        let guess = word("speed");
        let pattern = Pattern::evaluate(&guess, &word("erase")).unwrap();
        let remaining = candidates.filter(&guess, &pattern).unwrap();
        assert!(remaining.contains(&word("erase")));
        assert!(!remaining.contains(&word("crane")));
    }

    #[test]
    fn secret_always_survives() {
        let words = ["there", "eerie", "geese", "speed", "erase", "robot", "floor", "allow"];
        let candidates = set(&words);
        for guess in &words {
            for secret in &words {
                let guess = word(guess);
                let secret = word(secret);
                let pattern = Pattern::evaluate(&guess, &secret).unwrap();
                let remaining = candidates.filter(&guess, &pattern).unwrap();
                assert!(remaining.contains(&secret), "{secret} lost after {guess}");
            }
        }
    }

    #[test]
    fn filter_is_idempotent_and_shrinks() {
        let candidates = set(&["crane", "crate", "grate", "irate", "slate", "trace"]);
        let guess = word("crate");
        let pattern = Pattern::evaluate(&guess, &word("grate")).unwrap();

        let once = candidates.filter(&guess, &pattern).unwrap();
        let twice = once.filter(&guess, &pattern).unwrap();

        assert_eq!(once, twice);
        assert!(once.len() <= candidates.len());
        assert_eq!(candidates.len(), 6); // input untouched
    }

    #[test]
    fn filter_can_empty_the_set() {
        let candidates = set(&["crane", "slate"]);
        let remaining = candidates
            .filter(&word("zzzzz"), &Pattern::solved(5))
            .unwrap();
        assert!(remaining.is_empty());
    }

    #[test]
    fn filter_rejects_length_mismatch() {
        let candidates = set(&["crane", "slate"]);
        let short: Pattern = "0,0,0,0".parse().unwrap();
        assert!(matches!(
            candidates.filter(&word("crane"), &short),
            Err(WordleError::LengthMismatch { .. })
        ));
        assert!(matches!(
            candidates.filter(&word("cranes"), &Pattern::solved(6)),
            Err(WordleError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        ));
    }
}
