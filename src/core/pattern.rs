//! Wordle feedback pattern calculation and representation
//!
//! A pattern holds one mark per letter of the guess:
//! - 0 = Miss (letter not in word, or over-counted)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Hit (letter in correct position)

use super::Word;
use super::word::{ALPHABET_SIZE, letter_index};
use crate::error::{Result, WordleError};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Miss,
    Present,
    Hit,
}

impl Mark {
    /// Numeric form used by the text interface (0, 1, 2)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    /// Parse the numeric form
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Miss),
            1 => Some(Self::Present),
            2 => Some(Self::Hit),
            _ => None,
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        if let Some(digit) = ch.to_digit(10) {
            return Self::from_digit(digit as u8);
        }
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    marks: Vec<Mark>,
}

impl Pattern {
    /// Build a pattern from explicit marks
    #[must_use]
    pub fn from_marks(marks: Vec<Mark>) -> Self {
        Self { marks }
    }

    /// The all-hit pattern for words of `length` letters
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self {
            marks: vec![Mark::Hit; length],
        }
    }

    /// Calculate the pattern when `guess` is guessed and `secret` is the target
    ///
    /// This implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches as hits and consume them from the
    ///    secret's letter counts
    /// 2. Second pass, left to right: mark a letter present while the secret
    ///    still has an unconsumed copy of it, otherwise miss
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_analysis::core::{Mark, Pattern, Word};
    ///
    /// let guess = Word::new("allow").unwrap();
    /// let secret = Word::new("aloft").unwrap();
    /// let pattern = Pattern::evaluate(&guess, &secret).unwrap();
    ///
    /// use Mark::{Hit, Miss, Present};
    /// assert_eq!(pattern.marks(), &[Hit, Hit, Miss, Present, Miss]);
    /// ```
    pub fn evaluate(guess: &Word, secret: &Word) -> Result<Self> {
        if guess.len() != secret.len() {
            return Err(WordleError::LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let mut marks = vec![Mark::Miss; guess.len()];
        fill_marks(guess, secret, &mut marks);
        Ok(Self { marks })
    }

    /// Parse feedback typed by a player, expecting `length` marks
    ///
    /// Accepts digits (`0,0,0,2,0`, `0 0 0 2 0` or `00020`), letters
    /// (`G`, `Y`, `-`) or coloured squares.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidPattern` on unknown symbols or the wrong
    /// number of marks.
    pub fn parse(input: &str, length: usize) -> Result<Self> {
        let pattern: Self = input.parse()?;
        if pattern.len() != length {
            return Err(WordleError::invalid_pattern(
                input,
                format!("expected {length} marks, got {}", pattern.len()),
            ));
        }
        Ok(pattern)
    }

    /// The marks, one per letter of the guess
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of marks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True for a pattern with no marks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every mark is a hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Hit)
    }

    /// Count the marks of one kind
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Numeric form, one digit per letter
    #[must_use]
    pub fn digits(&self) -> Vec<u8> {
        self.marks.iter().map(|m| m.digit()).collect()
    }
}

/// Two-pass evaluation into a caller-provided buffer
///
/// Lengths must already be validated.
pub(crate) fn fill_marks(guess: &Word, secret: &Word, marks: &mut [Mark]) {
    let mut available: [u8; ALPHABET_SIZE] = secret.letter_counts();

    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            marks[i] = Mark::Hit;
            available[letter_index(g)] -= 1;
        } else {
            marks[i] = Mark::Miss;
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if marks[i] == Mark::Hit {
            continue;
        }
        let slot = &mut available[letter_index(g)];
        if *slot > 0 {
            marks[i] = Mark::Present;
            *slot -= 1;
        }
    }
}

/// Base-3 code of a mark sequence, position i weighted by 3^i
///
/// Unique for sequences up to 40 marks.
pub(crate) fn marks_code(marks: &[Mark]) -> u64 {
    marks
        .iter()
        .rev()
        .fold(0u64, |code, m| code * 3 + u64::from(m.digit()))
}

impl std::str::FromStr for Pattern {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WordleError::invalid_pattern(s, "no marks given"));
        }

        let separated = trimmed.contains(|c: char| c == ',' || c.is_whitespace());
        let marks = if separated {
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    let mut chars = token.chars();
                    match (chars.next().and_then(Mark::from_symbol), chars.next()) {
                        (Some(mark), None) => Ok(mark),
                        _ => Err(WordleError::invalid_pattern(
                            s,
                            format!("unknown mark '{token}'"),
                        )),
                    }
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            trimmed
                .chars()
                .map(|ch| {
                    Mark::from_symbol(ch).ok_or_else(|| {
                        WordleError::invalid_pattern(s, format!("unknown mark '{ch}'"))
                    })
                })
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self { marks })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mark) in self.marks.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", mark.digit())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Mark::{Hit, Miss, Present};
    use super::*;

    fn eval(guess: &str, secret: &str) -> Pattern {
        Pattern::evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap()).unwrap()
    }

    #[test]
    fn pattern_all_miss() {
        let pattern = eval("abcde", "fghij");
        assert_eq!(pattern.marks(), &[Miss; 5]);
        assert_eq!(pattern.count(Hit), 0);
        assert_eq!(pattern.count(Present), 0);
    }

    #[test]
    fn pattern_all_hit() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let pattern = eval(word, word);
            assert!(pattern.is_solved());
            assert_eq!(pattern, Pattern::solved(5));
        }
    }

    #[test]
    fn pattern_is_deterministic() {
        assert_eq!(eval("robot", "floor"), eval("robot", "floor"));
    }

    #[test]
    fn pattern_length_mismatch() {
        let guess = Word::new("cranes").unwrap();
        let secret = Word::new("crane").unwrap();
        assert!(matches!(
            Pattern::evaluate(&guess, &secret),
            Err(WordleError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn pattern_duplicate_guess_letter_exceeds_secret() {
        // ALOFT has one L, already used by the hit at position 1
        assert_eq!(eval("allow", "aloft").marks(), &[Hit, Hit, Miss, Present, Miss]);
    }

    #[test]
    fn pattern_duplicate_letters_both_present() {
        // ERASE has two E's, neither at positions 2 or 3
        assert_eq!(
            eval("speed", "erase").marks(),
            &[Present, Miss, Present, Present, Miss]
        );
    }

    #[test]
    fn pattern_duplicate_letters_hit_takes_priority() {
        // The second O of ROBOT is a hit, so only one O remains for the first
        assert_eq!(
            eval("robot", "floor").marks(),
            &[Present, Present, Miss, Hit, Miss]
        );
    }

    #[test]
    fn pattern_leftmost_duplicate_gets_present() {
        assert_eq!(eval("eerie", "there").marks(), &[Present, Miss, Present, Miss, Hit]);
        assert_eq!(eval("geese", "eerie").marks(), &[Miss, Hit, Present, Miss, Hit]);
    }

    #[test]
    fn pattern_trace_against_crane() {
        assert_eq!(eval("trace", "crane").marks(), &[Miss, Hit, Hit, Present, Hit]);
    }

    #[test]
    fn pattern_other_lengths() {
        assert_eq!(eval("cat", "act").marks(), &[Present, Present, Hit]);
    }

    #[test]
    fn parse_digit_forms() {
        let expected = Pattern::from_marks(vec![Miss, Miss, Miss, Hit, Present]);
        assert_eq!(Pattern::parse("0,0,0,2,1", 5).unwrap(), expected);
        assert_eq!(Pattern::parse("0, 0, 0, 2, 1", 5).unwrap(), expected);
        assert_eq!(Pattern::parse("0 0 0 2 1", 5).unwrap(), expected);
        assert_eq!(Pattern::parse("00021", 5).unwrap(), expected);
    }

    #[test]
    fn parse_letter_and_emoji_forms() {
        let p1 = Pattern::parse("GY-GY", 5).unwrap();
        let p2 = Pattern::parse("🟩🟨⬜🟩🟨", 5).unwrap();
        let p3 = Pattern::parse("gy_gy", 5).unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.digits(), vec![2, 1, 0, 2, 1]);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Pattern::parse("0,0,3,0,0", 5).is_err());
        assert!(Pattern::parse("0,0,0,0", 5).is_err());
        assert!(Pattern::parse("000000", 5).is_err());
        assert!(Pattern::parse("", 5).is_err());
        assert!(Pattern::parse("10,0,0,0", 5).is_err());
        assert!(Pattern::parse("GXGGY", 5).is_err());
    }

    #[test]
    fn mark_digits() {
        for mark in [Mark::Miss, Mark::Present, Mark::Hit] {
            assert_eq!(Mark::from_digit(mark.digit()), Some(mark));
        }
        assert_eq!(Mark::from_digit(3), None);
        assert_eq!(
            Pattern::parse("9,0,0,0,0", 5).unwrap_err().to_string(),
            "invalid pattern '9,0,0,0,0': unknown mark '9'"
        );
    }

    #[test]
    fn display_uses_comma_separated_digits() {
        assert_eq!(eval("trace", "crane").to_string(), "0,2,2,1,2");
    }

    #[test]
    fn marks_code_is_positional() {
        assert_eq!(marks_code(&[Miss; 5]), 0);
        assert_eq!(marks_code(&[Hit; 5]), 242);
        assert_eq!(marks_code(&[Present, Miss, Miss, Miss, Miss]), 1);
        assert_eq!(marks_code(&[Miss, Miss, Miss, Miss, Present]), 81);
    }
}
