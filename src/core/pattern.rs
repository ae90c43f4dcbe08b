//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (gray, letter not in word)
//! - 1 = Present (yellow, letter in word, wrong position)
//! - 2 = Hit (green, letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.
//!
//! The textual form is a 5-character code of `g` (hit), `y` (present) and
//! `x` (absent).

use super::word::{WORD_LENGTH, Word, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Green: right letter, right position
    Hit,
    /// Yellow: letter is in the answer elsewhere
    Present,
    /// Gray: no unmatched occurrence left in the answer
    Absent,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// The pattern-code character for this feedback
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hit => 'g',
            Self::Present => 'y',
            Self::Absent => 'x',
        }
    }

    /// Parse a single pattern-code character (case-insensitive)
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' => Some(Self::Hit),
            'y' | 'Y' => Some(Self::Present),
            'x' | 'X' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for malformed pattern codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must be exactly 5 characters, got {0}")]
    InvalidLength(usize),
    #[error("pattern may only contain g, y or x, found '{0}'")]
    InvalidSymbol(char),
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All hits (the winning pattern)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All absent
    pub const NONE: Self = Self(0);

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is the winning pattern (all hits)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements Wordle's duplicate-letter rules with a two-pass,
    /// multiset-consuming scan:
    /// 1. Hits are marked first and each consumes one occurrence of its letter
    /// 2. Remaining positions become Present only while an unconsumed
    ///    occurrence of their letter is left, otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_code(), "xxgxg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_chars = guess.chars();
        let answer_chars = answer.chars();
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // First pass: hits
        for (i, slot) in result.iter_mut().enumerate() {
            if guess_chars[i] == answer_chars[i] {
                *slot = Feedback::Hit;
                available[letter_index(guess_chars[i])] -= 1;
            }
        }

        // Second pass: presents from what the hits left over
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == Feedback::Hit {
                continue;
            }
            let count = &mut available[letter_index(guess_chars[i])];
            if *count > 0 {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Self::from_feedback(result)
    }

    /// Pack five feedback symbols into a pattern
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LENGTH]) -> Self {
        let value = feedback
            .iter()
            .rev()
            .fold(0u8, |acc, fb| acc * 3 + fb.digit());
        Self(value)
    }

    /// Unpack the pattern into per-position feedback
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        let mut out = [Feedback::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut out {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        out
    }

    /// Count the number of hit (green) squares
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&fb| fb == Feedback::Hit)
            .count()
    }

    /// Count the number of present (yellow) squares
    #[must_use]
    pub fn count_presents(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&fb| fb == Feedback::Present)
            .count()
    }

    /// Render as a `g`/`y`/`x` code
    #[must_use]
    pub fn to_code(self) -> String {
        self.feedback().iter().map(|fb| fb.code()).collect()
    }

    /// Parse a `g`/`y`/`x` code such as `"xygxg"`
    ///
    /// Letters are case-insensitive and surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `PatternError` if the code is not 5 symbols long or contains
    /// anything other than `g`, `y` or `x`.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Pattern};
    ///
    /// assert!(Pattern::from_code("gyx").is_err());
    ///
    /// let pattern = Pattern::from_code("GYxxg").unwrap();
    /// assert_eq!(pattern.feedback()[1], Feedback::Present);
    /// ```
    pub fn from_code(code: &str) -> Result<Self, PatternError> {
        let code = code.trim();
        let len = code.chars().count();
        if len != WORD_LENGTH {
            return Err(PatternError::InvalidLength(len));
        }

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in feedback.iter_mut().zip(code.chars()) {
            *slot = Feedback::from_code(ch).ok_or(PatternError::InvalidSymbol(ch))?;
        }

        Ok(Self::from_feedback(feedback))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn pattern(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Pattern::calculate(&guess, &answer).to_code()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_hits(), 5);
        assert_eq!(Pattern::PERFECT.count_presents(), 0);
        assert_eq!(Pattern::PERFECT.to_code(), "ggggg");
        assert_eq!(Pattern::NONE.to_code(), "xxxxx");
    }

    #[test_case("crane", "slate", "xxgxg" ; "shared tail")]
    #[test_case("abcde", "fghij", "xxxxx" ; "disjoint letters")]
    #[test_case("crane", "crane", "ggggg" ; "exact match")]
    #[test_case("speed", "erase", "yxyyx" ; "both e present once each")]
    #[test_case("robot", "floor", "yyxgx" ; "hit consumes before present")]
    #[test_case("alloy", "lolly", "xygyg" ; "repeated l limited by answer")]
    #[test_case("lolly", "alloy", "yygxg" ; "reverse of repeated l")]
    #[test_case("eerie", "speed", "yyxxx" ; "more e in guess than answer")]
    #[test_case("abbey", "babes", "yyggx" ; "double b")]
    fn pattern_known_cases(guess: &str, answer: &str, expected: &str) {
        assert_eq!(pattern(guess, answer), expected);
    }

    #[test]
    fn pattern_never_overcounts_letters() {
        // Hits + presents for a letter never exceed its count in the answer
        let words = ["alloy", "lolly", "speed", "erase", "eerie", "geese", "llama"];
        for g in words {
            for a in words {
                let guess = Word::new(g).unwrap();
                let answer = Word::new(a).unwrap();
                let fb = Pattern::calculate(&guess, &answer).feedback();
                let answer_counts = answer.letter_counts();
                let mut marked = [0u8; 26];
                for (i, f) in fb.iter().enumerate() {
                    if *f != Feedback::Absent {
                        marked[letter_index(guess.chars()[i])] += 1;
                    }
                }
                for letter in 0..26 {
                    assert!(marked[letter] <= answer_counts[letter], "{g} vs {a}");
                }
            }
        }
    }

    #[test]
    fn pattern_is_deterministic() {
        let guess = Word::new("alloy").unwrap();
        let answer = Word::new("lolly").unwrap();
        let first = Pattern::calculate(&guess, &answer);
        for _ in 0..10 {
            assert_eq!(Pattern::calculate(&guess, &answer), first);
        }
    }

    #[test]
    fn pattern_encoding_is_base3_by_position() {
        // x + y×3 + g×9 + x×27 + g×81 = 3 + 18 + 162
        let pattern = Pattern::from_code("xygxg").unwrap();
        assert_eq!(pattern.value(), 183);
        assert_eq!(pattern.count_hits(), 2);
        assert_eq!(pattern.count_presents(), 1);
    }

    #[test]
    fn pattern_feedback_roundtrip() {
        let fb = [
            Feedback::Present,
            Feedback::Hit,
            Feedback::Hit,
            Feedback::Absent,
            Feedback::Present,
        ];
        assert_eq!(Pattern::from_feedback(fb).feedback(), fb);
    }

    #[test]
    fn pattern_from_code_normalizes() {
        let p1 = Pattern::from_code("GYGXX").unwrap();
        let p2 = Pattern::from_code("  gygxx \n").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.to_string(), "gygxx");
    }

    #[test]
    fn pattern_from_code_invalid() {
        assert_eq!(
            Pattern::from_code("gyggyx"),
            Err(PatternError::InvalidLength(6))
        );
        assert_eq!(
            Pattern::from_code("gyg"),
            Err(PatternError::InvalidLength(3))
        );
        assert_eq!(Pattern::from_code(""), Err(PatternError::InvalidLength(0)));
        assert_eq!(
            Pattern::from_code("gy-gy"),
            Err(PatternError::InvalidSymbol('-'))
        );
        assert!("🟩🟨⬛🟩🟨".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }
}
