//! Wordle word representation
//!
//! A Word stores a 5-letter, lower-cased word as both text and raw bytes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Size of the letter alphabet (`a`..=`z`)
pub const ALPHABET_SIZE: usize = 26;

/// A 5-letter Wordle word
///
/// Ordering is alphabetical, which the ranking engine relies on as its final
/// tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and letters are lower-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Count of each letter, indexed by `letter - b'a'`
    ///
    /// This is the answer-side multiset consumed by pattern calculation.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }

    /// Iterate over the distinct letters of the word, in first-occurrence order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, ch)| !self.chars[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }
}

/// Index of a lowercase ASCII letter in `0..26`
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
        assert_eq!(Word::new("  slate\n").unwrap().text(), "slate");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_distinct_letters() {
        let word = Word::new("lolly").unwrap();
        let letters: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(letters, b"loy");
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("arose").unwrap(),
            Word::new("crane").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["arose", "crane", "slate"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "CRANE".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
