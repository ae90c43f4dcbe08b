//! Secondary scores used to order otherwise-equal guesses

use crate::core::{ALPHABET_SIZE, FrequencyTable, Word, letter_index};

/// Which secondary signal breaks ties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreakPolicy {
    /// Favor words made of common letters
    #[default]
    LetterFrequency,
    /// Favor common words (needs a frequency table)
    Commonality,
}

/// Relative letter frequencies over a vocabulary
///
/// Each word counts each of its distinct letters once; the frequencies are
/// normalized to sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies {
    freq: [f64; ALPHABET_SIZE],
}

impl LetterFrequencies {
    /// Count distinct letters per word across `vocabulary`
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::solver::scoring::LetterFrequencies;
    ///
    /// let vocabulary = vec![Word::new("eerie").unwrap(), Word::new("aback").unwrap()];
    /// let freq = LetterFrequencies::from_vocabulary(&vocabulary);
    ///
    /// // e, r, i, a, b, c, k: seven letter sightings in total
    /// assert!((freq.frequency(b'e') - 1.0 / 7.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_vocabulary(vocabulary: &[Word]) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        for word in vocabulary {
            for letter in word.distinct_letters() {
                counts[letter_index(letter)] += 1;
            }
        }

        let total = counts.iter().sum::<usize>();
        let mut freq = [0.0; ALPHABET_SIZE];
        if total > 0 {
            for (slot, &count) in freq.iter_mut().zip(&counts) {
                *slot = count as f64 / total as f64;
            }
        }
        Self { freq }
    }

    /// Relative frequency of a lowercase letter, 0.0 for anything else
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        if letter.is_ascii_lowercase() {
            self.freq[letter_index(letter)]
        } else {
            0.0
        }
    }

    /// Sum of the frequencies of the word's distinct letters
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        word.distinct_letters()
            .map(|letter| self.frequency(letter))
            .sum()
    }
}

/// A tie-break policy together with the data it needs
#[derive(Debug, Clone)]
pub enum TieBreaker {
    LetterFrequency(LetterFrequencies),
    Commonality(FrequencyTable),
}

impl TieBreaker {
    #[must_use]
    pub const fn policy(&self) -> TieBreakPolicy {
        match self {
            Self::LetterFrequency(_) => TieBreakPolicy::LetterFrequency,
            Self::Commonality(_) => TieBreakPolicy::Commonality,
        }
    }

    /// Tie-break score of a word; higher is better
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        match self {
            Self::LetterFrequency(freq) => freq.score(word),
            Self::Commonality(table) => table.commonality(word),
        }
    }
}
