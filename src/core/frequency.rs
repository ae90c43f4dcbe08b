//! Word commonality weights
//!
//! Maps words to positive integer weights (corpus counts). Used only as a
//! secondary ranking signal and to define the curated solution space.

use super::Word;
use rustc_hash::FxHashMap;

/// Weight assumed for words missing from the table
pub const BASELINE_WEIGHT: u64 = 1;

/// Immutable mapping from word to commonality weight
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    weights: FxHashMap<Word, u64>,
}

impl FrequencyTable {
    /// Build a table from `(word, weight)` pairs
    ///
    /// Zero weights are raised to [`BASELINE_WEIGHT`]. Later duplicates
    /// overwrite earlier ones.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{FrequencyTable, Word};
    ///
    /// let about = Word::new("about").unwrap();
    /// let table = FrequencyTable::from_pairs([(about.clone(), 1_000)]);
    ///
    /// assert_eq!(table.weight(&about), 1_000);
    /// assert_eq!(table.weight(&Word::new("xylyl").unwrap()), 1);
    /// ```
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Word, u64)>) -> Self {
        let weights = pairs
            .into_iter()
            .map(|(word, weight)| (word, weight.max(BASELINE_WEIGHT)))
            .collect();
        Self { weights }
    }

    /// Weight of a word, [`BASELINE_WEIGHT`] if unknown
    #[must_use]
    pub fn weight(&self, word: &Word) -> u64 {
        self.weights.get(word).copied().unwrap_or(BASELINE_WEIGHT)
    }

    /// Log-scaled commonality score (`log10(weight)`)
    ///
    /// Monotonic in the weight; unknown words score 0.
    #[must_use]
    pub fn commonality(&self, word: &Word) -> f64 {
        (self.weight(word) as f64).log10()
    }

    /// Whether the word has an explicit entry
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.weights.contains_key(word)
    }

    /// All words with an explicit entry, alphabetically
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.weights.keys().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Entries by weight, most common first; equal weights alphabetically
    #[must_use]
    pub fn ranked(&self) -> Vec<(&Word, u64)> {
        let mut entries: Vec<(&Word, u64)> = self
            .weights
            .iter()
            .map(|(word, &weight)| (word, weight))
            .collect();
        entries.sort_unstable_by(|(wa, a), (wb, b)| b.cmp(a).then_with(|| wa.cmp(wb)));
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
