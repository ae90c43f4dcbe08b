//! Candidate pool
//!
//! The set of words still consistent with every observation so far.

use crate::core::{Pattern, Word};

/// Keep the members of `pool` that would have produced `pattern` for `guess`
///
/// Order is preserved.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Pattern, Word};
/// use wordle_advisor::solver::filter;
///
/// let pool: Vec<Word> = ["crane", "slate", "pudgy"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
///
/// let kept = filter(&pool, &guess, Pattern::NONE);
/// assert_eq!(kept, vec![Word::new("pudgy").unwrap()]);
/// ```
#[must_use]
pub fn filter(pool: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
    pool.iter()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == pattern)
        .cloned()
        .collect()
}

/// Sorted, duplicate-free set of candidate words
///
/// Kept sorted so membership is a binary search and every listing is
/// alphabetical without re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Build a pool, sorting and removing duplicates
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Narrow the pool to words consistent with `(guess, pattern)`
    ///
    /// Returns the new size. Never adds words.
    pub fn retain_consistent(&mut self, guess: &Word, pattern: Pattern) -> usize {
        self.words
            .retain(|candidate| Pattern::calculate(guess, candidate) == pattern);
        self.words.len()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The remaining words, alphabetically
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn filter_keeps_consistent_words_in_order() {
        let pool = words(&["irate", "crate", "grate", "slate"]);
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("grate").unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        let kept = filter(&pool, &guess, pattern);

        // irate and grate both give xggxg
        assert_eq!(kept, words(&["irate", "grate"]));
    }

    #[test]
    fn filter_empty_pool() {
        let guess = Word::new("crane").unwrap();
        assert!(filter(&[], &guess, Pattern::NONE).is_empty());
    }

    #[test]
    fn pool_is_sorted_and_deduplicated() {
        let pool = CandidatePool::new(words(&["slate", "crane", "slate", "arose"]));
        assert_eq!(
            pool.as_slice(),
            words(&["arose", "crane", "slate"]).as_slice()
        );
        assert!(pool.contains(&Word::new("crane").unwrap()));
        assert!(!pool.contains(&Word::new("pudgy").unwrap()));
    }

    #[test]
    fn retain_never_grows() {
        let mut pool = CandidatePool::new(words(&["irate", "crate", "grate", "slate"]));
        let before = pool.len();
        let guess = Word::new("zzzzz").unwrap();
        let after = pool.retain_consistent(&guess, Pattern::NONE);
        assert_eq!(after, before);

        let guess = Word::new("crate").unwrap();
        let after = pool.retain_consistent(&guess, Pattern::PERFECT);
        assert_eq!(after, 1);
        assert_eq!(pool.as_slice(), words(&["crate"]).as_slice());
    }

    #[test]
    fn retain_can_exhaust() {
        let mut pool = CandidatePool::new(words(&["irate", "crate"]));
        let guess = Word::new("pudgy").unwrap();
        assert_eq!(pool.retain_consistent(&guess, Pattern::PERFECT), 0);
        assert!(pool.is_empty());
    }
}
