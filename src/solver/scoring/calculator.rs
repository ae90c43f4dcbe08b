//! Partition-based guess metrics
//!
//! A guess splits the candidate set into groups by the pattern each candidate
//! would produce. Both scores are functions of the group sizes only.

use crate::core::{PATTERN_COUNT, Pattern, Word};

/// Metrics for evaluating a guess against a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
}

impl GuessMetrics {
    /// Metrics of a guess against an empty candidate set
    pub const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
    };
}

/// Sizes of the non-empty pattern groups, largest first
///
/// The canonical order makes every float reduction over the sizes
/// bit-identical for guesses that split the candidates the same way.
#[must_use]
pub fn partition_sizes(guess: &Word, candidates: &[Word]) -> Vec<usize> {
    let mut counts = [0usize; PATTERN_COUNT];
    for candidate in candidates {
        counts[usize::from(Pattern::calculate(guess, candidate).value())] += 1;
    }

    let mut sizes: Vec<usize> = counts.into_iter().filter(|&count| count > 0).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

/// Calculate Shannon entropy from partition sizes
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a single group or no candidates
/// - Maximized when every group is a singleton
/// - Always in range [0, log₂(n)] for n candidates
///
/// # Examples
/// ```
/// use wordle_advisor::solver::scoring::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 1e-12); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(sizes: &[usize]) -> f64 {
    let total = sizes.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let entropy: f64 = sizes
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single partition sums to -0.0
    entropy + 0.0
}

/// Expected surviving candidates, `Σ c² / n`, assuming a uniform answer
///
/// Returns 0.0 when there are no candidates.
#[must_use]
pub fn expected_remaining(sizes: &[usize]) -> f64 {
    let total = sizes.iter().sum::<usize>();

    if total == 0 {
        return 0.0;
    }

    let squares: usize = sizes.iter().map(|&count| count * count).sum();
    squares as f64 / total as f64
}

/// Calculate Shannon entropy for a guess against candidates
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::scoring::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-12); // two distinct patterns
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    shannon_entropy(&partition_sizes(guess, candidates))
}

/// Calculate the expected number of remaining candidates for a guess
#[must_use]
pub fn calculate_expected_remaining(guess: &Word, candidates: &[Word]) -> f64 {
    expected_remaining(&partition_sizes(guess, candidates))
}

/// Calculate both metrics from a single partitioning pass
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics::EMPTY;
    }

    let sizes = partition_sizes(guess, candidates);
    GuessMetrics {
        entropy: shannon_entropy(&sizes),
        expected_remaining: expected_remaining(&sizes),
    }
}
