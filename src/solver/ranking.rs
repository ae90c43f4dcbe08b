//! Ranking engine
//!
//! Orders [`GuessScore`]s with a strict total order and keeps the top N.
//!
//! - `Entropy`: entropy ↓, possible first, expected remaining ↑, tie-break ↓, word ↑
//! - `ExpectedRemaining`: expected remaining ↑, possible first, tie-break ↓, entropy ↓,
//!   word ↑
//!
//! The final alphabetical key makes the order total, so the output never
//! depends on the order scores were produced in.

use super::scoring::{GuessScore, ScoringPolicy};
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Number of recommendations returned when the caller does not say
pub const DEFAULT_TOP_N: usize = 10;

/// One ranked guess as handed to presentation code
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub word: Word,
    /// Entropy (bits) or expected remaining, depending on the policy
    pub primary: f64,
    /// Expected remaining under `Entropy`, tie-break score under `ExpectedRemaining`
    pub secondary: f64,
    pub is_possible: bool,
}

impl Recommendation {
    #[must_use]
    pub fn from_score(score: GuessScore, policy: ScoringPolicy) -> Self {
        let (primary, secondary) = match policy {
            ScoringPolicy::Entropy => (score.entropy, score.expected_remaining),
            ScoringPolicy::ExpectedRemaining => (score.expected_remaining, score.tiebreak),
        };
        Self {
            word: score.word,
            primary,
            secondary,
            is_possible: score.is_possible,
        }
    }
}

/// Compare two scores; `Less` means `a` ranks before `b`
#[must_use]
pub fn compare_scores(policy: ScoringPolicy, a: &GuessScore, b: &GuessScore) -> Ordering {
    // `true` sorts after `false`, so compare b to a to put possible answers first
    let possible_first = b.is_possible.cmp(&a.is_possible);

    match policy {
        ScoringPolicy::Entropy => b
            .entropy
            .total_cmp(&a.entropy)
            .then(possible_first)
            .then(a.expected_remaining.total_cmp(&b.expected_remaining))
            .then(b.tiebreak.total_cmp(&a.tiebreak)),
        ScoringPolicy::ExpectedRemaining => a
            .expected_remaining
            .total_cmp(&b.expected_remaining)
            .then(possible_first)
            .then(b.tiebreak.total_cmp(&a.tiebreak))
            .then(b.entropy.total_cmp(&a.entropy)),
    }
    .then_with(|| a.word.cmp(&b.word))
}

/// Sort scores by `policy` and keep the best `top_n`
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::scoring::{GuessScore, ScoringPolicy};
/// use wordle_advisor::solver::rank;
///
/// let score = |w: &str, entropy: f64, possible: bool| GuessScore {
///     word: Word::new(w).unwrap(),
///     entropy,
///     expected_remaining: 2.0,
///     is_possible: possible,
///     tiebreak: 0.0,
/// };
/// let scores = vec![
///     score("slate", 1.5, false),
///     score("crate", 1.5, true),
///     score("pudgy", 0.2, true),
/// ];
///
/// let ranked = rank(scores, ScoringPolicy::Entropy, 2);
/// let words: Vec<&str> = ranked.iter().map(|r| r.word.text()).collect();
/// assert_eq!(words, ["crate", "slate"]);
/// ```
#[must_use]
pub fn rank(
    mut scores: Vec<GuessScore>,
    policy: ScoringPolicy,
    top_n: usize,
) -> Vec<Recommendation> {
    scores.par_sort_unstable_by(|a, b| compare_scores(policy, a, b));
    scores
        .into_iter()
        .take(top_n)
        .map(|score| Recommendation::from_score(score, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(word: &str, entropy: f64, expected: f64, possible: bool, tiebreak: f64) -> GuessScore {
        GuessScore {
            word: Word::new(word).unwrap(),
            entropy,
            expected_remaining: expected,
            is_possible: possible,
            tiebreak,
        }
    }

    fn ranked_words(scores: Vec<GuessScore>, policy: ScoringPolicy) -> Vec<String> {
        rank(scores, policy, usize::MAX)
            .into_iter()
            .map(|r| r.word.to_string())
            .collect()
    }

    #[test]
    fn entropy_policy_key_order() {
        let scores = vec![
            score("aaaaa", 1.0, 3.0, false, 0.9), // lower entropy loses first
            score("bbbbb", 2.0, 3.0, false, 0.9), // impossible word loses to possible answer
            score("ccccc", 2.0, 3.0, true, 0.1),  // higher expected loses
            score("ddddd", 2.0, 2.0, true, 0.1),  // lower tiebreak loses
            score("eeeee", 2.0, 2.0, true, 0.5),
            score("fffff", 2.0, 2.0, true, 0.5), // same as eeeee, loses alphabetically
        ];
        assert_eq!(
            ranked_words(scores, ScoringPolicy::Entropy),
            ["eeeee", "fffff", "ddddd", "ccccc", "bbbbb", "aaaaa"]
        );
    }

    #[test]
    fn expected_policy_key_order() {
        let scores = vec![
            score("aaaaa", 3.0, 4.0, true, 9.0), // higher expected loses first
            score("bbbbb", 3.0, 2.0, false, 9.0), // impossible word loses to possible answer
            score("ccccc", 3.0, 2.0, true, 1.0),  // lower commonality loses
            score("ddddd", 1.0, 2.0, true, 5.0),  // lower entropy loses
            score("eeeee", 2.0, 2.0, true, 5.0),
        ];
        assert_eq!(
            ranked_words(scores, ScoringPolicy::ExpectedRemaining),
            ["eeeee", "ddddd", "ccccc", "bbbbb", "aaaaa"]
        );
    }

    #[test]
    fn ranking_ignores_input_order() {
        let scores = vec![
            score("slate", 1.5, 2.0, false, 0.3),
            score("crate", 1.5, 2.0, true, 0.3),
            score("irate", 1.5, 2.0, true, 0.3),
            score("pudgy", 0.0, 4.0, false, 0.1),
        ];
        let mut reversed = scores.clone();
        reversed.reverse();

        let first = rank(scores, ScoringPolicy::Entropy, 3);
        let second = rank(reversed, ScoringPolicy::Entropy, 3);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].word.text(), "crate");
    }

    #[test]
    fn recommendation_columns_follow_policy() {
        let s = score("crane", 1.25, 2.5, true, 0.75);
        let by_entropy = Recommendation::from_score(s.clone(), ScoringPolicy::Entropy);
        assert!((by_entropy.primary - 1.25).abs() < f64::EPSILON);
        assert!((by_entropy.secondary - 2.5).abs() < f64::EPSILON);

        let by_expected = Recommendation::from_score(s, ScoringPolicy::ExpectedRemaining);
        assert!((by_expected.primary - 2.5).abs() < f64::EPSILON);
        assert!((by_expected.secondary - 0.75).abs() < f64::EPSILON);
        assert!(by_expected.is_possible);
    }

    #[test]
    fn rank_empty_and_zero_top_n() {
        assert!(rank(Vec::new(), ScoringPolicy::Entropy, 10).is_empty());
        let scores = vec![score("crane", 1.0, 1.0, true, 0.0)];
        assert!(rank(scores, ScoringPolicy::Entropy, 0).is_empty());
    }
}
