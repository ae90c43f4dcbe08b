//! Scoring engine
//!
//! Scores candidate guesses against the current candidate set. One engine
//! serves both scoring policies; the policy only decides how the ranking
//! engine orders the resulting [`GuessScore`]s.

mod calculator;
mod tiebreak;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_expected_remaining, calculate_metrics,
    expected_remaining, partition_sizes, shannon_entropy,
};
pub use tiebreak::{LetterFrequencies, TieBreakPolicy, TieBreaker};

use super::CandidatePool;
use crate::core::Word;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Primary metric used to rank guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    /// Maximize expected information (bits)
    #[default]
    Entropy,
    /// Minimize expected surviving candidates
    ExpectedRemaining,
}

impl ScoringPolicy {
    /// Human-readable name of the primary metric
    #[must_use]
    pub const fn metric_name(self) -> &'static str {
        match self {
            Self::Entropy => "Entropy",
            Self::ExpectedRemaining => "Exp.Left",
        }
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    /// Supported names: "entropy", "expected" (or "expected-remaining")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entropy" => Ok(Self::Entropy),
            "expected" | "expected-remaining" => Ok(Self::ExpectedRemaining),
            other => Err(format!(
                "unknown scoring policy '{other}' (expected 'entropy' or 'expected')"
            )),
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => f.write_str("entropy"),
            Self::ExpectedRemaining => f.write_str("expected"),
        }
    }
}

/// Transient score tuple for one candidate guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessScore {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    /// Whether the guess could itself be the answer
    pub is_possible: bool,
    pub tiebreak: f64,
}

impl GuessScore {
    /// Score a single guess against the candidate pool
    #[must_use]
    pub fn evaluate(guess: &Word, candidates: &CandidatePool, tiebreaker: &TieBreaker) -> Self {
        let metrics = calculate_metrics(guess, candidates.as_slice());
        Self {
            word: guess.clone(),
            entropy: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
            is_possible: candidates.contains(guess),
            tiebreak: tiebreaker.score(guess),
        }
    }
}

/// Score every guess in `guess_pool` against `candidates`, in parallel
///
/// Each guess is independent, so the pool is split across rayon workers and
/// the results are collected in `guess_pool` order. `on_scored` runs once per
/// scored guess, from whichever worker scored it.
pub fn score_guesses<F>(
    guess_pool: &[Word],
    candidates: &CandidatePool,
    tiebreaker: &TieBreaker,
    on_scored: F,
) -> Vec<GuessScore>
where
    F: Fn() + Sync,
{
    guess_pool
        .par_iter()
        .map(|guess| {
            let score = GuessScore::evaluate(guess, candidates, tiebreaker);
            on_scored();
            score
        })
        .collect()
}
