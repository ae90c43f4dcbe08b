//! Solver session
//!
//! Owns the candidate set, the observation history and the mode
//! configuration, and exposes the stateful API used by presentation code.

use super::pool::CandidatePool;
use super::ranking::{Recommendation, rank};
use super::scoring::{
    GuessScore, LetterFrequencies, ScoringPolicy, TieBreakPolicy, TieBreaker, calculate_entropy,
    score_guesses,
};
use crate::core::{FrequencyTable, Pattern, PatternError, Word, WordError};
use std::time::Instant;
use thiserror::Error;

/// Malformed guess or pattern passed to [`Session::apply_observation`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid guess: {0}")]
    Guess(#[from] WordError),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),
}

/// Preset mode combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Full vocabulary as candidates and guesses, letter-frequency tie-break
    #[default]
    Standard,
    /// Hard mode: only still-possible answers are suggested
    Restricted,
    /// Curated solutions from the frequency table, commonality tie-break
    Curated,
}

/// Where the initial candidate set comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolutionSpace {
    /// Every vocabulary word may be the answer
    #[default]
    Full,
    /// Only the words of the frequency table may be the answer
    Curated,
}

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub space: SolutionSpace,
    /// Restrict suggestions to possible answers
    pub hard_mode: bool,
    pub tiebreak: TieBreakPolicy,
}

impl From<SessionMode> for SessionConfig {
    fn from(mode: SessionMode) -> Self {
        match mode {
            SessionMode::Standard => Self::default(),
            SessionMode::Restricted => Self {
                hard_mode: true,
                ..Self::default()
            },
            SessionMode::Curated => Self {
                space: SolutionSpace::Curated,
                hard_mode: false,
                tiebreak: TieBreakPolicy::Commonality,
            },
        }
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No observation applied yet
    Initialized,
    /// Observations applied and more than one candidate left
    InProgress,
    /// One candidate left, or the last observation was all hits
    Solved,
    /// No candidate left: the observations contradict each other
    Exhausted,
}

/// A guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub guess: Word,
    pub pattern: Pattern,
}

/// One game's worth of solver state
///
/// The vocabulary and frequency table are owned values, so independent
/// sessions never share state.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    /// Words that may be suggested as guesses
    guess_pool: CandidatePool,
    /// Candidate set restored on reset
    initial: CandidatePool,
    candidates: CandidatePool,
    history: Vec<Observation>,
    tiebreaker: TieBreaker,
}

impl Session {
    /// Create a session from one of the preset modes
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::solver::{ScoringPolicy, Session, SessionMode};
    ///
    /// let vocabulary = ["crane", "slate", "trace", "arose", "stare", "pudgy"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap());
    /// let mut session = Session::new(vocabulary, SessionMode::Standard, None);
    ///
    /// assert_eq!(session.apply_observation("crane", "xxxxx").unwrap(), 1);
    /// let best = session.recommend(10, ScoringPolicy::Entropy);
    /// assert_eq!(best[0].word.text(), "pudgy");
    /// ```
    pub fn new(
        vocabulary: impl IntoIterator<Item = Word>,
        mode: SessionMode,
        frequencies: Option<FrequencyTable>,
    ) -> Self {
        Self::with_config(vocabulary, mode.into(), frequencies)
    }

    /// Create a session from an explicit configuration
    ///
    /// A curated space without a frequency table falls back to the whole
    /// vocabulary; a commonality tie-break without one scores every word at
    /// the baseline weight.
    pub fn with_config(
        vocabulary: impl IntoIterator<Item = Word>,
        config: SessionConfig,
        frequencies: Option<FrequencyTable>,
    ) -> Self {
        let vocabulary = CandidatePool::new(vocabulary);

        let initial = match (config.space, &frequencies) {
            (SolutionSpace::Curated, Some(table)) => CandidatePool::new(table.words()),
            (SolutionSpace::Curated, None) => {
                log::warn!("curated mode without a frequency table, using the full vocabulary");
                vocabulary.clone()
            }
            (SolutionSpace::Full, _) => vocabulary.clone(),
        };

        let guess_pool = CandidatePool::new(vocabulary.iter().chain(initial.iter()).cloned());

        let tiebreaker = match config.tiebreak {
            TieBreakPolicy::LetterFrequency => TieBreaker::LetterFrequency(
                LetterFrequencies::from_vocabulary(guess_pool.as_slice()),
            ),
            TieBreakPolicy::Commonality => TieBreaker::Commonality(frequencies.unwrap_or_default()),
        };

        log::debug!(
            "session ready: {} guesses, {} candidates, {config:?}",
            guess_pool.len(),
            initial.len()
        );

        Self {
            config,
            guess_pool,
            candidates: initial.clone(),
            initial,
            history: Vec::new(),
            tiebreaker,
        }
    }

    /// Apply a raw `(guess, code)` observation
    ///
    /// Returns the number of candidates left.
    ///
    /// # Errors
    /// Returns `ValidationError` if the guess is not 5 letters or the code is
    /// not 5 of `g`/`y`/`x`. Nothing is changed in that case.
    pub fn apply_observation(&mut self, guess: &str, code: &str) -> Result<usize, ValidationError> {
        let guess = Word::new(guess)?;
        let pattern = Pattern::from_code(code)?;
        Ok(self.apply(guess, pattern))
    }

    /// Apply an already-validated observation
    ///
    /// Returns the number of candidates left.
    pub fn apply(&mut self, guess: Word, pattern: Pattern) -> usize {
        let before = self.candidates.len();
        let after = self.candidates.retain_consistent(&guess, pattern);
        log::debug!("{guess} {pattern}: {before} -> {after} candidates");
        self.history.push(Observation { guess, pattern });
        after
    }

    /// Best `top_n` guesses under `policy`
    #[must_use]
    pub fn recommend(&self, top_n: usize, policy: ScoringPolicy) -> Vec<Recommendation> {
        self.recommend_with_progress(top_n, policy, || {})
    }

    /// [`Session::recommend`] with a hook called once per scored guess
    pub fn recommend_with_progress<F>(
        &self,
        top_n: usize,
        policy: ScoringPolicy,
        on_scored: F,
    ) -> Vec<Recommendation>
    where
        F: Fn() + Sync,
    {
        if let Some(shortcut) = self.endgame_scores() {
            return rank(shortcut, policy, top_n);
        }

        let guess_pool = if self.config.hard_mode {
            &self.candidates
        } else {
            &self.guess_pool
        };

        let start = Instant::now();
        let scores = score_guesses(
            guess_pool.as_slice(),
            &self.candidates,
            &self.tiebreaker,
            on_scored,
        );
        log::debug!(
            "scored {} guesses against {} candidates in {:?}",
            scores.len(),
            self.candidates.len(),
            start.elapsed()
        );

        rank(scores, policy, top_n)
    }

    /// Best `top_n` guesses among the still-possible answers only
    ///
    /// Useful when the player must commit to a word that could win.
    #[must_use]
    pub fn recommend_possible(&self, top_n: usize, policy: ScoringPolicy) -> Vec<Recommendation> {
        if let Some(shortcut) = self.endgame_scores() {
            return rank(shortcut, policy, top_n);
        }

        let scores = score_guesses(
            self.candidates.as_slice(),
            &self.candidates,
            &self.tiebreaker,
            || {},
        );
        rank(scores, policy, top_n)
    }

    /// Fixed scores for the 0, 1 and 2 candidate cases
    ///
    /// With one candidate left it is the answer. With two, guessing either
    /// splits them perfectly: 1 bit, one word expected to remain.
    fn endgame_scores(&self) -> Option<Vec<GuessScore>> {
        let (entropy, expected_remaining) = match self.candidates.len() {
            0 => return Some(Vec::new()),
            1 => (0.0, 1.0),
            2 => (1.0, 1.0),
            _ => return None,
        };

        Some(
            self.candidates
                .iter()
                .map(|word| GuessScore {
                    word: word.clone(),
                    entropy,
                    expected_remaining,
                    is_possible: true,
                    tiebreak: self.tiebreaker.score(word),
                })
                .collect(),
        )
    }

    /// Remaining candidates, alphabetically, at most `limit`
    #[must_use]
    pub fn remaining_candidates(&self, limit: usize) -> Vec<&Word> {
        self.candidates.iter().take(limit).collect()
    }

    /// Remaining candidates ordered by their own entropy, best first
    ///
    /// Ties keep alphabetical order.
    #[must_use]
    pub fn candidates_by_entropy(&self) -> Vec<(&Word, f64)> {
        let mut ranked: Vec<(&Word, f64)> = self
            .candidates
            .iter()
            .map(|word| (word, calculate_entropy(word, self.candidates.as_slice())))
            .collect();
        ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        ranked
    }

    /// All remaining candidates, alphabetically
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.candidates.as_slice()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    /// Whether `word` is still a possible answer
    #[must_use]
    pub fn is_possible(&self, word: &Word) -> bool {
        self.candidates.contains(word)
    }

    #[must_use]
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Size of the pool guesses are drawn from when not in hard mode
    #[must_use]
    pub fn guess_pool_len(&self) -> usize {
        self.guess_pool.len()
    }

    /// Whether `word` belongs to the guess vocabulary
    #[must_use]
    pub fn is_known_word(&self, word: &Word) -> bool {
        self.guess_pool.contains(word)
    }

    /// Where the game stands; a win is final even if later observations
    /// empty the pool
    #[must_use]
    pub fn state(&self) -> SessionState {
        let won = self
            .history
            .iter()
            .any(|observation| observation.pattern.is_perfect());

        if self.history.is_empty() {
            SessionState::Initialized
        } else if won {
            SessionState::Solved
        } else {
            match self.candidates.len() {
                0 => SessionState::Exhausted,
                1 => SessionState::Solved,
                _ => SessionState::InProgress,
            }
        }
    }

    /// Forget every observation and restore the initial candidate set
    pub fn reset(&mut self) {
        self.candidates = self.initial.clone();
        self.history.clear();
        log::debug!("session reset to {} candidates", self.candidates.len());
    }
}
