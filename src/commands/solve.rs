//! Self-play command
//!
//! Plays a full game against a known secret, taking the advisor's own top
//! recommendation each turn.

use super::advice::AdviceConfig;
use crate::core::{Pattern, Word};
use crate::solver::scoring::calculate_entropy;
use crate::solver::Session;
use crate::wordlists::OPENING_WORDS;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Error type for self-play
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("'{0}' is not a possible answer")]
    UnknownSecret(Word),
    #[error("no possible answers to choose a secret from")]
    NoCandidates,
}

/// Configuration for solving a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub max_guesses: usize,
    /// Open with the best known opener instead of scoring the first turn
    pub use_opener: bool,
    pub advice: AdviceConfig,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            use_opener: true,
            advice: AdviceConfig::default(),
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Word,
    pub steps: Vec<SolveStep>,
    pub success: bool,
}

/// A single guess in the transcript
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it was played against
    pub entropy: Option<f64>,
}

/// First entry of [`OPENING_WORDS`] the session knows, if any
#[must_use]
pub fn opening_word(session: &Session) -> Option<Word> {
    OPENING_WORDS
        .iter()
        .filter_map(|w| Word::new(w).ok())
        .find(|w| session.is_known_word(w))
}

/// Pick a random secret from the session's possible answers
///
/// # Errors
///
/// Returns `SolveError::NoCandidates` if nothing is left to choose from.
pub fn pick_secret<R: Rng + ?Sized>(session: &Session, rng: &mut R) -> Result<Word, SolveError> {
    session
        .candidates()
        .choose(rng)
        .cloned()
        .ok_or(SolveError::NoCandidates)
}

/// Solve `secret` from a fresh game using the session's recommendations
///
/// The session is reset first and left holding the played game.
///
/// # Errors
///
/// Returns `SolveError::UnknownSecret` if `secret` is not a possible answer.
pub fn solve_word(
    session: &mut Session,
    secret: &Word,
    config: SolveConfig,
) -> Result<SolveResult, SolveError> {
    session.reset();
    if !session.is_possible(secret) {
        return Err(SolveError::UnknownSecret(secret.clone()));
    }

    let mut opener = if config.use_opener {
        opening_word(session)
    } else {
        None
    };

    let mut steps = Vec::new();
    for _ in 0..config.max_guesses {
        let candidates_before = session.remaining_count();

        let guess = if let Some(word) = opener.take() {
            word
        } else {
            let best = session.recommend(1, config.advice.policy);
            let Some(rec) = best.into_iter().next() else {
                break;
            };
            rec.word
        };

        let entropy = (candidates_before > 1)
            .then(|| calculate_entropy(&guess, session.candidates()));
        let pattern = Pattern::calculate(&guess, secret);
        let candidates_after = session.apply(guess.clone(), pattern);

        steps.push(SolveStep {
            guess,
            pattern,
            candidates_before,
            candidates_after,
            entropy,
        });

        if pattern.is_perfect() {
            log::debug!("solved {secret} in {} guesses", steps.len());
            return Ok(SolveResult {
                secret: secret.clone(),
                steps,
                success: true,
            });
        }
    }

    Ok(SolveResult {
        secret: secret.clone(),
        steps,
        success: false,
    })
}
