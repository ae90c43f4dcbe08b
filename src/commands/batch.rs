//! Non-interactive mode: apply `word:pattern` observations from the command line

use super::advice::{AdviceConfig, show_advice};
use crate::core::{Pattern, Word};
use crate::output::formatters::pattern_to_emoji;
use crate::solver::{Session, SessionState, ValidationError};
use colored::Colorize;
use thiserror::Error;

/// Error for a malformed `word:pattern` argument
#[derive(Debug, Error)]
pub enum ObservationError {
    #[error("expected WORD:PATTERN, got '{0}'")]
    MissingSeparator(String),
    #[error("invalid observation '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: ValidationError,
    },
}

/// Parse a `word:pattern` argument such as `crane:xyxxg`
///
/// # Errors
///
/// Returns `ObservationError` if the separator is missing or either half is
/// invalid.
///
/// # Examples
/// ```
/// use wordle_advisor::commands::parse_observation;
///
/// let (word, pattern) = parse_observation("CRANE:xyxxg").unwrap();
/// assert_eq!(word.text(), "crane");
/// assert_eq!(pattern.to_code(), "xyxxg");
/// assert!(parse_observation("crane").is_err());
/// ```
pub fn parse_observation(input: &str) -> Result<(Word, Pattern), ObservationError> {
    let (word, code) = input
        .split_once(':')
        .ok_or_else(|| ObservationError::MissingSeparator(input.to_string()))?;

    let invalid = |source: ValidationError| ObservationError::Invalid {
        input: input.to_string(),
        source,
    };
    let word = Word::new(word).map_err(|e| invalid(e.into()))?;
    let pattern = Pattern::from_code(code).map_err(|e| invalid(e.into()))?;
    Ok((word, pattern))
}

/// Apply every observation, then report the answer or the next best guesses
///
/// All arguments are validated before any is applied.
///
/// # Errors
///
/// Returns the first malformed observation.
pub fn run_batch(
    session: &mut Session,
    observations: &[String],
    config: AdviceConfig,
) -> Result<SessionState, ObservationError> {
    let parsed = observations
        .iter()
        .map(|arg| parse_observation(arg))
        .collect::<Result<Vec<_>, _>>()?;

    for (word, pattern) in parsed {
        let label = format!(
            "{} {}",
            word.text().to_uppercase(),
            pattern_to_emoji(pattern)
        );
        let remaining = session.apply(word, pattern);
        println!("{label} → {remaining} remaining");
    }

    let state = session.state();
    match state {
        SessionState::Solved => {
            if let Some(answer) = session.remaining_candidates(1).first() {
                println!(
                    "\n🎯 The answer is: {}",
                    answer.text().to_uppercase().bright_green().bold()
                );
            } else {
                println!("\n{}", "🎉 Solved!".bright_green().bold());
            }
        }
        SessionState::Exhausted => {
            println!(
                "\n{}",
                "❌ No words match these observations. Check the patterns."
                    .red()
                    .bold()
            );
        }
        SessionState::Initialized | SessionState::InProgress => show_advice(session, config),
    }
    Ok(state)
}
