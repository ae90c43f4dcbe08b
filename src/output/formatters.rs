//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};
use crate::solver::ScoringPolicy;

/// Format a pattern as emoji string
///
/// # Examples
/// ```
/// use wordle_advisor::core::Pattern;
/// use wordle_advisor::output::formatters::pattern_to_emoji;
///
/// let pattern: Pattern = "gyxxg".parse().unwrap();
/// assert_eq!(pattern_to_emoji(pattern), "🟩🟨⬛⬛🟩");
/// ```
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .feedback()
        .into_iter()
        .map(|feedback| match feedback {
            Feedback::Hit => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        })
        .collect()
}

/// Header of the secondary recommendation column
#[must_use]
pub const fn secondary_label(policy: ScoringPolicy) -> &'static str {
    match policy {
        ScoringPolicy::Entropy => "Exp.Left",
        ScoringPolicy::ExpectedRemaining => "Score",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar, relative to the `log2(candidates)` ceiling
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
