//! Recommendation display shared by the interactive and batch commands

use crate::output::{print_possible_answers, print_recommendations, print_remaining};
use crate::solver::{DEFAULT_TOP_N, Recommendation, ScoringPolicy, Session};
use indicatif::{ProgressBar, ProgressStyle};

/// Guess pools smaller than this are scored without a progress bar
const PROGRESS_THRESHOLD: usize = 2_000;

/// Rows in the "top possible answers" table
const POSSIBLE_ANSWERS_ROWS: usize = 5;

/// How recommendations are computed and shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceConfig {
    pub policy: ScoringPolicy,
    pub top_n: usize,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Score the session, showing a progress bar for large guess pools
#[must_use]
pub fn recommend(session: &Session, config: AdviceConfig) -> Vec<Recommendation> {
    let pool = if session.config().hard_mode {
        session.remaining_count()
    } else {
        session.guess_pool_len()
    };

    if pool < PROGRESS_THRESHOLD || session.remaining_count() <= 2 {
        return session.recommend(config.top_n, config.policy);
    }

    let pb = ProgressBar::new(pool as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("scoring guesses");

    let recommendations =
        session.recommend_with_progress(config.top_n, config.policy, || pb.inc(1));
    pb.finish_and_clear();
    recommendations
}

/// Print recommendations, the possible-answer table and the remaining words
///
/// The possible-answer table only appears when some top guess cannot be the
/// answer and more than two candidates remain.
pub fn show_advice(session: &Session, config: AdviceConfig) {
    let recommendations = recommend(session, config);
    print_recommendations(&recommendations, config.policy, session.remaining_count());

    let has_outsider = recommendations.iter().any(|rec| !rec.is_possible);
    if has_outsider && session.remaining_count() > 2 {
        let possible = session.recommend_possible(POSSIBLE_ANSWERS_ROWS, config.policy);
        print_possible_answers(&possible, config.policy);
    }

    print_remaining(session);
}
