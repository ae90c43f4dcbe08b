//! Display functions for command results

use super::formatters::{entropy_bar, pattern_to_emoji, secondary_label};
use crate::commands::SolveResult;
use crate::core::Word;
use crate::solver::{Observation, Recommendation, ScoringPolicy, Session};
use crate::wordlists::FrequencyMerge;
use colored::Colorize;
use std::path::Path;

/// Candidate count up to which remaining words are listed with their entropy
pub const ENTROPY_LISTING_LIMIT: usize = 20;

/// Candidate count up to which an alphabetical prefix is listed
pub const PREFIX_LISTING_LIMIT: usize = 50;

/// Words shown in the alphabetical prefix listing
pub const PREFIX_LISTING_LEN: usize = 15;

/// Print the ranked recommendation table
pub fn print_recommendations(
    recommendations: &[Recommendation],
    policy: ScoringPolicy,
    candidates: usize,
) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TOP RECOMMENDATIONS".bright_cyan().bold(),
        format!("({candidates} possible answers)").bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    if recommendations.is_empty() {
        println!("  No recommendations available.");
        return;
    }

    println!(
        "  Rank Word    {:>9} {:>9}  Possible?",
        policy.metric_name(),
        secondary_label(policy)
    );
    println!("  {}", "─".repeat(46).bright_black());

    for (i, rec) in recommendations.iter().enumerate() {
        let word = rec.word.text().to_uppercase();
        let word = if rec.is_possible {
            word.green().bold()
        } else {
            word.normal()
        };
        let marker = if rec.is_possible {
            "✓".green()
        } else {
            "".normal()
        };
        let bar = match policy {
            ScoringPolicy::Entropy => entropy_bar(rec.primary, candidates, 10),
            ScoringPolicy::ExpectedRemaining => String::new(),
        };

        println!(
            "  {:<4} {:<7} {:>9.3} {:>9.3}  {:<9} {}",
            i + 1,
            word,
            rec.primary,
            rec.secondary,
            marker,
            bar.bright_black()
        );
    }
}

/// Print the best guesses drawn only from the possible answers
pub fn print_possible_answers(recommendations: &[Recommendation], policy: ScoringPolicy) {
    println!("\n{}", "TOP POSSIBLE ANSWERS".bright_cyan().bold());
    println!("  {}", "─".repeat(32).bright_black());
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "  {:<4} {:<7} {} {:.3}",
            i + 1,
            rec.word.text().to_uppercase().green(),
            policy.metric_name(),
            rec.primary
        );
    }
}

/// Print the words still in play
///
/// Small sets are listed with each word's own entropy, medium ones as an
/// alphabetical prefix, large ones only by count.
pub fn print_remaining(session: &Session) {
    let count = session.remaining_count();

    if count <= ENTROPY_LISTING_LIMIT {
        println!("\n{} ({count}):", "Remaining words".bright_cyan());
        for (word, entropy) in session.candidates_by_entropy() {
            println!("  • {} ({entropy:.2} bits)", word.text().to_uppercase());
        }
    } else if count <= PREFIX_LISTING_LIMIT {
        let words: Vec<String> = session
            .remaining_candidates(PREFIX_LISTING_LEN)
            .iter()
            .map(|word| word.text().to_uppercase())
            .collect();
        println!(
            "\n{} ({count}): {}, ...",
            "Remaining words".bright_cyan(),
            words.join(", ")
        );
    } else {
        println!("\n{} {count}", "Remaining words:".bright_cyan());
    }
}

/// Print the observations applied so far
pub fn print_history(history: &[Observation]) {
    if history.is_empty() {
        println!("No guesses yet.");
        return;
    }

    println!("\n{}", "Guess history:".bright_cyan().bold());
    for (i, observation) in history.iter().enumerate() {
        println!(
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            observation
                .guess
                .text()
                .to_uppercase()
                .bright_white()
                .bold(),
            pattern_to_emoji(observation.pattern)
        );
    }
}

/// Print the transcript of a self-play game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
            }
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the statistics of a solutions frequency build
pub fn print_frequency_merge(merge: &FrequencyMerge, output: &Path) {
    let total = merge.table.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SOLUTION FREQUENCIES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Total solutions:     {total}");
    if total > 0 {
        let pct = merge.found as f64 / total as f64 * 100.0;
        println!("   Found in corpus:     {} ({pct:.1}%)", merge.found);
    }
    println!("   Not found:           {}", merge.missing.len());

    let ranked = merge.table.ranked();
    if let (Some((most, most_weight)), Some((least, least_weight))) =
        (ranked.first(), ranked.last())
    {
        println!(
            "\n   Most common:  {} (freq: {most_weight})",
            most.text().to_uppercase().green()
        );
        println!(
            "   Least common: {} (freq: {least_weight})",
            least.text().to_uppercase().yellow()
        );
    }

    if !merge.missing.is_empty() {
        let sample: Vec<&str> = merge.missing.iter().take(10).map(Word::text).collect();
        println!("\n   Sample words not in the corpus:");
        println!("     {}", sample.join(", ").bright_black());
    }

    println!("\n{} Output saved to: {}", "✓".green(), output.display());
}
