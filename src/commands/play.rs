//! Interactive advisor mode
//!
//! The player types each guess and the feedback the game showed; the
//! advisor narrows the candidates and suggests what to try next.

use super::advice::{AdviceConfig, show_advice};
use crate::core::{Pattern, Word};
use crate::output::formatters::pattern_to_emoji;
use crate::output::print_history;
use crate::solver::Session;
use crate::wordlists::OPENING_WORDS;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A slash command typed at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hint,
    History,
    Reset,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse a line starting with `/`; anything else is not a command
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let name = input.strip_prefix('/')?;
        Some(match name.to_lowercase().as_str() {
            "hint" | "h" => Self::Hint,
            "history" | "hi" => Self::History,
            "reset" | "r" => Self::Reset,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(input.to_string()),
        })
    }
}

/// Run the interactive loop on stdin
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_play(session: &mut Session, config: AdviceConfig) -> Result<()> {
    let stdin = io::stdin();
    play_with_input(session, config, &mut stdin.lock())
}

/// Run the interactive loop on any line source
///
/// Ends on `/quit`, on end of input, or when the player declines a new game.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn play_with_input<R: BufRead>(
    session: &mut Session,
    config: AdviceConfig,
    input: &mut R,
) -> Result<()> {
    print_welcome(session);

    loop {
        let label = format!("Guess #{}", session.history().len() + 1);
        let Some(line) = prompt(input, &label)? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        if let Some(command) = Command::parse(&line) {
            match command {
                Command::Hint => show_advice(session, config),
                Command::History => print_history(session.history()),
                Command::Reset => {
                    session.reset();
                    println!(
                        "\n🔄 Game reset. {} possible answers.\n",
                        session.remaining_count()
                    );
                }
                Command::Quit => break,
                Command::Unknown(cmd) => {
                    println!("Unknown command '{cmd}'. Try /hint, /history, /reset or /quit.");
                }
            }
            continue;
        }

        let guess = match Word::new(&line) {
            Ok(word) => word,
            Err(e) => {
                println!("❌ {e}");
                continue;
            }
        };
        if !session.is_known_word(&guess) {
            println!(
                "{}",
                format!("'{guess}' is not in the word list, using it anyway.").yellow()
            );
        }

        let Some(pattern) = read_pattern(input)? else {
            break;
        };

        session.apply(guess.clone(), pattern);
        println!(
            "  {} {}",
            guess.text().to_uppercase().bold(),
            pattern_to_emoji(pattern)
        );

        if pattern.is_perfect() {
            print_win(session);
            let again = prompt(input, "Play again? (yes/no)")?;
            if matches!(again.as_deref(), Some("yes" | "y")) {
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            break;
        }

        report_progress(session, config);
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_welcome(session: &Session) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Advisor - Interactive                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "{} possible answers, {} allowed guesses.",
        session.remaining_count(),
        session.guess_pool_len()
    );
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - g for green (right letter, right spot)");
    println!("  - y for yellow (right letter, wrong spot)");
    println!("  - x for gray (letter not in the word)\n");
    println!("Commands: /hint, /history, /reset, /quit\n");

    let openers: Vec<String> = OPENING_WORDS
        .iter()
        .filter_map(|w| Word::new(w).ok())
        .filter(|w| session.is_known_word(w))
        .map(|w| w.text().to_uppercase())
        .collect();
    if !openers.is_empty() {
        println!("Good openers: {}\n", openers.join(", ").bright_yellow());
    }
}

/// Prompt until a valid pattern is entered; `None` on end of input
fn read_pattern<R: BufRead>(input: &mut R) -> Result<Option<Pattern>> {
    loop {
        let Some(line) = prompt(input, "Pattern (g/y/x)")? else {
            return Ok(None);
        };
        match Pattern::from_code(&line) {
            Ok(pattern) => return Ok(Some(pattern)),
            Err(e) => println!("❌ {e}"),
        }
    }
}

fn report_progress(session: &Session, config: AdviceConfig) {
    match session.remaining_candidates(2).as_slice() {
        [] => {
            println!(
                "\n{}",
                "❌ No words match these observations. Check your input or /reset."
                    .red()
                    .bold()
            );
        }
        [answer] => {
            println!(
                "\n🎯 The answer must be: {}",
                answer.text().to_uppercase().bright_green().bold()
            );
        }
        _ => show_advice(session, config),
    }
}

fn print_win(session: &Session) {
    let turns = session.history().len();
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "       🎉  W O R D L E   S O L V E D !  🎉"
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );
    print_history(session.history());
    println!();
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionMode;
    use std::io::Cursor;

    fn session(list: &[&str]) -> Session {
        let words = list.iter().map(|w| Word::new(w).unwrap());
        Session::new(words, SessionMode::Standard, None)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("/hint"), Some(Command::Hint));
        assert_eq!(Command::parse("/h"), Some(Command::Hint));
        assert_eq!(Command::parse("/history"), Some(Command::History));
        assert_eq!(Command::parse("/hi"), Some(Command::History));
        assert_eq!(Command::parse(" /R "), Some(Command::Reset));
        assert_eq!(Command::parse("/q"), Some(Command::Quit));
        assert_eq!(
            Command::parse("/foo"),
            Some(Command::Unknown("/foo".to_string()))
        );
        assert_eq!(Command::parse("crane"), None);
    }

    #[test]
    fn play_applies_observations_until_quit() {
        let mut session = session(&["crane", "slate", "irate", "crate", "grate", "pudgy"]);
        let mut input = Cursor::new("crane\nbad\nxggxg\n/history\n/q\n");

        play_with_input(&mut session, AdviceConfig::default(), &mut input).unwrap();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.remaining_count(), 2);
    }

    #[test]
    fn play_rejects_invalid_guess() {
        let mut session = session(&["crane", "slate", "pudgy"]);
        let mut input = Cursor::new("cr4ne\n/quit\n");

        play_with_input(&mut session, AdviceConfig::default(), &mut input).unwrap();

        assert!(session.history().is_empty());
    }

    #[test]
    fn play_win_and_decline_ends_game() {
        let mut session = session(&["crane", "slate", "pudgy"]);
        let mut input = Cursor::new("slate\nggggg\nno\n");

        play_with_input(&mut session, AdviceConfig::default(), &mut input).unwrap();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.remaining_count(), 1);
    }

    #[test]
    fn play_win_and_accept_resets() {
        let mut session = session(&["crane", "slate", "pudgy"]);
        let mut input = Cursor::new("slate\nggggg\nyes\n");

        play_with_input(&mut session, AdviceConfig::default(), &mut input).unwrap();

        assert!(session.history().is_empty());
        assert_eq!(session.remaining_count(), 3);
    }

    #[test]
    fn play_reset_command_clears_history() {
        let mut session = session(&["crane", "slate", "pudgy"]);
        let mut input = Cursor::new("pudgy\nxxxxx\n/reset\n");

        play_with_input(&mut session, AdviceConfig::default(), &mut input).unwrap();

        assert!(session.history().is_empty());
    }
}
