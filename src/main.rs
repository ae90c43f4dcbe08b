//! Wordle Advisor - CLI
//!
//! Interactive, batch and self-play front ends for the Wordle decision engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use wordle_advisor::{
    commands::{
        AdviceConfig, DEFAULT_FREQUENCY_FILE, SolveConfig, build_frequency_file, pick_secret,
        run_batch, run_play, solve_word,
    },
    core::Word,
    output::{print_frequency_merge, print_solve_result},
    solver::{DEFAULT_TOP_N, ScoringPolicy, Session, SessionConfig, SessionMode},
    wordlists::{VocabularySource, load_frequencies, load_vocabulary},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle advisor: ranks guesses by entropy or expected remaining words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vocabulary file, one word per line (default: words.txt, else built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Solutions CSV (word,frequency); enables curated mode
    #[arg(short = 's', long, global = true)]
    solutions: Option<PathBuf>,

    /// Hard mode: only suggest words that can still be the answer
    #[arg(long, global = true)]
    hard: bool,

    /// Scoring: entropy or expected (default: expected with --solutions, else entropy)
    #[arg(long, global = true)]
    scoring: Option<ScoringPolicy>,

    /// Number of recommendations to show
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor (default)
    Play,

    /// Apply observations given as WORD:PATTERN and show the next best guesses
    Batch {
        /// Observations such as crane:xyxxg
        #[arg(required = true)]
        observations: Vec<String>,
    },

    /// Let the advisor play against a secret word
    Solve {
        /// The secret (random possible answer if omitted)
        word: Option<String>,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        details: bool,

        /// Score the first turn instead of using a fixed opener
        #[arg(long)]
        no_opener: bool,
    },

    /// Build the solutions CSV from a solution list and a word<TAB>count corpus
    Frequencies {
        /// Solution list, one word per line
        #[arg(value_name = "SOLUTIONS")]
        answers: PathBuf,

        /// Corpus of word<TAB>count lines
        corpus: PathBuf,

        /// Output CSV
        #[arg(default_value = DEFAULT_FREQUENCY_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    match cli.command.take().unwrap_or(Commands::Play) {
        Commands::Play => {
            let (mut session, advice) = build_advisor(&cli)?;
            run_play(&mut session, advice)
        }
        Commands::Batch { observations } => {
            let (mut session, advice) = build_advisor(&cli)?;
            run_batch(&mut session, &observations, advice)?;
            Ok(())
        }
        Commands::Solve {
            word,
            details,
            no_opener,
        } => {
            let (mut session, advice) = build_advisor(&cli)?;
            run_solve_command(&mut session, word.as_deref(), details, no_opener, advice)
        }
        Commands::Frequencies {
            answers,
            corpus,
            output,
        } => {
            let merge = build_frequency_file(&answers, &corpus, &output)
                .context("failed to build the solutions frequency file")?;
            print_frequency_merge(&merge, &output);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Load the word lists and build the session and advice settings the flags describe
fn build_advisor(cli: &Cli) -> Result<(Session, AdviceConfig)> {
    let vocabulary = load_vocabulary(cli.wordlist.as_deref());
    match &vocabulary.source {
        VocabularySource::File(path) => println!(
            "{} Loaded {} words from {}",
            "✓".green(),
            vocabulary.words.len(),
            path.display()
        ),
        VocabularySource::Fallback => println!(
            "{} Word list not usable, using {} built-in words",
            "⚠".yellow(),
            vocabulary.words.len()
        ),
    }

    let frequencies = cli
        .solutions
        .as_deref()
        .map(|path| {
            load_frequencies(path)
                .with_context(|| format!("failed to load solutions from {}", path.display()))
        })
        .transpose()?;

    let mode = if frequencies.is_some() {
        SessionMode::Curated
    } else if cli.hard {
        SessionMode::Restricted
    } else {
        SessionMode::Standard
    };
    let config = SessionConfig {
        hard_mode: cli.hard,
        ..SessionConfig::from(mode)
    };

    let default_policy = if cli.solutions.is_some() {
        ScoringPolicy::ExpectedRemaining
    } else {
        ScoringPolicy::Entropy
    };
    let advice = AdviceConfig {
        policy: cli.scoring.unwrap_or(default_policy),
        top_n: cli.top,
    };

    let session = Session::with_config(vocabulary.words, config, frequencies);
    Ok((session, advice))
}

fn run_solve_command(
    session: &mut Session,
    word: Option<&str>,
    details: bool,
    no_opener: bool,
    advice: AdviceConfig,
) -> Result<()> {
    let secret = match word {
        Some(text) => Word::new(text).with_context(|| format!("invalid secret '{text}'"))?,
        None => pick_secret(session, &mut rand::rng())?,
    };
    let config = SolveConfig {
        use_opener: !no_opener,
        advice,
        ..SolveConfig::default()
    };

    let result = solve_word(session, &secret, config)?;
    print_solve_result(&result, details);
    Ok(())
}
