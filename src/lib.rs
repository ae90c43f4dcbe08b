//! Wordle Advisor
//!
//! A Wordle decision engine: it narrows the set of possible answers from
//! observed feedback and ranks next guesses by Shannon entropy or by the
//! expected number of remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Pattern, Word};
//! use wordle_advisor::solver::{ScoringPolicy, Session, SessionMode};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//! assert_eq!(Pattern::calculate(&guess, &answer).to_code(), "xxgxg");
//!
//! let vocabulary = ["crane", "slate", "irate", "crate", "grate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap());
//! let mut session = Session::new(vocabulary, SessionMode::Standard, None);
//! session.apply_observation("slate", "xxggg").unwrap();
//!
//! let best = session.recommend(3, ScoringPolicy::Entropy);
//! println!("next guess: {}", best[0].word);
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
