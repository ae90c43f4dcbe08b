//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_frequency_merge, print_history, print_possible_answers, print_recommendations,
    print_remaining, print_solve_result,
};
