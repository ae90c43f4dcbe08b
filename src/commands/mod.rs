//! Command implementations

pub mod advice;
pub mod batch;
pub mod frequencies;
pub mod play;
pub mod solve;

pub use advice::{AdviceConfig, show_advice};
pub use batch::{ObservationError, parse_observation, run_batch};
pub use frequencies::{DEFAULT_FREQUENCY_FILE, build_frequency_file};
pub use play::{Command, play_with_input, run_play};
pub use solve::{SolveConfig, SolveError, SolveResult, SolveStep, pick_secret, solve_word};
