//! Core domain types for Wordle
//!
//! Words, feedback patterns and commonality weights. Everything here is a
//! plain value type; the pattern calculation is a pure function.

mod frequency;
mod pattern;
mod word;

pub use frequency::{BASELINE_WEIGHT, FrequencyTable};
pub use pattern::{Feedback, PATTERN_COUNT, Pattern, PatternError};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};

pub(crate) use word::letter_index;
