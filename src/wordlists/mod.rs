//! Word lists for Wordle solving
//!
//! Loading of vocabulary, corpus and frequency files, plus the built-in
//! lists.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK_WORDS, OPENING_WORDS};
pub use loader::{
    FrequencyMerge, LoadError, Vocabulary, VocabularySource, load_corpus, load_frequencies,
    load_from_file, load_vocabulary, merge_frequencies, save_frequencies,
};
