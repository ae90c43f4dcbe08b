//! Solutions frequency file builder
//!
//! Matches a solution list against a `word<TAB>count` corpus and writes the
//! `word,frequency` CSV that curated mode reads.

use crate::wordlists::{
    FrequencyMerge, LoadError, load_corpus, load_from_file, merge_frequencies, save_frequencies,
};
use std::path::Path;

/// Default output file name
pub const DEFAULT_FREQUENCY_FILE: &str = "solutions_with_freq.csv";

/// Build and save the solutions frequency file
///
/// # Errors
///
/// Returns `LoadError` if an input cannot be found or read, or the output
/// cannot be written.
pub fn build_frequency_file(
    solutions: &Path,
    corpus: &Path,
    output: &Path,
) -> Result<FrequencyMerge, LoadError> {
    let solutions = load_from_file(solutions)?;
    let corpus = load_corpus(corpus)?;

    let merge = merge_frequencies(&solutions, &corpus);
    save_frequencies(output, &merge.table)?;
    Ok(merge)
}
