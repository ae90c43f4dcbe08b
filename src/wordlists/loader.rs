//! Word list and frequency file loading
//!
//! Parses raw text into plain values for [`Session`](crate::solver::Session).
//! Nothing in the solver touches the filesystem.

use super::FALLBACK_WORDS;
use crate::core::{BASELINE_WEIGHT, FrequencyTable, Word};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default vocabulary file name
pub const DEFAULT_WORD_FILE: &str = "words.txt";

/// Error type for word-list and frequency-file loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a vocabulary came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    File(PathBuf),
    Fallback,
}

/// A loaded vocabulary
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub words: Vec<Word>,
    pub source: VocabularySource,
}

/// Parse one token per line into sorted, unique words
///
/// Lines are trimmed and lower-cased; anything that is not a 5-letter
/// alphabetic token is skipped.
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::words_from_str;
///
/// let words = words_from_str("Slate\ncrane\n\nabc\ncrane\nsh0rt\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    let mut words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Convert embedded string slice to Word vector
///
/// Invalid entries are skipped.
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Candidate locations for a word-list file, in search order
///
/// The path as given (relative to the working directory), then the same
/// path next to the running executable.
#[must_use]
pub fn search_paths(file: &Path) -> Vec<PathBuf> {
    let mut paths = vec![file.to_path_buf()];
    if file.is_relative()
        && let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(dir.join(file));
    }
    paths
}

/// Load the vocabulary, falling back to [`FALLBACK_WORDS`]
///
/// Searches [`search_paths`] for `file` (default [`DEFAULT_WORD_FILE`]). A
/// candidate that cannot be read or holds no valid word is skipped with a
/// warning; the fallback is used when every candidate is skipped.
#[must_use]
pub fn load_vocabulary(file: Option<&Path>) -> Vocabulary {
    let file = file.unwrap_or_else(|| Path::new(DEFAULT_WORD_FILE));

    for path in search_paths(file) {
        if !path.is_file() {
            continue;
        }
        let content = match read(&path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };
        let words = words_from_str(&content);
        if words.is_empty() {
            log::warn!("{} contains no valid 5-letter words", path.display());
            continue;
        }
        log::info!("loaded {} words from {}", words.len(), path.display());
        return Vocabulary {
            words,
            source: VocabularySource::File(path),
        };
    }

    log::warn!(
        "word file '{}' not usable, using {} fallback words",
        file.display(),
        FALLBACK_WORDS.len()
    );
    let mut words = words_from_slice(FALLBACK_WORDS);
    words.sort_unstable();
    words.dedup();
    Vocabulary {
        words,
        source: VocabularySource::Fallback,
    }
}

/// Load a word list file with no search path or fallback
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the file does not exist and
/// `LoadError::Io` if it cannot be read.
pub fn load_from_file(path: &Path) -> Result<Vec<Word>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let words = words_from_str(&read(path)?);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse `word,frequency` CSV text
///
/// A header line and malformed rows (bad word, bad or missing count) are
/// skipped.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::wordlists::loader::parse_frequencies;
///
/// let table = parse_frequencies("word,frequency\nabout,1226734006\nxylyl,oops\n");
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.weight(&Word::new("about").unwrap()), 1_226_734_006);
/// ```
#[must_use]
pub fn parse_frequencies(content: &str) -> FrequencyTable {
    let mut skipped = 0usize;
    let pairs: Vec<(Word, u64)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parsed = line.split_once(',').and_then(|(word, count)| {
                let word = Word::new(word).ok()?;
                let count = count.trim().parse::<u64>().ok()?;
                Some((word, count))
            });
            if parsed.is_none() {
                skipped += 1;
            }
            parsed
        })
        .collect();

    if skipped > 0 {
        log::debug!("skipped {skipped} frequency rows");
    }
    FrequencyTable::from_pairs(pairs)
}

/// Load a `word,frequency` CSV file
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the file does not exist and
/// `LoadError::Io` if it cannot be read.
pub fn load_frequencies(path: &Path) -> Result<FrequencyTable, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let table = parse_frequencies(&read(path)?);
    log::info!(
        "loaded {} word frequencies from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse a tab-separated `word<TAB>count` corpus
///
/// Words are lower-cased. Rows without a count, with a count that is not a
/// non-negative integer, or with a word that is not 5 letters are skipped.
/// Later rows overwrite earlier ones.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::wordlists::loader::parse_corpus;
///
/// let corpus = parse_corpus("the\t23135851162\nAbout\t1226734006\nabout\n");
/// assert_eq!(corpus.len(), 1);
/// assert_eq!(corpus[&Word::new("about").unwrap()], 1_226_734_006);
/// ```
#[must_use]
pub fn parse_corpus(content: &str) -> FxHashMap<Word, u64> {
    content
        .lines()
        .filter_map(|line| {
            let mut fields = line.trim().split('\t');
            let word = Word::new(fields.next()?).ok()?;
            let count = fields.next()?.trim().parse::<u64>().ok()?;
            Some((word, count))
        })
        .collect()
}

/// Load a `word<TAB>count` corpus file
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the file does not exist and
/// `LoadError::Io` if it cannot be read.
pub fn load_corpus(path: &Path) -> Result<FxHashMap<Word, u64>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let corpus = parse_corpus(&read(path)?);
    log::info!(
        "loaded {} corpus counts from {}",
        corpus.len(),
        path.display()
    );
    Ok(corpus)
}

/// A solution list matched against a corpus
#[derive(Debug, Clone)]
pub struct FrequencyMerge {
    /// Every solution, weighted by its corpus count or the baseline
    pub table: FrequencyTable,
    /// Solutions found in the corpus
    pub found: usize,
    /// Solutions missing from the corpus, in list order
    pub missing: Vec<Word>,
}

/// Weight each solution by its corpus count
///
/// Solutions missing from the corpus get [`BASELINE_WEIGHT`].
#[must_use]
pub fn merge_frequencies(solutions: &[Word], corpus: &FxHashMap<Word, u64>) -> FrequencyMerge {
    let mut missing = Vec::new();
    let pairs: Vec<(Word, u64)> = solutions
        .iter()
        .map(|word| {
            let weight = corpus.get(word).copied().unwrap_or_else(|| {
                missing.push(word.clone());
                BASELINE_WEIGHT
            });
            (word.clone(), weight)
        })
        .collect();

    FrequencyMerge {
        found: pairs.len() - missing.len(),
        table: FrequencyTable::from_pairs(pairs),
        missing,
    }
}

/// Render a table as `word,frequency` CSV, most common first
///
/// The output reads back with [`parse_frequencies`].
#[must_use]
pub fn frequencies_to_csv(table: &FrequencyTable) -> String {
    let mut csv = String::from("word,frequency\n");
    for (word, weight) in table.ranked() {
        csv.push_str(word.text());
        csv.push(',');
        csv.push_str(&weight.to_string());
        csv.push('\n');
    }
    csv
}

/// Write a table as `word,frequency` CSV
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be written.
pub fn save_frequencies(path: &Path, table: &FrequencyTable) -> Result<(), LoadError> {
    fs::write(path, frequencies_to_csv(table)).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "saved {} word frequencies to {}",
        table.len(),
        path.display()
    );
    Ok(())
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_str_normalizes() {
        let words = words_from_str("  CRANE \nslate\r\nslate\n");
        assert_eq!(words, words_from_slice(&["crane", "slate"]));
    }

    #[test]
    fn words_from_str_skips_invalid() {
        let words = words_from_str("crane\ntoolong\nabc\nsl@te\n\nirate\n");
        assert_eq!(words, words_from_slice(&["crane", "irate"]));
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn fallback_words_are_valid() {
        assert_eq!(words_from_slice(FALLBACK_WORDS).len(), FALLBACK_WORDS.len());
    }

    fn temp_path(name: &str) -> PathBuf {
        let file = format!("wordle_advisor_{}_{name}", std::process::id());
        std::env::temp_dir().join(file)
    }

    #[test]
    fn missing_word_file_uses_fallback() {
        let vocabulary = load_vocabulary(Some(Path::new("definitely/not/here/words.txt")));
        assert_eq!(vocabulary.source, VocabularySource::Fallback);
        assert!(!vocabulary.words.is_empty());
        assert!(vocabulary.words.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn word_file_is_loaded() {
        let path = temp_path("words.txt");
        fs::write(&path, "Crane\nslate\nnope\n").unwrap();

        let vocabulary = load_vocabulary(Some(&path));
        fs::remove_file(&path).unwrap();

        assert_eq!(vocabulary.source, VocabularySource::File(path));
        assert_eq!(vocabulary.words, words_from_slice(&["crane", "slate"]));
    }

    #[test]
    fn unreadable_word_file_uses_fallback() {
        let path = temp_path("unreadable.txt");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let vocabulary = load_vocabulary(Some(&path));
        fs::remove_file(&path).unwrap();

        assert_eq!(vocabulary.source, VocabularySource::Fallback);
        assert_eq!(vocabulary.words.len(), FALLBACK_WORDS.len());
    }

    #[test]
    fn load_from_file_requires_existing_file() {
        let result = load_from_file(Path::new("definitely/not/here/words.txt"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn search_paths_start_with_given_path() {
        let paths = search_paths(Path::new("words.txt"));
        assert_eq!(paths[0], PathBuf::from("words.txt"));
        assert!(paths.len() <= 2);
    }

    #[test]
    fn parse_frequencies_with_and_without_header() {
        let with_header = parse_frequencies("word,frequency\ncrane,20\nslate, 7\n");
        let without = parse_frequencies("crane,20\nslate,7");
        for table in [with_header, without] {
            assert_eq!(table.len(), 2);
            assert_eq!(table.weight(&Word::new("slate").unwrap()), 7);
        }
    }

    #[test]
    fn parse_frequencies_skips_bad_rows() {
        let table = parse_frequencies("crane,20\ntoolong,5\nslate\nirate,-3\n\n");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_frequency_file_is_an_error() {
        let result = load_frequencies(Path::new("definitely/not/here.csv"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn parse_corpus_skips_bad_rows() {
        let corpus = parse_corpus("CRANE\t20\nslate\tmany\nthe\t99\nirate 4\ngrate\t7\textra\n");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[&Word::new("crane").unwrap()], 20);
        assert_eq!(corpus[&Word::new("grate").unwrap()], 7);
    }

    #[test]
    fn merge_weights_missing_solutions_at_baseline() {
        let solutions = words_from_slice(&["crane", "pudgy", "slate"]);
        let corpus = parse_corpus("crane\t20\nslate\t7\nirate\t3\n");

        let merge = merge_frequencies(&solutions, &corpus);

        assert_eq!(merge.found, 2);
        assert_eq!(merge.missing, words_from_slice(&["pudgy"]));
        assert_eq!(merge.table.len(), 3);
        assert_eq!(
            merge.table.weight(&Word::new("pudgy").unwrap()),
            BASELINE_WEIGHT
        );
        assert!(!merge.table.contains(&Word::new("irate").unwrap()));
    }

    #[test]
    fn merged_csv_reads_back() {
        let solutions = words_from_slice(&["crane", "pudgy", "slate"]);
        let corpus = parse_corpus("slate\t7\ncrane\t20\n");
        let merge = merge_frequencies(&solutions, &corpus);

        let csv = frequencies_to_csv(&merge.table);
        assert_eq!(csv, "word,frequency\ncrane,20\nslate,7\npudgy,1\n");

        let table = parse_frequencies(&csv);
        assert_eq!(table.ranked(), merge.table.ranked());
    }

    #[test]
    fn saved_frequencies_load_back() {
        let path = temp_path("solutions.csv");
        let table = FrequencyTable::from_pairs([(Word::new("crane").unwrap(), 20)]);

        save_frequencies(&path, &table).unwrap();
        let loaded = load_frequencies(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.ranked(), table.ranked());
    }
}
