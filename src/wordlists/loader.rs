//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Files are either newline-separated text or, when the name ends in `.json`,
//! a JSON array of strings.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, error, info};

/// Error loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path} as a JSON array of words: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} contains no valid 5-letter words")]
    Empty(PathBuf),
}

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Compiled into the binary
    Embedded,
    /// Loaded from a file at startup
    File(PathBuf),
}

impl FromStr for WordSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" | "builtin" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read, is not a valid JSON
/// array (for `.json` files), or yields no valid words.
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/target_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        let entries: Vec<String> =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        words_from_iter(entries.iter().map(String::as_str))
    } else {
        words_from_iter(content.lines())
    };

    if words.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::loader::words_from_slice;
/// use daily_wordle::wordlists::TARGET_WORDS;
///
/// let words = words_from_slice(TARGET_WORDS);
/// assert_eq!(words.len(), TARGET_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_iter(slice.iter().copied())
}

fn words_from_iter<'s>(lines: impl Iterator<Item = &'s str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Load a word list from its source
///
/// # Errors
///
/// Propagates `LoadError` from [`load_from_file`] for file sources.
pub fn load_words(source: &WordSource, embedded: &[&str]) -> Result<Vec<Word>, LoadError> {
    match source {
        WordSource::Embedded => Ok(words_from_slice(embedded)),
        WordSource::File(path) => load_from_file(path),
    }
}

/// Load a word list, logging and degrading to an empty list on failure
///
/// An empty dictionary rejects every guess and an empty target list leaves
/// the game without a target, so play continues but no guess is accepted.
#[must_use]
pub fn load_or_empty(source: &WordSource, embedded: &[&str], name: &str) -> Vec<Word> {
    match load_words(source, embedded) {
        Ok(words) => {
            info!(list = name, count = words.len(), "word list ready");
            words
        }
        Err(err) => {
            error!(list = name, error = %err, "word list unavailable, continuing without it");
            Vec::new()
        }
    }
}
