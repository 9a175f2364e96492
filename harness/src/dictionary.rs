//! Dictionary file loading.
//!
//! A dictionary file is whitespace-separated tokens. Tokens whose length is
//! not below the maximum word length are skipped, duplicates collapse.

use std::fmt;
use std::path::Path;

use ladder_kernel::dictionary::{WordDictionary, WordInsert};
use tracing::{debug, info, warn};

/// Error loading a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The file could not be read (or is not UTF-8).
    Io { path: String, detail: String },
    /// The file contained no admissible word.
    Empty { path: String },
    /// No word length can satisfy `0 < len < max_word_len`.
    InvalidMaxLength { max_word_len: usize },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read {path}: {detail}"),
            Self::Empty { path } => write!(f, "{path} contains no usable words"),
            Self::InvalidMaxLength { max_word_len } => {
                write!(f, "max word length {max_word_len} admits no words")
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Token counts from one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub tokens: usize,
    pub added: usize,
    pub duplicates: usize,
    pub too_long: usize,
}

/// A dictionary and how it was built.
#[derive(Debug, Clone)]
pub struct LoadedDictionary {
    pub dictionary: WordDictionary,
    pub stats: LoadStats,
}

/// Reject a maximum length that leaves no admissible word length.
///
/// # Errors
///
/// Returns [`DictionaryError::InvalidMaxLength`] if `max_word_len < 2`.
pub fn check_max_word_len(max_word_len: usize) -> Result<(), DictionaryError> {
    if max_word_len < 2 {
        return Err(DictionaryError::InvalidMaxLength { max_word_len });
    }
    Ok(())
}

/// Parse whitespace-separated text into a dictionary.
///
/// # Errors
///
/// Returns [`DictionaryError::InvalidMaxLength`] if `max_word_len < 2`.
pub fn parse_dictionary(
    text: &str,
    max_word_len: usize,
) -> Result<LoadedDictionary, DictionaryError> {
    check_max_word_len(max_word_len)?;
    let mut dictionary = WordDictionary::new(max_word_len);
    let mut stats = LoadStats::default();
    for token in text.split_whitespace() {
        stats.tokens += 1;
        match dictionary.insert(token) {
            WordInsert::Added => stats.added += 1,
            WordInsert::Duplicate => stats.duplicates += 1,
            WordInsert::TooLong => stats.too_long += 1,
            // split_whitespace never yields empty tokens
            WordInsert::Empty => {}
        }
    }
    Ok(LoadedDictionary { dictionary, stats })
}

/// Read and parse a dictionary file.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read,
/// [`DictionaryError::Empty`] if no word survives filtering, and
/// [`DictionaryError::InvalidMaxLength`] as in [`parse_dictionary`].
pub fn load_dictionary(
    path: &Path,
    max_word_len: usize,
) -> Result<LoadedDictionary, DictionaryError> {
    let shown = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| DictionaryError::Io {
        path: shown.clone(),
        detail: e.to_string(),
    })?;
    let loaded = parse_dictionary(&text, max_word_len)?;
    if loaded.dictionary.is_empty() {
        return Err(DictionaryError::Empty { path: shown });
    }

    let stats = loaded.stats;
    info!(
        path = %shown,
        words = loaded.dictionary.len(),
        lengths = loaded.dictionary.lengths().count(),
        "dictionary loaded"
    );
    if stats.too_long > 0 {
        warn!(
            skipped = stats.too_long,
            max_word_len, "skipped words at or above the maximum length"
        );
    }
    debug!(
        tokens = stats.tokens,
        duplicates = stats.duplicates,
        "dictionary token counts"
    );
    Ok(loaded)
}
