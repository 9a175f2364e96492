//! Length-partitioned word dictionary.
//!
//! Words are bucketed by character length into `BTreeSet`s, so iteration
//! over a bucket is lexicographic and identical on every run.
//!
//! Only words strictly shorter than the configured maximum length are
//! admitted; the same bound is applied to search input.

use std::collections::{BTreeMap, BTreeSet};

use crate::cost::word_len;

/// Maximum word length used when no override is configured. Words must be
/// strictly shorter than this.
pub const DEFAULT_MAX_WORD_LEN: usize = 15;

/// What happened to a word offered to [`WordDictionary::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordInsert {
    /// Newly stored.
    Added,
    /// Already present; nothing changed.
    Duplicate,
    /// Length is not below the maximum word length.
    TooLong,
    /// The empty string is never a word.
    Empty,
}

/// Deduplicated words grouped by length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDictionary {
    buckets: BTreeMap<usize, BTreeSet<String>>,
    max_word_len: usize,
    word_count: usize,
}

impl WordDictionary {
    /// Create an empty dictionary admitting words shorter than `max_word_len`.
    #[must_use]
    pub fn new(max_word_len: usize) -> Self {
        Self {
            buckets: BTreeMap::new(),
            max_word_len,
            word_count: 0,
        }
    }

    /// Build a dictionary from a word list. Rejected words are skipped.
    #[must_use]
    pub fn from_words<I, S>(words: I, max_word_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new(max_word_len);
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Build a dictionary from whitespace-separated text.
    #[must_use]
    pub fn from_text(text: &str, max_word_len: usize) -> Self {
        Self::from_words(text.split_whitespace(), max_word_len)
    }

    /// Offer a word to the dictionary.
    pub fn insert(&mut self, word: &str) -> WordInsert {
        let len = word_len(word);
        if len == 0 {
            return WordInsert::Empty;
        }
        if !self.admits_length(len) {
            return WordInsert::TooLong;
        }
        if self.buckets.entry(len).or_default().insert(word.to_string()) {
            self.word_count += 1;
            WordInsert::Added
        } else {
            WordInsert::Duplicate
        }
    }

    /// Whether words of `len` characters can be stored or searched.
    #[must_use]
    pub fn admits_length(&self, len: usize) -> bool {
        len > 0 && len < self.max_word_len
    }

    /// Words must be strictly shorter than this.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Total number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether no word has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.buckets
            .get(&word_len(word))
            .is_some_and(|bucket| bucket.contains(word))
    }

    /// All words of exactly `len` characters, in lexicographic order.
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> Option<&BTreeSet<String>> {
        self.buckets.get(&len).filter(|bucket| !bucket.is_empty())
    }

    /// Lengths that have at least one word, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(&len, _)| len)
    }
}

impl Default for WordDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORD_LEN)
    }
}
