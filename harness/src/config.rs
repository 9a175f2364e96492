//! Harness configuration.
//!
//! Every field is optional in spirit: `None` (or an empty mode list) falls
//! back to the defaults, which reproduce the classic two-pass run
//! (uninformed, then informed) over words shorter than
//! [`DEFAULT_MAX_WORD_LEN`].

use ladder_kernel::dictionary::DEFAULT_MAX_WORD_LEN;
use ladder_search::error::SearchError;
use ladder_search::policy::{SearchMode, SearchPolicy};

use crate::dictionary::{check_max_word_len, DictionaryError};

/// Configuration that can override harness defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Words must be strictly shorter than this. `None` uses
    /// `DEFAULT_MAX_WORD_LEN`.
    pub max_word_len: Option<usize>,
    /// Modes to run, in order. Empty runs every mode.
    pub modes: Vec<SearchMode>,
    /// Per-search expansion budget. `None` is unlimited.
    pub max_expansions: Option<u64>,
    /// Record expansion events in every report.
    pub record_expansions: bool,
}

impl HarnessConfig {
    /// Effective maximum word length.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.max_word_len.unwrap_or(DEFAULT_MAX_WORD_LEN)
    }

    /// Effective maximum word length, rejected if it admits no word.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::InvalidMaxLength`] for values below 2.
    pub fn checked_max_word_len(&self) -> Result<usize, DictionaryError> {
        let max_word_len = self.max_word_len();
        check_max_word_len(max_word_len)?;
        Ok(max_word_len)
    }

    /// Effective mode list.
    #[must_use]
    pub fn modes(&self) -> &[SearchMode] {
        if self.modes.is_empty() {
            &SearchMode::ALL
        } else {
            &self.modes
        }
    }

    /// The search policy for one mode.
    #[must_use]
    pub fn policy_for(&self, mode: SearchMode) -> SearchPolicy {
        SearchPolicy {
            mode,
            max_expansions: self.max_expansions,
            record_expansions: self.record_expansions,
        }
    }

    /// Validate every derived policy.
    ///
    /// # Errors
    ///
    /// Returns the first [`SearchError::InvalidPolicy`] produced.
    pub fn validate(&self) -> Result<(), SearchError> {
        for &mode in self.modes() {
            self.policy_for(mode).validate()?;
        }
        Ok(())
    }
}
