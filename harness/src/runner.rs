//! Harness runner: plays start/target pairs through every configured mode.
//!
//! # Pipeline
//!
//! ```text
//! HarnessConfig::validate()
//!   → [search() × modes] → PlayReport
//!   → to_json_value() → json_digest(DOMAIN_PLAY_REPORT)
//! ```
//!
//! Random play is deterministic: the pair is chosen by digesting
//! `(len, seed)`, never by an ambient RNG.

use std::fmt;

use ladder_kernel::dictionary::WordDictionary;
use ladder_kernel::digest::{domain_digest, json_digest, Digest, DigestError};
use ladder_search::error::SearchError;
use ladder_search::report::SearchReport;
use ladder_search::search::search;
use tracing::{debug, info_span};

use crate::config::HarnessConfig;

/// Domain prefix for play report digests.
pub const DOMAIN_PLAY_REPORT: &[u8] = b"LADDER::PLAY_REPORT::V1\0";

/// Domain prefix for deterministic pair selection.
pub const DOMAIN_PAIR_PICK: &[u8] = b"LADDER::PAIR_PICK::V1\0";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Policy validation or a frontier invariant failed.
    Search(SearchError),
    /// The report could not be digested.
    Digest { detail: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Digest { detail } => write!(f, "report digest failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<DigestError> for RunError {
    fn from(e: DigestError) -> Self {
        Self::Digest {
            detail: e.to_string(),
        }
    }
}

/// Every mode's report for one start/target pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    pub start: String,
    pub target: String,
    /// One report per mode, in configured order.
    pub runs: Vec<SearchReport>,
}

impl PlayReport {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "runs": self.runs.iter().map(SearchReport::to_json_value).collect::<Vec<_>>(),
            "start": self.start,
            "target": self.target,
        })
    }

    /// Digest of [`PlayReport::to_json_value`] under [`DOMAIN_PLAY_REPORT`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Digest`] if the JSON cannot be serialized.
    pub fn digest(&self) -> Result<Digest, RunError> {
        Ok(json_digest(DOMAIN_PLAY_REPORT, &self.to_json_value())?)
    }
}

/// Search for a ladder from `start` to `target` in every configured mode.
///
/// Rejected input is not an error: every run reports
/// `NotFound { InvalidInput }`.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an invalid configuration or a broken
/// frontier.
pub fn play(
    dictionary: &WordDictionary,
    start: &str,
    target: &str,
    config: &HarnessConfig,
) -> Result<PlayReport, RunError> {
    config.validate()?;
    let span = info_span!("play", start, target);
    let _enter = span.enter();

    let mut runs = Vec::with_capacity(config.modes().len());
    for &mode in config.modes() {
        runs.push(search(dictionary, start, target, &config.policy_for(mode))?);
    }
    Ok(PlayReport {
        start: start.to_string(),
        target: target.to_string(),
        runs,
    })
}

/// Choose a start/target pair of `len` characters from `dictionary`.
///
/// The same `(dictionary, len, seed)` always yields the same pair. Start
/// and target may coincide. Returns `None` when no word has that length.
#[must_use]
pub fn pick_pair(dictionary: &WordDictionary, len: usize, seed: u64) -> Option<(String, String)> {
    let bucket = dictionary.words_of_length(len)?;
    let size = u64::try_from(bucket.len()).ok()?;

    let pick = |slot: u8| {
        let mut data = Vec::with_capacity(17);
        data.extend_from_slice(&(len as u64).to_le_bytes());
        data.extend_from_slice(&seed.to_le_bytes());
        data.push(slot);
        let index = domain_digest(DOMAIN_PAIR_PICK, &data).prefix_u64() % size;
        usize::try_from(index)
            .ok()
            .and_then(|i| bucket.iter().nth(i))
            .cloned()
    };
    let start = pick(0)?;
    let target = pick(1)?;
    debug!(len, seed, %start, %target, "picked pair");
    Some((start, target))
}

/// [`pick_pair`] then [`play`]. `Ok(None)` when no word has length `len`.
///
/// # Errors
///
/// See [`play`].
pub fn play_random(
    dictionary: &WordDictionary,
    len: usize,
    seed: u64,
    config: &HarnessConfig,
) -> Result<Option<PlayReport>, RunError> {
    match pick_pair(dictionary, len, seed) {
        Some((start, target)) => play(dictionary, &start, &target, config).map(Some),
        None => Ok(None),
    }
}
