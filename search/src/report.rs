//! Search outcome and audit report types.
//!
//! Every search returns a [`SearchReport`], whichever way it ends.
//! [`SearchReport::to_json_value`] gives a stable JSON view (keys written in
//! sorted order) for digests and the `--json` CLI output.

use std::fmt;

use crate::policy::SearchMode;

/// Why a start/target pair was refused before any search structure was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRejection {
    /// The words have different character lengths.
    LengthMismatch { start_len: usize, target_len: usize },
    /// The words are not shorter than the dictionary's maximum word length.
    TooLong { len: usize, max: usize },
    /// The start word is not in the dictionary.
    UnknownStart,
    /// The target word is not in the dictionary.
    UnknownTarget,
}

impl InputRejection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::TooLong { .. } => "too_long",
            Self::UnknownStart => "unknown_start",
            Self::UnknownTarget => "unknown_target",
        }
    }
}

impl fmt::Display for InputRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                start_len,
                target_len,
            } => write!(
                f,
                "start has {start_len} characters but target has {target_len}"
            ),
            Self::TooLong { len, max } => {
                write!(f, "words of {len} characters exceed the limit (< {max})")
            }
            Self::UnknownStart => f.write_str("start word is not in the dictionary"),
            Self::UnknownTarget => f.write_str("target word is not in the dictionary"),
        }
    }
}

/// Why no ladder was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// Input refused up front; no pool or frontier was built.
    InvalidInput(InputRejection),
    /// The frontier emptied without discovering the target.
    Exhausted,
    /// `SearchPolicy::max_expansions` pops happened without success.
    ExpansionBudgetExceeded,
}

impl NotFoundReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Exhausted => "exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(rejection) => write!(f, "invalid input: {rejection}"),
            Self::Exhausted => f.write_str("search space exhausted"),
            Self::ExpansionBudgetExceeded => f.write_str("expansion budget exceeded"),
        }
    }
}

/// Terminal outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderOutcome {
    /// A ladder from start to target.
    Found {
        path: Vec<String>,
        moves: u32,
        /// States pushed onto the frontier after seeding.
        states_enqueued: u64,
    },
    NotFound { reason: NotFoundReason },
}

impl LadderOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The ladder, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&[String]> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound { .. } => None,
        }
    }

    /// The failure reason, if no ladder was found.
    #[must_use]
    pub fn not_found_reason(&self) -> Option<NotFoundReason> {
        match self {
            Self::Found { .. } => None,
            Self::NotFound { reason } => Some(*reason),
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier pops.
    pub expansions: u64,
    /// States pushed onto the frontier after seeding.
    pub states_enqueued: u64,
    /// Largest frontier size reached.
    pub frontier_high_water: u64,
    /// Candidate pool size after removing the start word.
    pub pool_size: u64,
    /// Pool words never discovered when the search ended.
    pub pool_remaining: u64,
}

/// One frontier pop, recorded when `SearchPolicy::record_expansions` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// 0-based pop index.
    pub order: u64,
    /// Last word of the expanded state.
    pub word: String,
    pub moves: u32,
    pub priority: u32,
    /// Pool words discovered by this expansion, in pool order. Includes the
    /// target when the expansion succeeded.
    pub discovered: Vec<String>,
}

/// Full result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub mode: SearchMode,
    pub start: String,
    pub target: String,
    pub outcome: LadderOutcome,
    pub stats: SearchStats,
    /// Empty unless expansion recording was requested.
    pub expansions: Vec<ExpandEvent>,
}

impl SearchReport {
    /// JSON view of the report. Contains integers and strings only, so it
    /// can be hashed with `ladder_kernel::digest::json_digest`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "mode": self.mode.as_str(),
            "outcome": outcome_to_json(&self.outcome),
            "start": self.start,
            "stats": stats_to_json(&self.stats),
            "target": self.target,
        })
    }
}

fn outcome_to_json(outcome: &LadderOutcome) -> serde_json::Value {
    match outcome {
        LadderOutcome::Found {
            path,
            moves,
            states_enqueued,
        } => serde_json::json!({
            "moves": moves,
            "path": path,
            "states_enqueued": states_enqueued,
            "type": "found",
        }),
        LadderOutcome::NotFound { reason } => serde_json::json!({
            "reason": not_found_reason_to_json(*reason),
            "type": "not_found",
        }),
    }
}

fn not_found_reason_to_json(reason: NotFoundReason) -> serde_json::Value {
    match reason {
        NotFoundReason::InvalidInput(rejection) => {
            let mut obj = serde_json::json!({
                "rejection": rejection.as_str(),
                "type": reason.as_str(),
            });
            match rejection {
                InputRejection::LengthMismatch {
                    start_len,
                    target_len,
                } => {
                    obj["start_len"] = serde_json::json!(start_len);
                    obj["target_len"] = serde_json::json!(target_len);
                }
                InputRejection::TooLong { len, max } => {
                    obj["len"] = serde_json::json!(len);
                    obj["max"] = serde_json::json!(max);
                }
                InputRejection::UnknownStart | InputRejection::UnknownTarget => {}
            }
            obj
        }
        NotFoundReason::Exhausted | NotFoundReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": reason.as_str()})
        }
    }
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "pool_remaining": s.pool_remaining,
        "pool_size": s.pool_size,
        "states_enqueued": s.states_enqueued,
    })
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "discovered": e.discovered,
        "moves": e.moves,
        "order": e.order,
        "priority": e.priority,
        "word": e.word,
    })
}
