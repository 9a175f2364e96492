//! Search policy types.

use std::fmt;

use crate::error::SearchError;

/// Frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchMode {
    /// FIFO frontier; breadth-first, shortest ladders.
    Uninformed,
    /// Priority-tree frontier ordered by `moves + estimate`; greedy,
    /// non-reopening best-first.
    Informed,
}

impl SearchMode {
    /// Both modes, in the order the harness runs them.
    pub const ALL: [Self; 2] = [Self::Uninformed, Self::Informed];

    /// Stable lowercase identifier used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninformed => "uninformed",
            Self::Informed => "informed",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Frontier discipline.
    pub mode: SearchMode,
    /// Hard cap on frontier pops. `None` means run to goal or exhaustion.
    pub max_expansions: Option<u64>,
    /// Record an `ExpandEvent` for every pop.
    pub record_expansions: bool,
}

impl SearchPolicy {
    /// Default policy with the given mode.
    #[must_use]
    pub fn with_mode(mode: SearchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Reject configurations that cannot run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is
    /// `Some(0)` (the seed state could never be expanded).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            mode: SearchMode::Uninformed,
            max_expansions: None,
            record_expansions: false,
        }
    }
}
