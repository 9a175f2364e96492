//! Search entry point and expansion loop.
//!
//! Both modes share one loop. Only the frontier discipline and the
//! priority differ: uninformed search uses a [`FifoFrontier`] (breadth-first,
//! shortest ladders) with `priority = moves`, and informed search a
//! [`PriorityFrontier`] ordered by `moves + estimate`.
//!
//! Visited-state tracking is the candidate pool: a copy of the dictionary
//! bucket for the start word's length. The start word leaves the pool at
//! seeding and every other word leaves it the moment it is discovered, so
//! no word is enqueued twice and no state is ever reopened.

use std::collections::BTreeSet;

use ladder_kernel::cost::{is_adjacent, word_len};
use ladder_kernel::dictionary::WordDictionary;
use tracing::{debug, info, info_span, trace, warn};

use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier, PriorityFrontier};
use crate::node::LadderState;
use crate::policy::{SearchMode, SearchPolicy};
use crate::report::{
    ExpandEvent, InputRejection, LadderOutcome, NotFoundReason, SearchReport, SearchStats,
};
use crate::scorer::{HammingScorer, LadderScorer, ZeroScorer};

/// Result of one [`LadderSearch::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A state was expanded; the target has not been discovered yet.
    Continue,
    /// The target was discovered. Carries the completed ladder.
    Found(LadderState),
    /// The frontier is empty.
    Exhausted,
}

/// Check a start/target pair against the dictionary.
///
/// Checks run in a fixed order: over-long words, then unequal lengths, then
/// dictionary membership of the start and the target.
///
/// # Errors
///
/// Returns the first [`InputRejection`] that applies.
pub fn validate_input(
    dictionary: &WordDictionary,
    start: &str,
    target: &str,
) -> Result<(), InputRejection> {
    let max = dictionary.max_word_len();
    let start_len = word_len(start);
    let target_len = word_len(target);
    for len in [start_len, target_len] {
        if len >= max {
            return Err(InputRejection::TooLong { len, max });
        }
    }
    if start_len != target_len {
        return Err(InputRejection::LengthMismatch {
            start_len,
            target_len,
        });
    }
    if !dictionary.contains(start) {
        return Err(InputRejection::UnknownStart);
    }
    if !dictionary.contains(target) {
        return Err(InputRejection::UnknownTarget);
    }
    Ok(())
}

/// Whether `path` is a ladder from `start` to `target` over `dictionary`.
#[must_use]
pub fn verify_ladder(
    dictionary: &WordDictionary,
    start: &str,
    target: &str,
    path: &[String],
) -> bool {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return false;
    };
    first == start
        && last == target
        && path.iter().all(|w| dictionary.contains(w))
        && path.windows(2).all(|pair| is_adjacent(&pair[0], &pair[1]))
}

/// An in-progress search over one frontier discipline.
///
/// Drive it with [`LadderSearch::step`] until it returns
/// [`Step::Found`] or [`Step::Exhausted`].
pub struct LadderSearch<'a, F: Frontier> {
    target: &'a str,
    scorer: &'a dyn LadderScorer,
    pool: BTreeSet<String>,
    pool_size: u64,
    frontier: F,
    next_creation_order: u64,
    expansions: u64,
    states_enqueued: u64,
    record_expansions: bool,
    events: Vec<ExpandEvent>,
}

impl<'a, F: Frontier> LadderSearch<'a, F> {
    /// Validate the pair, build the candidate pool and seed `frontier` with
    /// the start word.
    ///
    /// # Errors
    ///
    /// Returns an [`InputRejection`] (see [`validate_input`]) without
    /// building the pool or touching `frontier`.
    pub fn new(
        dictionary: &WordDictionary,
        start: &str,
        target: &'a str,
        mut frontier: F,
        scorer: &'a dyn LadderScorer,
    ) -> Result<Self, InputRejection> {
        validate_input(dictionary, start, target)?;

        let mut pool = dictionary
            .words_of_length(word_len(start))
            .cloned()
            .unwrap_or_default();
        pool.remove(start);
        let pool_size = pool.len() as u64;

        frontier.push(LadderState::root(start, scorer.priority(0, start, target)));

        Ok(Self {
            target,
            scorer,
            pool,
            pool_size,
            frontier,
            next_creation_order: 1,
            expansions: 0,
            states_enqueued: 0,
            record_expansions: false,
            events: Vec::new(),
        })
    }

    /// Record an [`ExpandEvent`] for every subsequent pop.
    #[must_use]
    pub fn recording(mut self, record: bool) -> Self {
        self.record_expansions = record;
        self
    }

    /// Pop one state and expand it.
    ///
    /// Every pool word adjacent to the popped state's last word is
    /// discovered in lexicographic order. The target finishes the search on
    /// discovery; any other word leaves the pool and is pushed.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::FrontierInvariant`] if the frontier reports
    /// itself non-empty but yields no state.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        if self.frontier.is_empty() {
            return Ok(Step::Exhausted);
        }
        let Some(state) = self.frontier.pop() else {
            return Err(SearchError::FrontierInvariant {
                detail: format!(
                    "pop returned nothing with {} states reported",
                    self.frontier.len()
                ),
            });
        };
        let order = self.expansions;
        self.expansions += 1;

        let adjacent: Vec<String> = self
            .pool
            .iter()
            .filter(|w| is_adjacent(state.last_word(), w))
            .cloned()
            .collect();
        debug!(
            order,
            word = state.last_word(),
            moves = state.moves(),
            priority = state.priority(),
            discovered = adjacent.len(),
            "expand"
        );

        let mut discovered = Vec::with_capacity(adjacent.len());
        let mut found = None;
        for word in adjacent {
            let moves = state.moves() + 1;
            let priority = self.scorer.priority(moves, &word, self.target);
            let child = state.extend(&word, priority, self.next_creation_order);
            self.next_creation_order += 1;
            let is_target = word == self.target;
            discovered.push(word);
            if is_target {
                found = Some(child);
                break;
            }
            self.pool.remove(child.last_word());
            trace!(state = %child, "enqueue");
            self.frontier.push(child);
            self.states_enqueued += 1;
        }

        if self.record_expansions {
            self.events.push(ExpandEvent {
                order,
                word: state.last_word().to_string(),
                moves: state.moves(),
                priority: state.priority(),
                discovered,
            });
        }

        Ok(found.map_or(Step::Continue, Step::Found))
    }

    /// Frontier pops so far.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    /// States pushed after seeding.
    #[must_use]
    pub fn states_enqueued(&self) -> u64 {
        self.states_enqueued
    }

    /// The frontier being searched.
    #[must_use]
    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    /// Words not yet discovered.
    #[must_use]
    pub fn pool(&self) -> &BTreeSet<String> {
        &self.pool
    }

    /// Counters as of now.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            expansions: self.expansions,
            states_enqueued: self.states_enqueued,
            frontier_high_water: self.frontier.high_water(),
            pool_size: self.pool_size,
            pool_remaining: self.pool.len() as u64,
        }
    }

    /// Recorded expansion events (empty unless recording).
    #[must_use]
    pub fn into_events(self) -> Vec<ExpandEvent> {
        self.events
    }
}

/// Run one search with the Hamming-distance estimate.
///
/// A start word equal to the target is a zero-move ladder and is returned
/// without expanding anything.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation and
/// [`SearchError::FrontierInvariant`] if a frontier breaks its contract.
/// Rejected input, exhaustion and an exhausted budget are not errors; they
/// are reported as [`LadderOutcome::NotFound`].
pub fn search(
    dictionary: &WordDictionary,
    start: &str,
    target: &str,
    policy: &SearchPolicy,
) -> Result<SearchReport, SearchError> {
    search_with_scorer(dictionary, start, target, policy, &HammingScorer)
}

/// Run one search with a caller-supplied estimate.
///
/// The estimate only feeds informed mode. Uninformed states are prioritized
/// by moves alone.
///
/// # Errors
///
/// See [`search`].
pub fn search_with_scorer(
    dictionary: &WordDictionary,
    start: &str,
    target: &str,
    policy: &SearchPolicy,
    scorer: &dyn LadderScorer,
) -> Result<SearchReport, SearchError> {
    policy.validate()?;

    let span = info_span!("ladder_search", mode = %policy.mode, start, target);
    let _enter = span.enter();

    let report =
        |outcome: LadderOutcome, stats: SearchStats, expansions: Vec<ExpandEvent>| SearchReport {
            mode: policy.mode,
            start: start.to_string(),
            target: target.to_string(),
            outcome,
            stats,
            expansions,
        };

    let (outcome, stats, events) = match policy.mode {
        SearchMode::Uninformed => {
            match LadderSearch::new(dictionary, start, target, FifoFrontier::new(), &ZeroScorer) {
                Ok(search) => drive(search, start, target, policy)?,
                Err(rejection) => return Ok(rejected(rejection, report)),
            }
        }
        SearchMode::Informed => {
            match LadderSearch::new(dictionary, start, target, PriorityFrontier::new(), scorer) {
                Ok(search) => drive(search, start, target, policy)?,
                Err(rejection) => return Ok(rejected(rejection, report)),
            }
        }
    };

    Ok(report(outcome, stats, events))
}

fn rejected(
    rejection: InputRejection,
    report: impl FnOnce(LadderOutcome, SearchStats, Vec<ExpandEvent>) -> SearchReport,
) -> SearchReport {
    info!(%rejection, "input rejected");
    report(
        LadderOutcome::NotFound {
            reason: NotFoundReason::InvalidInput(rejection),
        },
        SearchStats::default(),
        Vec::new(),
    )
}

fn drive<F: Frontier>(
    search: LadderSearch<'_, F>,
    start: &str,
    target: &str,
    policy: &SearchPolicy,
) -> Result<(LadderOutcome, SearchStats, Vec<ExpandEvent>), SearchError> {
    let mut search = search.recording(policy.record_expansions);

    // Root is already the goal.
    let outcome = if start == target {
        LadderOutcome::Found {
            path: vec![start.to_string()],
            moves: 0,
            states_enqueued: 0,
        }
    } else {
        loop {
            let budget_spent = policy
                .max_expansions
                .is_some_and(|max| search.expansions() >= max);
            if budget_spent && !search.frontier().is_empty() {
                break LadderOutcome::NotFound {
                    reason: NotFoundReason::ExpansionBudgetExceeded,
                };
            }
            match search.step()? {
                Step::Continue => {}
                Step::Found(goal) => {
                    break LadderOutcome::Found {
                        moves: goal.moves(),
                        states_enqueued: search.states_enqueued(),
                        path: goal.into_path(),
                    };
                }
                Step::Exhausted => {
                    break LadderOutcome::NotFound {
                        reason: NotFoundReason::Exhausted,
                    };
                }
            }
        }
    };

    if cfg!(debug_assertions) {
        if let Some(balance) = search
            .frontier()
            .balance_report()
            .filter(|b| !b.is_balanced())
        {
            warn!(
                nodes_checked = balance.nodes_checked,
                violations = balance.violations.len(),
                "priority frontier failed its balance self-check"
            );
        }
    }

    let stats = search.stats();
    match &outcome {
        LadderOutcome::Found { moves, .. } => info!(
            moves,
            expansions = stats.expansions,
            states_enqueued = stats.states_enqueued,
            "ladder found"
        ),
        LadderOutcome::NotFound { reason } => info!(
            %reason,
            expansions = stats.expansions,
            states_enqueued = stats.states_enqueued,
            "no ladder"
        ),
    }
    Ok((outcome, stats, search.into_events()))
}
