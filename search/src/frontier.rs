//! Frontier containers for unexpanded ladder states.
//!
//! Two disciplines share one trait: [`FifoFrontier`] (breadth-first) and
//! [`PriorityFrontier`] (best-first over an AVL [`PriorityTree`]). Neither
//! tracks visited words; the engine's candidate pool does that.

use std::collections::VecDeque;

use ladder_kernel::tree::{BalanceReport, PriorityTree};

use crate::node::{LadderOrder, LadderState};

/// Container of states waiting to be expanded.
pub trait Frontier {
    /// Add a state.
    fn push(&mut self, state: LadderState);

    /// Remove the next state to expand, or `None` if empty.
    fn pop(&mut self) -> Option<LadderState>;

    /// Current number of states.
    fn len(&self) -> usize;

    /// Whether no state is waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size ever reached.
    fn high_water(&self) -> u64;

    /// Structural self-check, for frontiers that have a structure to check.
    fn balance_report(&self) -> Option<BalanceReport> {
        None
    }
}

fn bump_high_water(high_water: &mut u64, len: usize) {
    let size = len as u64;
    if size > *high_water {
        *high_water = size;
    }
}

/// First-in, first-out frontier.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<LadderState>,
    high_water: u64,
}

impl FifoFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, state: LadderState) {
        self.queue.push_back(state);
        bump_high_water(&mut self.high_water, self.queue.len());
    }

    fn pop(&mut self) -> Option<LadderState> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Best-first frontier: lowest `(priority, creation_order)` pops first.
#[derive(Debug)]
pub struct PriorityFrontier {
    tree: PriorityTree<LadderState, LadderOrder>,
    high_water: u64,
}

impl PriorityFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: PriorityTree::with_order(LadderOrder),
            high_water: 0,
        }
    }
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, state: LadderState) {
        self.tree.insert(state);
        bump_high_water(&mut self.high_water, self.tree.len());
    }

    fn pop(&mut self) -> Option<LadderState> {
        self.tree.delete_min().ok()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }

    fn balance_report(&self) -> Option<BalanceReport> {
        Some(self.tree.check_balance())
    }
}
