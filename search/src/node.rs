//! Ladder states and their frontier ordering.

use std::cmp::Ordering;
use std::fmt;

use ladder_kernel::tree::KeyOrder;

/// An immutable partial ladder.
///
/// Ordering for frontier extraction uses `(priority, creation_order)`.
/// Lower is better; ties are broken by older creation order, so
/// equal-priority states leave the priority tree in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderState {
    last_word: String,
    moves: u32,
    path: Vec<String>,
    priority: u32,
    creation_order: u64,
}

impl LadderState {
    /// The seed state: a one-word ladder with zero moves and creation order 0.
    #[must_use]
    pub fn root(word: &str, priority: u32) -> Self {
        Self {
            last_word: word.to_string(),
            moves: 0,
            path: vec![word.to_string()],
            priority,
            creation_order: 0,
        }
    }

    /// A new state one move further, ending at `word`.
    #[must_use]
    pub fn extend(&self, word: &str, priority: u32, creation_order: u64) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(word.to_string());
        Self {
            last_word: word.to_string(),
            moves: self.moves + 1,
            path,
            priority,
            creation_order,
        }
    }

    /// Final word of the ladder.
    #[must_use]
    pub fn last_word(&self) -> &str {
        &self.last_word
    }

    /// Number of single-character moves taken (`path.len() - 1`).
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Every word from the start word to `last_word`.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Consume the state, keeping only its path.
    #[must_use]
    pub fn into_path(self) -> Vec<String> {
        self.path
    }

    /// Frontier priority fixed at construction.
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Per-search monotonic counter for tie-breaking.
    #[must_use]
    pub fn creation_order(&self) -> u64 {
        self.creation_order
    }

    /// Words joined by single spaces.
    #[must_use]
    pub fn ladder(&self) -> String {
        self.path.join(" ")
    }

    /// The frontier ordering key.
    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey {
            priority: self.priority,
            creation_order: self.creation_order,
        }
    }
}

impl fmt::Display for LadderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] p={}", self.ladder(), self.priority)
    }
}

/// The frontier ordering key: `(priority, creation_order)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

/// Orders [`LadderState`]s by [`FrontierKey`] inside a priority tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LadderOrder;

impl KeyOrder<LadderState> for LadderOrder {
    fn compare(&self, a: &LadderState, b: &LadderState) -> Ordering {
        a.key().cmp(&b.key())
    }
}
