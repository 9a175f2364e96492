//! Remaining-cost estimates for informed search.

use ladder_kernel::cost::{mismatch_count, total_cost};

/// Estimate of the number of moves still needed to turn `word` into
/// `target`.
///
/// Implementations must be deterministic. For the informed search to keep
/// its usual guarantees the estimate should never exceed the true remaining
/// distance.
pub trait LadderScorer: Send + Sync {
    /// Estimated moves from `word` to `target`.
    fn estimate(&self, word: &str, target: &str) -> u32;

    /// Frontier priority of a partial ladder ending at `word` after
    /// `moves` moves.
    fn priority(&self, moves: u32, word: &str, target: &str) -> u32 {
        moves.saturating_add(self.estimate(word, target))
    }
}

/// Counts differing character positions (Hamming distance).
///
/// Admissible and consistent: each move changes exactly one position.
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingScorer;

impl LadderScorer for HammingScorer {
    fn estimate(&self, word: &str, target: &str) -> u32 {
        // Unequal lengths never reach the engine; saturate if they do.
        mismatch_count(word, target).unwrap_or(u32::MAX)
    }

    fn priority(&self, moves: u32, word: &str, target: &str) -> u32 {
        total_cost(word, target, moves).unwrap_or(u32::MAX)
    }
}

/// Always zero. Informed mode degenerates to uniform-cost ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroScorer;

impl LadderScorer for ZeroScorer {
    fn estimate(&self, _word: &str, _target: &str) -> u32 {
        0
    }
}
