//! Cost model for single-character word transformations.
//!
//! Words are compared position by position over Unicode scalar values, so
//! lengths are character counts, not byte counts.

/// Number of characters in `word`.
#[must_use]
pub fn word_len(word: &str) -> usize {
    if word.is_ascii() {
        word.len()
    } else {
        word.chars().count()
    }
}

/// Count of positions where `word` and `target` differ (Hamming distance).
///
/// Returns `None` when the words have different lengths.
///
/// Each single-character move changes at most one position, so this never
/// overestimates the number of moves between two words.
#[must_use]
pub fn mismatch_count(word: &str, target: &str) -> Option<u32> {
    if word.is_ascii() && target.is_ascii() {
        if word.len() != target.len() {
            return None;
        }
        let diff = word
            .bytes()
            .zip(target.bytes())
            .filter(|(a, b)| a != b)
            .count();
        return u32::try_from(diff).ok();
    }
    if word_len(word) != word_len(target) {
        return None;
    }
    let diff = word
        .chars()
        .zip(target.chars())
        .filter(|(a, b)| a != b)
        .count();
    u32::try_from(diff).ok()
}

/// Two words are adjacent iff they have equal length and differ in exactly
/// one position.
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    mismatch_count(a, b) == Some(1)
}

/// Estimated total cost of a partial ladder ending at `word`:
/// `moves + mismatch_count(word, target)`.
///
/// Returns `None` when the words have different lengths.
#[must_use]
pub fn total_cost(word: &str, target: &str, moves: u32) -> Option<u32> {
    mismatch_count(word, target).map(|h| h.saturating_add(moves))
}
