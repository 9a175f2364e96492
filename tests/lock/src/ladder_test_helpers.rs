//! Deterministic generators and a reference BFS for ladder lock tests.
//!
//! Nothing here uses ambient randomness: every generator is a seeded
//! [`StdRng`] so a failing case can be replayed exactly.

use std::collections::{HashMap, VecDeque};

use ladder_kernel::cost::is_adjacent;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ladder_kernel::dictionary::{WordDictionary, DEFAULT_MAX_WORD_LEN};

/// The six-word dictionary used throughout the scenario tests.
pub const CLASSIC_WORDS: [&str; 6] = ["hot", "dot", "dog", "lot", "log", "cog"];

/// Seeded generator shared by every randomized lock test.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `0..n` in a seeded random order.
#[must_use]
pub fn shuffled_range(n: u32, seed: u64) -> Vec<u32> {
    let mut items: Vec<u32> = (0..n).collect();
    items.shuffle(&mut seeded_rng(seed));
    items
}

/// [`CLASSIC_WORDS`] with the default maximum length.
#[must_use]
pub fn classic_dictionary() -> WordDictionary {
    WordDictionary::from_words(CLASSIC_WORDS, DEFAULT_MAX_WORD_LEN)
}

/// `count` random words of `len` characters over `alphabet`, deduplicated
/// by the dictionary.
///
/// Small alphabets give dense, well-connected graphs; larger ones leave
/// isolated words and disconnected components.
#[must_use]
pub fn random_dictionary(seed: u64, len: usize, alphabet: &[u8], count: usize) -> WordDictionary {
    let mut rng = seeded_rng(seed);
    let mut dictionary = WordDictionary::new(DEFAULT_MAX_WORD_LEN);
    for _ in 0..count {
        let word: String = (0..len)
            .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
            .collect();
        dictionary.insert(&word);
    }
    dictionary
}

/// Every word of `len` characters in `dictionary`, in lexicographic order.
#[must_use]
pub fn words_of(dictionary: &WordDictionary, len: usize) -> Vec<String> {
    dictionary
        .words_of_length(len)
        .map(|bucket| bucket.iter().cloned().collect())
        .unwrap_or_default()
}

/// Shortest ladder length in moves, by plain BFS over adjacency.
///
/// Independent of the engine: no pool, no frontier types, no tree.
#[must_use]
pub fn bfs_distance(dictionary: &WordDictionary, start: &str, target: &str) -> Option<u32> {
    if !dictionary.contains(start) || !dictionary.contains(target) {
        return None;
    }
    let words = words_of(dictionary, start.chars().count());
    let mut dist: HashMap<&str, u32> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(word) = queue.pop_front() {
        let d = dist[word];
        if word == target {
            return Some(d);
        }
        for next in &words {
            if !dist.contains_key(next.as_str()) && is_adjacent(word, next) {
                dist.insert(next.as_str(), d + 1);
                queue.push_back(next.as_str());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_range_is_a_seeded_permutation() {
        let a = shuffled_range(64, 9);
        assert_eq!(a, shuffled_range(64, 9));
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<u32>>());
    }

    #[test]
    fn random_dictionary_is_reproducible() {
        let a = random_dictionary(5, 4, b"abcd", 50);
        assert_eq!(a, random_dictionary(5, 4, b"abcd", 50));
        assert!(words_of(&a, 4).iter().all(|w| w.bytes().all(|b| b"abcd".contains(&b))));
    }
}
