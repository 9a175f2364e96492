//! Shared helpers for ladder benchmark suites.

use ladder_kernel::dictionary::{WordDictionary, DEFAULT_MAX_WORD_LEN};

/// Every word of `len` characters over `alphabet`, minus every
/// `drop_every`-th word in lexicographic order (`0` keeps them all).
///
/// The full grid is maximally connected; dropping words lengthens ladders
/// and widens the informed/uninformed gap.
///
/// # Panics
///
/// Panics if `alphabet` is empty. Benchmark setup failures are fatal.
#[must_use]
pub fn grid_dictionary(len: usize, alphabet: &[u8], drop_every: usize) -> WordDictionary {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");
    let mut dictionary = WordDictionary::new(DEFAULT_MAX_WORD_LEN);
    let total = alphabet.len().pow(u32::try_from(len).expect("small length"));
    for index in 0..total {
        if drop_every != 0 && index % drop_every == 0 {
            continue;
        }
        let mut rest = index;
        let mut word = vec![0u8; len];
        for slot in word.iter_mut().rev() {
            *slot = alphabet[rest % alphabet.len()];
            rest /= alphabet.len();
        }
        dictionary.insert(&String::from_utf8(word).expect("ASCII alphabet"));
    }
    dictionary
}

/// First and last word of `len` characters: the pair farthest apart in
/// lexicographic order.
///
/// # Panics
///
/// Panics if the dictionary has no word of that length.
#[must_use]
pub fn extreme_pair(dictionary: &WordDictionary, len: usize) -> (String, String) {
    let bucket = dictionary.words_of_length(len).expect("words of length");
    let first = bucket.first().expect("non-empty bucket").clone();
    let last = bucket.last().expect("non-empty bucket").clone();
    (first, last)
}
