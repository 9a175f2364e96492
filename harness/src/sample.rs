//! Built-in sample dictionary and demo pairs.

use ladder_kernel::dictionary::WordDictionary;

/// A small dictionary with ladders of several lengths and one isolated
/// pair (`quiz`, `jazz`).
pub const SAMPLE_DICTIONARY: &str = "\
hit hot dot dog lot log cog hog cot
cold cord card ward warm word worm wore core corn cork
quiz jazz
flour floor flood blood
";

/// Pairs that exercise the sample dictionary. The last one has no ladder.
pub const SAMPLE_PAIRS: [(&str, &str); 4] = [
    ("hot", "cog"),
    ("cold", "warm"),
    ("flour", "blood"),
    ("quiz", "jazz"),
];

/// Pairs run by `ladder --demo`. Most need a full English word list.
pub const DEMO_PAIRS: [(&str, &str); 6] = [
    ("kiss", "woof"),
    ("cock", "numb"),
    ("jura", "such"),
    ("stet", "whey"),
    ("rums", "numb"),
    ("irk", "yuk"),
];

/// [`SAMPLE_DICTIONARY`] admitting words shorter than `max_word_len`.
#[must_use]
pub fn sample_dictionary(max_word_len: usize) -> WordDictionary {
    WordDictionary::from_text(SAMPLE_DICTIONARY, max_word_len)
}
