//! Both search modes against a reference BFS on seeded random dictionaries.
//!
//! Uninformed search must always return a shortest ladder. Informed search
//! is greedy and never reopens a word, so it only has to return a valid
//! ladder whenever one exists.

use ladder_kernel::cost::mismatch_count;
use ladder_kernel::dictionary::WordDictionary;
use ladder_search::policy::{SearchMode, SearchPolicy};
use ladder_search::report::{LadderOutcome, NotFoundReason};
use ladder_search::scorer::{HammingScorer, LadderScorer};
use ladder_search::search::{search, verify_ladder};
use lock_tests::ladder_test_helpers::{bfs_distance, random_dictionary, seeded_rng, words_of};
use rand::Rng;

struct Case {
    seed: u64,
    len: usize,
    alphabet: &'static [u8],
    count: usize,
}

const CASES: [Case; 4] = [
    Case {
        seed: 1,
        len: 3,
        alphabet: b"abc",
        count: 20,
    },
    Case {
        seed: 2,
        len: 4,
        alphabet: b"abcd",
        count: 90,
    },
    Case {
        seed: 3,
        len: 4,
        alphabet: b"abcdefgh",
        count: 300,
    },
    Case {
        seed: 4,
        len: 5,
        alphabet: b"aeiourst",
        count: 200,
    },
];

fn sample_pairs(dict: &WordDictionary, len: usize, seed: u64, n: usize) -> Vec<(String, String)> {
    let words = words_of(dict, len);
    let mut rng = seeded_rng(seed ^ 0xA5A5);
    (0..n)
        .map(|_| {
            let a = rng.gen_range(0..words.len());
            let b = rng.gen_range(0..words.len());
            (words[a].clone(), words[b].clone())
        })
        .collect()
}

#[test]
fn uninformed_matches_reference_bfs() {
    for case in &CASES {
        let dict = random_dictionary(case.seed, case.len, case.alphabet, case.count);
        for (start, target) in sample_pairs(&dict, case.len, case.seed, 40) {
            let report = search(&dict, &start, &target, &SearchPolicy::default()).unwrap();
            match (bfs_distance(&dict, &start, &target), &report.outcome) {
                (Some(d), LadderOutcome::Found { path, moves, .. }) => {
                    assert_eq!(*moves, d, "seed {} {start}->{target}", case.seed);
                    assert!(verify_ladder(&dict, &start, &target, path));
                    assert_eq!(path.len(), d as usize + 1);
                }
                (None, LadderOutcome::NotFound { reason }) => {
                    assert_eq!(*reason, NotFoundReason::Exhausted);
                }
                (expected, got) => {
                    panic!("seed {} {start}->{target}: bfs {expected:?}, got {got:?}", case.seed)
                }
            }
        }
    }
}

#[test]
fn informed_finds_a_valid_ladder_iff_one_exists() {
    for case in &CASES {
        let dict = random_dictionary(case.seed, case.len, case.alphabet, case.count);
        let policy = SearchPolicy::with_mode(SearchMode::Informed);
        for (start, target) in sample_pairs(&dict, case.len, case.seed, 40) {
            let report = search(&dict, &start, &target, &policy).unwrap();
            match (bfs_distance(&dict, &start, &target), &report.outcome) {
                (Some(d), LadderOutcome::Found { path, moves, .. }) => {
                    assert!(*moves >= d, "informed beat BFS on {start}->{target}");
                    assert!(verify_ladder(&dict, &start, &target, path));
                    assert_eq!(path.len() - 1, *moves as usize);
                }
                (None, LadderOutcome::NotFound { reason }) => {
                    assert_eq!(*reason, NotFoundReason::Exhausted);
                }
                (expected, got) => {
                    panic!("seed {} {start}->{target}: bfs {expected:?}, got {got:?}", case.seed)
                }
            }
        }
    }
}

#[test]
fn hamming_estimate_never_exceeds_true_distance() {
    for case in &CASES {
        let dict = random_dictionary(case.seed, case.len, case.alphabet, case.count);
        for (start, target) in sample_pairs(&dict, case.len, case.seed, 60) {
            if let Some(d) = bfs_distance(&dict, &start, &target) {
                let h = HammingScorer.estimate(&start, &target);
                assert!(h <= d, "h({start},{target})={h} > {d}");
            }
        }
    }
}

#[test]
fn hamming_estimate_is_consistent_along_edges() {
    let case = &CASES[1];
    let dict = random_dictionary(case.seed, case.len, case.alphabet, case.count);
    let words = words_of(&dict, case.len);
    let target = &words[0];
    for a in &words {
        for b in &words {
            if mismatch_count(a, b) == Some(1) {
                let ha = HammingScorer.estimate(a, target);
                let hb = HammingScorer.estimate(b, target);
                assert!(ha <= hb + 1, "{a} -> {b} drops the estimate by more than one");
            }
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let case = &CASES[2];
    let dict = random_dictionary(case.seed, case.len, case.alphabet, case.count);
    for mode in SearchMode::ALL {
        let policy = SearchPolicy {
            mode,
            record_expansions: true,
            ..SearchPolicy::default()
        };
        for (start, target) in sample_pairs(&dict, case.len, case.seed, 10) {
            let a = search(&dict, &start, &target, &policy).unwrap();
            let b = search(&dict, &start, &target, &policy).unwrap();
            assert_eq!(a, b, "{mode} {start}->{target}");
        }
    }
}
