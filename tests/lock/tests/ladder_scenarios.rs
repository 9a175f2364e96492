//! End-to-end ladder scenarios through the public search API.

use ladder_kernel::dictionary::{WordDictionary, DEFAULT_MAX_WORD_LEN};
use ladder_search::policy::{SearchMode, SearchPolicy};
use ladder_search::report::{InputRejection, LadderOutcome, NotFoundReason, SearchReport};
use ladder_search::search::{search, verify_ladder};
use lock_tests::ladder_test_helpers::{bfs_distance, classic_dictionary};

fn run(dictionary: &WordDictionary, start: &str, target: &str, mode: SearchMode) -> SearchReport {
    search(dictionary, start, target, &SearchPolicy::with_mode(mode)).unwrap()
}

fn reason(report: &SearchReport) -> Option<NotFoundReason> {
    report.outcome.not_found_reason()
}

#[test]
fn classic_uninformed_hot_to_cog() {
    let dict = classic_dictionary();
    let report = run(&dict, "hot", "cog", SearchMode::Uninformed);
    let LadderOutcome::Found { path, moves, .. } = &report.outcome else {
        panic!("expected a ladder, got {:?}", report.outcome);
    };
    assert_eq!(path.len(), 4);
    assert_eq!(*moves, 3);
    assert_eq!(path.first().map(String::as_str), Some("hot"));
    assert_eq!(path.last().map(String::as_str), Some("cog"));
    assert!(verify_ladder(&dict, "hot", "cog", path));
}

#[test]
fn classic_informed_hot_to_cog() {
    let dict = classic_dictionary();
    let report = run(&dict, "hot", "cog", SearchMode::Informed);
    let path = report.outcome.path().expect("informed search finds a ladder");
    assert!(verify_ladder(&dict, "hot", "cog", path));
    assert_eq!(path.len(), 4);
}

#[test]
fn unequal_lengths_build_nothing() {
    let dict = WordDictionary::from_words(["hot", "frog", "dot"], DEFAULT_MAX_WORD_LEN);
    for mode in SearchMode::ALL {
        let report = run(&dict, "hot", "frog", mode);
        assert!(matches!(
            reason(&report),
            Some(NotFoundReason::InvalidInput(
                InputRejection::LengthMismatch { .. }
            ))
        ));
        assert_eq!(report.stats.pool_size, 0);
        assert_eq!(report.stats.frontier_high_water, 0);
        assert_eq!(report.stats.expansions, 0);
    }
}

#[test]
fn absent_start_word() {
    let dict = classic_dictionary();
    for mode in SearchMode::ALL {
        let report = run(&dict, "hit", "cog", mode);
        assert_eq!(
            reason(&report),
            Some(NotFoundReason::InvalidInput(InputRejection::UnknownStart))
        );
    }
}

#[test]
fn absent_target_word() {
    let dict = classic_dictionary();
    let report = run(&dict, "hot", "hit", SearchMode::Informed);
    assert_eq!(
        reason(&report),
        Some(NotFoundReason::InvalidInput(InputRejection::UnknownTarget))
    );
}

#[test]
fn over_long_words_rejected() {
    let dict = WordDictionary::new(5);
    let report = run(&dict, "abcde", "abcdf", SearchMode::Uninformed);
    assert_eq!(
        reason(&report),
        Some(NotFoundReason::InvalidInput(InputRejection::TooLong {
            len: 5,
            max: 5
        }))
    );
}

#[test]
fn disconnected_components_exhaust_in_both_modes() {
    let dict = WordDictionary::from_words(
        ["hot", "dot", "lot", "cog", "bog", "fog"],
        DEFAULT_MAX_WORD_LEN,
    );
    assert_eq!(bfs_distance(&dict, "hot", "cog"), None);
    for mode in SearchMode::ALL {
        let report = run(&dict, "hot", "cog", mode);
        assert_eq!(reason(&report), Some(NotFoundReason::Exhausted), "{mode}");
        // hot, dot and lot are each expanded once; cog's side is never reached.
        assert_eq!(report.stats.expansions, 3);
        assert_eq!(report.stats.pool_remaining, 3);
    }
}

#[test]
fn same_start_and_target() {
    let dict = classic_dictionary();
    for mode in SearchMode::ALL {
        let report = run(&dict, "log", "log", mode);
        assert_eq!(
            report.outcome,
            LadderOutcome::Found {
                path: vec!["log".to_string()],
                moves: 0,
                states_enqueued: 0,
            }
        );
    }
}

#[test]
fn single_move_ladder() {
    let dict = classic_dictionary();
    for mode in SearchMode::ALL {
        let report = run(&dict, "dog", "cog", mode);
        let LadderOutcome::Found {
            path,
            moves,
            states_enqueued,
        } = report.outcome
        else {
            panic!("{mode}: expected a ladder");
        };
        assert_eq!(path, vec!["dog".to_string(), "cog".to_string()]);
        assert_eq!(moves, 1);
        assert_eq!(states_enqueued, 0, "{mode}: target found on first expansion");
    }
}

#[test]
fn non_ascii_words_measured_in_characters() {
    let dict = WordDictionary::from_words(["café", "cafe", "cage", "sage"], DEFAULT_MAX_WORD_LEN);
    let report = run(&dict, "café", "sage", SearchMode::Uninformed);
    assert_eq!(
        report.outcome.path().map(<[String]>::len),
        Some(4),
        "café cafe cage sage"
    );
}
