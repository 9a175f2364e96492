//! Binary that plays the sample pairs through every search mode and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `ladder_fixture`
//!
//! Output: key=value lines, one block per sample pair plus one random pick.

use ladder_harness::config::HarnessConfig;
use ladder_harness::runner::{pick_pair, play};
use ladder_harness::sample::{sample_dictionary, SAMPLE_PAIRS};
use ladder_kernel::dictionary::DEFAULT_MAX_WORD_LEN;
use ladder_search::report::LadderOutcome;

fn main() {
    let dictionary = sample_dictionary(DEFAULT_MAX_WORD_LEN);
    let config = HarnessConfig {
        record_expansions: true,
        ..HarnessConfig::default()
    };

    let mut pairs: Vec<(String, String)> = SAMPLE_PAIRS
        .iter()
        .map(|(s, t)| ((*s).to_string(), (*t).to_string()))
        .collect();
    pairs.push(pick_pair(&dictionary, 4, 2024).expect("sample has four-letter words"));

    for (start, target) in &pairs {
        let report = play(&dictionary, start, target, &config).expect("play failed");
        println!("pair={start}->{target}");
        println!("play_digest={}", report.digest().expect("digest failed"));
        for run in &report.runs {
            let outcome = match &run.outcome {
                LadderOutcome::Found { path, .. } => path.join(" "),
                LadderOutcome::NotFound { reason } => reason.as_str().to_string(),
            };
            println!("{}.outcome={outcome}", run.mode);
            println!("{}.expansions={}", run.mode, run.stats.expansions);
            println!("{}.states_enqueued={}", run.mode, run.stats.states_enqueued);
        }
    }
}
