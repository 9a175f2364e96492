//! `ladder`: find word ladders from the command line.
//!
//! Reports go to stdout (text, or JSON with `--json`); logs go to stderr and
//! are filtered by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ladder_harness::config::HarnessConfig;
use ladder_harness::dictionary::load_dictionary;
use ladder_harness::render::render_text;
use ladder_harness::runner::{pick_pair, play, PlayReport};
use ladder_harness::sample::{sample_dictionary, DEMO_PAIRS};
use ladder_search::policy::SearchMode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Both,
    Uninformed,
    Informed,
}

impl ModeArg {
    fn modes(self) -> Vec<SearchMode> {
        match self {
            Self::Both => SearchMode::ALL.to_vec(),
            Self::Uninformed => vec![SearchMode::Uninformed],
            Self::Informed => vec![SearchMode::Informed],
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ladder", about = "Find word ladders with uninformed and informed search")]
struct Args {
    /// Whitespace-separated word list (defaults to a small built-in sample)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Words must be strictly shorter than this
    #[arg(long)]
    max_word_len: Option<usize>,

    /// Which searches to run
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,

    /// Stop a search after this many expansions
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Include every expansion in JSON output
    #[arg(long, default_value_t = false)]
    record_expansions: bool,

    /// Print reports as JSON with their digests
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Pick a start/target pair of this length instead of taking one
    #[arg(long, conflicts_with_all = ["start", "target", "demo"])]
    random_length: Option<usize>,

    /// Seed for --random-length
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Play the built-in demo pairs
    #[arg(long, default_value_t = false, conflicts_with_all = ["start", "target"])]
    demo: bool,

    /// Start word
    start: Option<String>,

    /// Target word
    target: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ladder_search=info,ladder_harness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_report(report: &PlayReport, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "digest": report.digest()?.to_string(),
            "report": report.to_json_value(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render_text(report));
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = HarnessConfig {
        max_word_len: args.max_word_len,
        modes: args.mode.modes(),
        max_expansions: args.max_expansions,
        record_expansions: args.record_expansions,
    };
    config.validate().context("invalid search options")?;
    let max_word_len = config.checked_max_word_len()?;

    let dictionary = match &args.dictionary {
        Some(path) => {
            load_dictionary(path, max_word_len)
                .with_context(|| format!("loading dictionary {}", path.display()))?
                .dictionary
        }
        None => sample_dictionary(max_word_len),
    };

    let pairs: Vec<(String, String)> = if args.demo {
        DEMO_PAIRS
            .iter()
            .map(|(s, t)| ((*s).to_string(), (*t).to_string()))
            .collect()
    } else if let Some(len) = args.random_length {
        match pick_pair(&dictionary, len, args.seed) {
            Some(pair) => vec![pair],
            None => bail!("dictionary has no words of length {len}"),
        }
    } else {
        match (args.start, args.target) {
            (Some(start), Some(target)) => vec![(start, target)],
            _ => bail!("expected START and TARGET, --demo, or --random-length"),
        }
    };

    for (start, target) in &pairs {
        let report = play(&dictionary, start, target, &config)
            .with_context(|| format!("playing {start} -> {target}"))?;
        print_report(&report, args.json)?;
    }
    Ok(())
}
