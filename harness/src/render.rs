//! Plain-text rendering of play reports.
//!
//! ```text
//! Uninformed search:
//! Seeking an uninformed solution from hot to cog
//! [ hot dot dog cog ] total enqueues 4
//! ```

use std::fmt::Write as _;

use ladder_search::policy::SearchMode;
use ladder_search::report::{LadderOutcome, NotFoundReason, SearchReport};

use crate::runner::PlayReport;

fn heading(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::Uninformed => "Uninformed search:",
        SearchMode::Informed => "Informed search:",
    }
}

/// Render one search as the lines printed for it.
#[must_use]
pub fn render_search(report: &SearchReport) -> String {
    let mut out = String::new();
    if let LadderOutcome::NotFound {
        reason: NotFoundReason::InvalidInput(rejection),
    } = &report.outcome
    {
        let _ = writeln!(out, "No solution: {rejection}");
        return out;
    }

    let _ = writeln!(out, "{}", heading(report.mode));
    let _ = writeln!(
        out,
        "Seeking an {} solution from {} to {}",
        report.mode, report.start, report.target
    );
    match &report.outcome {
        LadderOutcome::Found {
            path,
            states_enqueued,
            ..
        } => {
            let _ = writeln!(
                out,
                "[ {} ] total enqueues {states_enqueued}",
                path.join(" ")
            );
        }
        LadderOutcome::NotFound {
            reason: NotFoundReason::ExpansionBudgetExceeded,
        } => {
            let _ = writeln!(
                out,
                "No ladder found from {} to {} within {} expansions",
                report.start, report.target, report.stats.expansions
            );
        }
        LadderOutcome::NotFound { .. } => {
            let _ = writeln!(
                out,
                "No ladder found from {} to {}",
                report.start, report.target
            );
        }
    }
    out
}

/// Render a whole play. Input rejected by every mode is reported once.
#[must_use]
pub fn render_text(report: &PlayReport) -> String {
    let rejected = report.runs.first().and_then(|run| match run.outcome {
        LadderOutcome::NotFound {
            reason: NotFoundReason::InvalidInput(_),
        } => Some(run),
        _ => None,
    });
    if let Some(run) = rejected {
        return render_search(run);
    }
    report.runs.iter().map(render_search).collect()
}
