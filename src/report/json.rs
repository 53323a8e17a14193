use serde::Serialize;

use crate::error::ScoreError;
use crate::model::labels::LabelSet;
use crate::model::round::RoundOutcome;
use crate::model::stats::StatsBook;
use crate::report::{RoundSummary, StatsRow, TOOL_NAME, stats_rows};

#[derive(Debug, Serialize)]
struct StatsSummary {
    tool: &'static str,
    version: &'static str,
    labels: Vec<StatsRow>,
}

pub fn render_round_json(outcome: &RoundOutcome) -> Result<String, ScoreError> {
    Ok(serde_json::to_string_pretty(&RoundSummary::from_outcome(
        outcome,
    ))?)
}

pub fn render_stats_json(book: &StatsBook, labels: &LabelSet) -> Result<String, ScoreError> {
    let summary = StatsSummary {
        tool: TOOL_NAME,
        version: env!("CARGO_PKG_VERSION"),
        labels: stats_rows(book, labels),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}
