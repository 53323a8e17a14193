pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::labels::{Label, LabelSet};
use crate::model::round::RoundOutcome;
use crate::model::stats::StatsBook;

pub const TOOL_NAME: &str = "doodle-emoji-scorer";

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackView {
    pub key: &'static str,
    pub badge: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedView {
    pub label: Label,
    pub score: f32,
    pub percent: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub target: Label,
    pub top_score: f32,
    pub is_match: bool,
    pub feedback: FeedbackView,
    pub ranked: Vec<RankedView>,
}

impl RoundSummary {
    pub fn from_outcome(outcome: &RoundOutcome) -> Self {
        Self {
            tool: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
            target: outcome.target,
            top_score: outcome.top_score,
            is_match: outcome.is_match,
            feedback: FeedbackView {
                key: outcome.tier.key(),
                badge: outcome.tier.badge(),
            },
            ranked: outcome
                .ranked
                .iter()
                .map(|s| RankedView {
                    label: s.label,
                    score: s.score,
                    percent: s.percent(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsRow {
    pub label: Label,
    pub attempts: u32,
    pub successes: u32,
    pub success_rate: u32,
}

pub fn stats_rows(book: &StatsBook, labels: &LabelSet) -> Vec<StatsRow> {
    book.rows(labels)
        .into_iter()
        .map(|(label, s)| StatsRow {
            label,
            attempts: s.attempts,
            successes: s.successes,
            success_rate: s.success_rate(),
        })
        .collect()
}

pub fn format_score_2(v: f32) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
