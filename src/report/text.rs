use crate::model::labels::LabelSet;
use crate::model::round::RoundOutcome;
use crate::model::stats::StatsBook;
use crate::report::{format_score_2, stats_rows};

pub fn feedback_line(outcome: &RoundOutcome) -> String {
    format!("{} {}", outcome.tier.key(), outcome.tier.badge())
}

pub fn render_round_text(outcome: &RoundOutcome) -> String {
    let mut out = String::new();
    out.push_str(&feedback_line(outcome));
    out.push('\n');
    out.push_str(&format!(
        "Target: {}  top score: {}  match: {}\n",
        outcome.target,
        format_score_2(outcome.top_score),
        if outcome.is_match { "yes" } else { "no" }
    ));
    if outcome.ranked.is_empty() {
        out.push_str("No predictions\n");
    }
    for entry in outcome.ranked.iter() {
        out.push_str(&format!("{} {}%\n", entry.label, entry.percent()));
    }
    out
}

pub fn render_stats_text(book: &StatsBook, labels: &LabelSet) -> String {
    let mut out = String::new();
    out.push_str("Statistics\n");
    out.push_str("==========\n");
    for row in stats_rows(book, labels) {
        out.push_str(&format!(
            "{}: {}/{} ({}%)\n",
            row.label, row.successes, row.attempts, row.success_rate
        ));
    }
    let total = book.total();
    out.push_str(&format!(
        "Total: {}/{} ({}%)\n",
        total.successes,
        total.attempts,
        total.success_rate()
    ));
    out
}
