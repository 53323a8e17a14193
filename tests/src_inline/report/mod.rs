use super::*;
use crate::model::feedback::FeedbackTier;
use crate::model::scores::{RankedResult, ScoredLabel};
use crate::report::text::{render_round_text, render_stats_text};

#[test]
fn test_percent_truncates() {
    let s = ScoredLabel {
        label: Label::Heart,
        score: 0.999,
    };
    assert_eq!(s.percent(), 99);
    assert_eq!(format_score_2(0.876), "0.88");
}

#[test]
fn test_empty_ranking_text() {
    let outcome = RoundOutcome {
        target: Label::Dizzy,
        ranked: RankedResult::default(),
        top_score: 0.0,
        is_match: false,
        tier: FeedbackTier::ComeOnBetter,
    };
    let text = render_round_text(&outcome);
    assert!(text.starts_with("come_on_better 💩\n"));
    assert!(text.contains("No predictions"));
}

#[test]
fn test_stats_text_lists_every_label() {
    let mut book = StatsBook::new();
    book.record_attempt(Label::Smiley);
    book.record_attempt(Label::Smiley);
    book.record_attempt(Label::Smiley);
    book.record_outcome(&RoundOutcome {
        target: Label::Smiley,
        ranked: RankedResult {
            entries: vec![ScoredLabel {
                label: Label::Smiley,
                score: 0.7,
            }],
        },
        top_score: 0.7,
        is_match: true,
        tier: FeedbackTier::GreatJob,
    });
    let text = render_stats_text(&book, &LabelSet::default_v1());
    assert!(text.contains("❤️: 0/0 (0%)\n"));
    assert!(text.contains("😃: 1/3 (33%)\n"));
    assert!(text.ends_with("Total: 1/3 (33%)\n"));

    let rows = stats_rows(&book, &LabelSet::default_v1());
    assert_eq!(rows[1].success_rate, 33);
}
