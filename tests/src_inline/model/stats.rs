use super::*;
use crate::model::feedback::FeedbackTier;
use crate::model::scores::{RankedResult, ScoredLabel};

fn outcome(target: Label, top: Option<Label>) -> RoundOutcome {
    let entries = top
        .map(|label| vec![ScoredLabel { label, score: 0.9 }])
        .unwrap_or_default();
    RoundOutcome {
        target,
        ranked: RankedResult { entries },
        top_score: 0.9,
        is_match: top == Some(target),
        tier: FeedbackTier::Amazing,
    }
}

#[test]
fn test_success_rate_truncates() {
    let s = EmojiStats {
        attempts: 3,
        successes: 2,
    };
    assert_eq!(s.success_rate(), 66);
    assert_eq!(EmojiStats::default().success_rate(), 0);
}

#[test]
fn test_attempts_and_successes_counted_separately() {
    let mut book = StatsBook::new();
    book.record_attempt(Label::Heart);
    book.record_attempt(Label::Heart);
    assert!(book.record_outcome(&outcome(Label::Heart, Some(Label::Heart))));
    assert!(!book.record_outcome(&outcome(Label::Heart, Some(Label::Dizzy))));
    assert!(!book.record_outcome(&outcome(Label::Heart, None)));

    let heart = book.get(Label::Heart);
    assert_eq!(heart.attempts, 2);
    assert_eq!(heart.successes, 1);
    assert_eq!(heart.success_rate(), 50);
}

#[test]
fn test_rows_follow_label_set_order() {
    let mut book = StatsBook::new();
    book.record_attempt(Label::ThumbsUp);
    let rows = book.rows(&LabelSet::default_v1());
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].0, Label::Heart);
    assert_eq!(rows[0].1, EmojiStats::default());
    assert_eq!(rows[4].1.attempts, 1);
    assert_eq!(book.total().attempts, 1);
}

#[test]
fn test_json_keyed_by_glyph() {
    let mut book = StatsBook::new();
    book.record_attempt(Label::Smiley);
    let json = serde_json::to_string(&book).unwrap();
    assert_eq!(json, r#"{"😃":{"attempts":1,"successes":0}}"#);

    let back: StatsBook = serde_json::from_str(&json).unwrap();
    assert_eq!(back, book);

    let partial: StatsBook = serde_json::from_str(r#"{"👍":{"successes":1}}"#).unwrap();
    assert_eq!(partial.get(Label::ThumbsUp).attempts, 0);
    assert_eq!(partial.get(Label::ThumbsUp).successes, 1);
}
