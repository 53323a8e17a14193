use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_feedback_examples() {
    assert_eq!(feedback(0.9, true), FeedbackTier::Amazing);
    assert_eq!(feedback(0.85, true), FeedbackTier::AlmostPerfect);
    assert_eq!(feedback(0.5, false), FeedbackTier::KeepTrying);
    assert_eq!(feedback(0.49, false), FeedbackTier::Unlucky);
    assert_eq!(feedback(0.1, false), FeedbackTier::ComeOnBetter);
    assert_eq!(feedback(0.3, true), FeedbackTier::NiceTry);
    assert_eq!(feedback(0.25, true), FeedbackTier::NotQuiteThere);
}

#[test]
fn test_score_probabilities_match() {
    let labels = LabelSet::default_v1();
    let profile = FeedbackProfile::default_v1();
    let outcome =
        score_probabilities(&[0.1, 0.9, 0.05, 0.05, 0.0], &labels, Label::Smiley, &profile)
            .unwrap();
    assert!(outcome.is_match);
    assert_eq!(outcome.top_score, 0.9);
    assert_eq!(outcome.tier, FeedbackTier::Amazing);
    assert_eq!(outcome.ranked.len(), 3);
}

#[test]
fn test_score_probabilities_miss_uses_missed_ladder() {
    let labels = LabelSet::default_v1();
    let profile = FeedbackProfile::default_v1();
    let outcome =
        score_probabilities(&[0.1, 0.6, 0.1, 0.1, 0.1], &labels, Label::Dizzy, &profile).unwrap();
    assert!(!outcome.is_match);
    assert_eq!(outcome.tier, FeedbackTier::KeepTrying);
}

#[test]
fn test_score_probabilities_short_vector_is_invalid() {
    let labels = LabelSet::default_v1();
    let profile = FeedbackProfile::default_v1();
    let err = score_probabilities(&[0.12, 0.88, 0.0], &labels, Label::Heart, &profile)
        .unwrap_err();
    assert!(matches!(
        err,
        ScoreError::InvalidInput {
            probabilities: 3,
            labels: 5
        }
    ));
}

#[test]
fn test_missing_outcome_defaults() {
    let outcome = RoundOutcome::missing(Label::Heart, &FeedbackProfile::default_v1());
    assert!(outcome.ranked.is_empty());
    assert_eq!(outcome.top_score, 0.0);
    assert!(!outcome.is_match);
    assert_eq!(outcome.tier, FeedbackTier::ComeOnBetter);
}

#[test]
fn test_pick_target_seeded_is_reproducible() {
    let labels = LabelSet::default_v1();
    let a = pick_target(&labels, &mut StdRng::seed_from_u64(7));
    let b = pick_target(&labels, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert!(labels.position(a).is_some());
}

#[test]
fn test_score_probabilities_follows_label_set_order() {
    let labels = LabelSet::new([
        Label::ThumbsUp,
        Label::Dizzy,
        Label::HeartEyes,
        Label::Smiley,
        Label::Heart,
    ])
    .unwrap();
    let outcome = score_probabilities(
        &[0.7, 0.1, 0.1, 0.05, 0.05],
        &labels,
        Label::ThumbsUp,
        &FeedbackProfile::default_v1(),
    )
    .unwrap();
    assert!(outcome.is_match);
    assert_eq!(outcome.tier, FeedbackTier::GreatJob);
}
