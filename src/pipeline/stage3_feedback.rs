use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::ScoreError;
use crate::model::feedback::FeedbackTier;
use crate::model::labels::{Label, LabelSet, Probabilities};
use crate::model::round::RoundOutcome;
use crate::model::scores::RankedResult;
use crate::model::thresholds::FeedbackProfile;

pub fn feedback(top_score: f32, is_match: bool) -> FeedbackTier {
    feedback_with(&FeedbackProfile::default_v1(), top_score, is_match)
}

pub fn feedback_with(profile: &FeedbackProfile, top_score: f32, is_match: bool) -> FeedbackTier {
    profile.ladder(is_match).select(top_score)
}

/// An empty ranking scores 0 and never matches.
pub fn evaluate_round(
    ranked: RankedResult,
    target: Label,
    profile: &FeedbackProfile,
) -> RoundOutcome {
    let (top_score, is_match) = match ranked.top() {
        Some(top) => (top.score, top.label == target),
        None => (0.0, false),
    };
    let tier = feedback_with(profile, top_score, is_match);
    RoundOutcome {
        target,
        ranked,
        top_score,
        is_match,
        tier,
    }
}

pub fn score_probabilities(
    probabilities: &[f32],
    labels: &LabelSet,
    target: Label,
    profile: &FeedbackProfile,
) -> Result<RoundOutcome, ScoreError> {
    let probabilities = Probabilities::try_from(probabilities)?;
    let ranked = labels.rank(&probabilities);
    Ok(evaluate_round(ranked, target, profile))
}

impl RoundOutcome {
    pub fn missing(target: Label, profile: &FeedbackProfile) -> Self {
        evaluate_round(RankedResult::default(), target, profile)
    }
}

pub fn pick_target<R: Rng + ?Sized>(labels: &LabelSet, rng: &mut R) -> Label {
    labels
        .labels()
        .choose(rng)
        .copied()
        .unwrap_or(Label::Heart)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_feedback.rs"]
mod tests;
