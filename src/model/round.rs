use serde::Serialize;

use crate::model::feedback::FeedbackTier;
use crate::model::labels::Label;
use crate::model::scores::RankedResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundOutcome {
    pub target: Label,
    pub ranked: RankedResult,
    pub top_score: f32,
    pub is_match: bool,
    pub tier: FeedbackTier,
}
