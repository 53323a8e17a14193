use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Amazing,
    AlmostPerfect,
    GreatJob,
    GoodAttempt,
    NiceTry,
    NotQuiteThere,
    ComeOnBetter,
    AlmostThere,
    Unlucky,
    KeepTrying,
}

impl FeedbackTier {
    /// Message key resolved to localized text by the presentation layer.
    pub fn key(self) -> &'static str {
        match self {
            FeedbackTier::Amazing => "amazing",
            FeedbackTier::AlmostPerfect => "almost_perfect",
            FeedbackTier::GreatJob => "great_job",
            FeedbackTier::GoodAttempt => "good_attempt",
            FeedbackTier::NiceTry => "nice_try",
            FeedbackTier::NotQuiteThere => "not_quite_there",
            FeedbackTier::ComeOnBetter => "come_on_better",
            FeedbackTier::AlmostThere => "almost_there",
            FeedbackTier::Unlucky => "unlucky",
            FeedbackTier::KeepTrying => "keep_trying",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            FeedbackTier::Amazing => "🎉",
            FeedbackTier::AlmostPerfect => "😊",
            FeedbackTier::GreatJob => "😀",
            FeedbackTier::GoodAttempt => "🙂",
            FeedbackTier::NiceTry => "😅",
            FeedbackTier::NotQuiteThere => "😕",
            FeedbackTier::ComeOnBetter => "💩",
            FeedbackTier::AlmostThere => "😬",
            FeedbackTier::Unlucky => "😢",
            FeedbackTier::KeepTrying => "😐",
        }
    }

    pub fn is_match_tier(self) -> bool {
        matches!(
            self,
            FeedbackTier::Amazing
                | FeedbackTier::AlmostPerfect
                | FeedbackTier::GreatJob
                | FeedbackTier::GoodAttempt
                | FeedbackTier::NiceTry
                | FeedbackTier::NotQuiteThere
        )
    }
}
