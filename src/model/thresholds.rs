use crate::model::feedback::FeedbackTier;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Above(f32),
    Below(f32),
}

impl Bound {
    /// Strict comparison; NaN is never admitted.
    pub fn admits(self, score: f32) -> bool {
        match self {
            Bound::Above(t) => score > t,
            Bound::Below(t) => score < t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub bound: Bound,
    pub tier: FeedbackTier,
}

/// Rungs are checked in order; the first that admits the score wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackLadder {
    pub rungs: &'static [Rung],
    pub fallback: FeedbackTier,
}

impl FeedbackLadder {
    pub fn select(&self, score: f32) -> FeedbackTier {
        self.rungs
            .iter()
            .find(|rung| rung.bound.admits(score))
            .map(|rung| rung.tier)
            .unwrap_or(self.fallback)
    }
}

const MATCHED_RUNGS_V1: &[Rung] = &[
    Rung {
        bound: Bound::Above(0.85),
        tier: FeedbackTier::Amazing,
    },
    Rung {
        bound: Bound::Above(0.70),
        tier: FeedbackTier::AlmostPerfect,
    },
    Rung {
        bound: Bound::Above(0.55),
        tier: FeedbackTier::GreatJob,
    },
    Rung {
        bound: Bound::Above(0.40),
        tier: FeedbackTier::GoodAttempt,
    },
    Rung {
        bound: Bound::Above(0.25),
        tier: FeedbackTier::NiceTry,
    },
];

const MISSED_RUNGS_V1: &[Rung] = &[
    Rung {
        bound: Bound::Below(0.15),
        tier: FeedbackTier::ComeOnBetter,
    },
    Rung {
        bound: Bound::Below(0.30),
        tier: FeedbackTier::AlmostThere,
    },
    Rung {
        bound: Bound::Below(0.50),
        tier: FeedbackTier::Unlucky,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackProfile {
    pub matched: FeedbackLadder,
    pub missed: FeedbackLadder,
}

impl FeedbackProfile {
    pub fn default_v1() -> Self {
        Self {
            matched: FeedbackLadder {
                rungs: MATCHED_RUNGS_V1,
                fallback: FeedbackTier::NotQuiteThere,
            },
            missed: FeedbackLadder {
                rungs: MISSED_RUNGS_V1,
                fallback: FeedbackTier::KeepTrying,
            },
        }
    }

    pub fn ladder(&self, is_match: bool) -> &FeedbackLadder {
        if is_match { &self.matched } else { &self.missed }
    }
}

impl Default for FeedbackProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
