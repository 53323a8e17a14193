use serde::Serialize;

use crate::model::labels::Label;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredLabel {
    pub label: Label,
    pub score: f32,
}

impl ScoredLabel {
    /// Whole percent shown next to the glyph, truncated toward zero.
    pub fn percent(&self) -> i32 {
        (self.score * 100.0) as i32
    }
}

/// Top entries of one inference, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    pub entries: Vec<ScoredLabel>,
}

impl RankedResult {
    pub fn top(&self) -> Option<&ScoredLabel> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredLabel> {
        self.entries.iter()
    }
}
