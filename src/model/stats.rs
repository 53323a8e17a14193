use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::labels::{Label, LabelSet};
use crate::model::round::RoundOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiStats {
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub successes: u32,
}

impl EmojiStats {
    pub fn success_rate(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        (self.successes as f32 / self.attempts as f32 * 100.0) as u32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsBook {
    per_label: BTreeMap<Label, EmojiStats>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, label: Label) -> EmojiStats {
        self.per_label.get(&label).copied().unwrap_or_default()
    }

    /// Counts a round as played; called when the capture fires, before scoring.
    pub fn record_attempt(&mut self, label: Label) {
        let entry = self.per_label.entry(label).or_default();
        entry.attempts = entry.attempts.saturating_add(1);
    }

    /// Counts a success when the best-ranked label is the round's target.
    /// Attempts are untouched.
    pub fn record_outcome(&mut self, outcome: &RoundOutcome) -> bool {
        let hit = outcome
            .ranked
            .top()
            .is_some_and(|top| top.label == outcome.target);
        if hit {
            let entry = self.per_label.entry(outcome.target).or_default();
            entry.successes = entry.successes.saturating_add(1);
        }
        hit
    }

    pub fn rows(&self, labels: &LabelSet) -> Vec<(Label, EmojiStats)> {
        labels
            .labels()
            .iter()
            .map(|&label| (label, self.get(label)))
            .collect()
    }

    pub fn total(&self) -> EmojiStats {
        self.per_label
            .values()
            .fold(EmojiStats::default(), |acc, s| EmojiStats {
                attempts: acc.attempts.saturating_add(s.attempts),
                successes: acc.successes.saturating_add(s.successes),
            })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/stats.rs"]
mod tests;
