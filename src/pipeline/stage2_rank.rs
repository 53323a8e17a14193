use std::cmp::Ordering;

use crate::error::ScoreError;
use crate::model::labels::{Label, LabelSet, Probabilities};
use crate::model::scores::{RankedResult, ScoredLabel};

pub const RANK_DEPTH: usize = 3;

pub fn rank(probabilities: &[f32], labels: &[Label]) -> Result<RankedResult, ScoreError> {
    if probabilities.len() != labels.len() {
        return Err(ScoreError::InvalidInput {
            probabilities: probabilities.len(),
            labels: labels.len(),
        });
    }
    Ok(rank_pairs(labels, probabilities))
}

impl LabelSet {
    pub fn rank(&self, probabilities: &Probabilities) -> RankedResult {
        rank_pairs(self.labels(), probabilities.as_slice())
    }
}

fn rank_pairs(labels: &[Label], probabilities: &[f32]) -> RankedResult {
    let mut scored = labels
        .iter()
        .zip(probabilities)
        .map(|(&label, &score)| ScoredLabel { label, score })
        .collect::<Vec<_>>();
    // sort_by is stable: equal scores keep channel order
    scored.sort_by(|a, b| descending(a.score, b.score));
    scored.truncate(RANK_DEPTH);
    RankedResult { entries: scored }
}

/// Highest first. Every NaN, whatever its sign bit, ranks above all numbers.
fn descending(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.total_cmp(&a),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_rank.rs"]
mod tests;
