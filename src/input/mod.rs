use std::path::{Path, PathBuf};

pub mod stats_store;

use crate::error::ScoreError;
use crate::pipeline::stage1_parse::parse_serialized_output;

#[derive(Debug, Clone, PartialEq)]
pub enum ProbabilitySource {
    Values(Vec<f32>),
    Serialized(String),
    File(PathBuf),
}

pub fn load_probabilities(source: &ProbabilitySource) -> Result<Vec<f32>, ScoreError> {
    match source {
        ProbabilitySource::Values(values) => Ok(values.clone()),
        ProbabilitySource::Serialized(text) => Ok(parse_serialized_output(text)),
        ProbabilitySource::File(path) => read_serialized_file(path),
    }
}

/// Reads the first non-blank line of `path` as a serialized output vector.
fn read_serialized_file(path: &Path) -> Result<Vec<f32>, ScoreError> {
    let content = std::fs::read_to_string(path)?;
    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    crate::debug!(path = %path.display(), line, "read serialized model output");
    Ok(parse_serialized_output(line))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
