use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid input: {probabilities} probabilities for {labels} labels")]
    InvalidInput { probabilities: usize, labels: usize },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("unknown label: {0}")]
    UnknownLabel(String),
    #[error("duplicate label in label set: {0}")]
    DuplicateLabel(String),
    #[error("invalid detection: expected 4 box coordinates, got {0}")]
    InvalidDetection(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
