pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::ScoreError;
pub use model::feedback::FeedbackTier;
pub use model::labels::{LABEL_COUNT, Label, LabelSet, Probabilities};
pub use model::round::RoundOutcome;
pub use model::scores::{RankedResult, ScoredLabel};
pub use pipeline::stage1_parse::{format_serialized_output, parse_serialized_output};
pub use pipeline::stage2_rank::rank;
pub use pipeline::stage3_feedback::{evaluate_round, feedback, score_probabilities};
