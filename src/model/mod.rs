pub mod feedback;
pub mod labels;
pub mod overlay;
pub mod round;
pub mod scores;
pub mod stats;
pub mod thresholds;
