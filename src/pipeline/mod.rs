pub mod stage1_parse;
pub mod stage2_rank;
pub mod stage3_feedback;
pub mod stage4_overlay;
pub mod stage5_report;
