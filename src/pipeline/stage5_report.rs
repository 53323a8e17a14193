use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ScoreError;
use crate::model::round::RoundOutcome;
use crate::report::json::render_round_json;
use crate::report::text::render_round_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render_round(outcome: &RoundOutcome, format: ReportFormat) -> Result<String, ScoreError> {
    match format {
        ReportFormat::Text => Ok(render_round_text(outcome)),
        ReportFormat::Json => render_round_json(outcome),
    }
}

/// Writes `round.txt` and `round.json` into `out_dir`, creating it if needed.
pub fn write_reports(outcome: &RoundOutcome, out_dir: &Path) -> Result<(), ScoreError> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join("round.txt");
    write_text(&report_path, &render_round_text(outcome))?;

    let summary_path = out_dir.join("round.json");
    write_text(&summary_path, &render_round_json(outcome)?)?;

    crate::info!(out_dir = %out_dir.display(), "round reports written");
    Ok(())
}

pub(crate) fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
