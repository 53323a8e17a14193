use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::ScoreError;
use crate::model::stats::StatsBook;

pub fn load_stats(path: &Path) -> Result<StatsBook, ScoreError> {
    if !path.exists() {
        crate::info!(path = %path.display(), "stats file not found, starting empty");
        return Ok(StatsBook::new());
    }
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub fn save_stats(path: &Path, book: &StatsBook) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, book)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}
