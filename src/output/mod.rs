// src/output/mod.rs

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::{info, warn};

use crate::flatten::OutputRecord;
use crate::ConvertError;

/// Column headers for the two report families. Which one applies is a
/// naming convention on the output base name, not something carried in
/// the records.
const GENDER_HEADER: [&str; 6] = ["StateId", "Year", "Male", "Female", "Total", "Missing"];
const BINARY_HEADER: [&str; 6] = ["StateId", "Year", "Yes", "No", "Total", "Missing"];

/// Append-mode CSV writer keyed by output base name.
///
/// Every base name gets one file under `output_dir`. The header row is
/// written exactly once, when the sink first creates the file; re-running
/// the converter, or feeding several combined reports with overlapping
/// year ranges into the same base name, appends rows without repeating
/// it. Files pre-seeded by templates keep the header the template
/// carried.
pub struct CsvSink {
    output_dir: PathBuf,
}

impl CsvSink {
    /// Create a sink rooted at `output_dir`, creating the directory if it
    /// does not exist.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self, ConvertError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Append `records` to `<output_dir>/<base_name>.csv`.
    pub fn append(&self, base_name: &str, records: &[OutputRecord]) -> Result<(), ConvertError> {
        let path = self.output_dir.join(format!("{}.csv", base_name));
        let fresh = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if fresh {
            writer.write_record(header_for(base_name))?;
        }
        for record in records {
            let mut row = vec![record.state_id.clone(), record.year.to_string()];
            row.extend(record.values.iter().cloned());
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Pick the semantic header row for an output base name.
fn header_for(base_name: &str) -> [&'static str; 6] {
    if base_name.to_lowercase().contains("gender") {
        GENDER_HEADER
    } else {
        BINARY_HEADER
    }
}

/// Copy every regular file from `templates_dir` into `output_dir`
/// verbatim, overwriting, before any generation touches the directory.
///
/// Returns the number of files copied. A missing templates directory is
/// not an error; templates are optional seed data.
pub fn copy_templates<P: AsRef<Path>, Q: AsRef<Path>>(
    templates_dir: P,
    output_dir: Q,
) -> Result<usize, ConvertError> {
    let templates_dir = templates_dir.as_ref();
    if !templates_dir.is_dir() {
        warn!(dir = %templates_dir.display(), "templates directory not found; skipping copy");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in fs::read_dir(templates_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        fs::copy(&path, output_dir.as_ref().join(entry.file_name()))?;
        copied += 1;
    }
    info!(copied, "copied template files");
    Ok(copied)
}
