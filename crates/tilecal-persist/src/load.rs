use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tilecal_core::EventRow;

use crate::compat;
use crate::error::PersistError;
use crate::format::RunHeader;

/// A parsed run file.
pub struct RunData {
    pub header: RunHeader,
    pub rows: Vec<EventRow>,
    /// Compatibility warnings (e.g., run number mismatch).
    pub warnings: Vec<String>,
}

/// Parse a run file from a reader.
pub fn load_run<R: BufRead>(
    reader: R,
    expected_run: Option<u32>,
) -> Result<RunData, PersistError> {
    let mut lines = reader.lines().enumerate();

    let header_line = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(PersistError::MissingHeader),
        }
    };
    let header: RunHeader = serde_json::from_str(&header_line).map_err(|e| PersistError::Json {
        line: 1,
        message: e.to_string(),
    })?;
    let warnings = compat::validate_header(&header, expected_run)?;
    for warning in &warnings {
        log::warn!("{warning}");
    }

    let mut rows = Vec::new();
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = serde_json::from_str(&line).map_err(|e| PersistError::Json {
            line: index + 1,
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    Ok(RunData {
        header,
        rows,
        warnings,
    })
}

/// Read a run file from disk.
pub fn load_run_file(path: &Path, expected_run: Option<u32>) -> Result<RunData, PersistError> {
    let file = File::open(path).map_err(|e| PersistError::io(path, e))?;
    load_run(BufReader::new(file), expected_run)
}
