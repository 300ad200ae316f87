use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tilecal_core::EventRow;

use crate::error::PersistError;
use crate::format::{output_file_name, RunHeader};

/// Writes one run as JSON lines: a header line, then one row per event.
pub struct RowWriter<W: Write> {
    writer: W,
    rows: usize,
}

impl<W: Write> RowWriter<W> {
    /// Start a run file by writing its header line.
    pub fn new(mut writer: W, run: u32) -> Result<Self, PersistError> {
        serde_json::to_writer(&mut writer, &RunHeader::new(run)).map_err(|e| {
            PersistError::Json {
                line: 1,
                message: e.to_string(),
            }
        })?;
        writer.write_all(b"\n")?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row(&mut self, row: &EventRow) -> Result<(), PersistError> {
        serde_json::to_writer(&mut self.writer, row).map_err(|e| PersistError::Json {
            line: self.rows + 2,
            message: e.to_string(),
        })?;
        self.writer.write_all(b"\n")?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W, PersistError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Write a whole run into `dir`, rows in the given order. Returns the file path.
pub fn save_run<'a>(
    dir: &Path,
    run: u32,
    rows: impl IntoIterator<Item = &'a EventRow>,
) -> Result<PathBuf, PersistError> {
    std::fs::create_dir_all(dir).map_err(|e| PersistError::io(dir, e))?;
    let path = dir.join(output_file_name(run));
    let file = File::create(&path).map_err(|e| PersistError::io(&path, e))?;

    let mut writer = RowWriter::new(BufWriter::new(file), run)?;
    for row in rows {
        writer.write_row(row)?;
    }
    let count = writer.rows_written();
    writer.finish()?;

    log::info!("Wrote {count} events to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pdg: i32) -> EventRow {
        EventRow {
            leakage: 0.0,
            energy_deposit: 10.0,
            signal_sum: 5.0,
            cell_energy: vec![1.0, 0.0],
            cell_signal: vec![5.0, 0.0],
            pdg,
            beam_energy: 1_000.0,
        }
    }

    #[test]
    fn test_header_then_rows() {
        let mut writer = RowWriter::new(Vec::new(), 7).expect("header");
        writer.write_row(&row(11)).expect("row");
        writer.write_row(&row(-11)).expect("row");
        let bytes = writer.finish().expect("flush");
        let text = String::from_utf8(bytes).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let header: RunHeader = serde_json::from_str(lines[0]).expect("header parses");
        assert_eq!(header, RunHeader::new(7));
        assert!(lines[1].starts_with("{\"ELeak\":"));
        assert!(lines[2].contains("\"PDG\":-11"));
    }

    #[test]
    fn test_save_run_file_name() {
        let dir = std::env::temp_dir().join(format!("tilecal-save-{}", std::process::id()));
        let rows = [row(22)];
        let path = save_run(&dir, 3, &rows).expect("saved");
        assert!(path.ends_with("TileCalTBout_Run3.jsonl"));
        let text = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(text.lines().count(), 2);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
