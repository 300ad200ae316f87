//! Text dump of shaped PMT waveforms, one file per cell side.
//!
//! Layout: `TileCalTBpulse_Run{run}/Ev{event}/cell{index}_{side}.dat`, each file
//! a `#` label line followed by one sample per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tilecal_core::{Cell, Side};

use crate::error::PersistError;
use crate::format::pulse_dir_name;

/// Directory holding the waveforms of one event.
pub fn event_dir(base: &Path, run: u32, event: u64) -> PathBuf {
    base.join(pulse_dir_name(run)).join(format!("Ev{event}"))
}

/// Write one side's waveform. Returns the file path.
pub fn write_pulse(
    dir: &Path,
    index: usize,
    cell: &Cell,
    side: Side,
    waveform: &[f64],
) -> Result<PathBuf, PersistError> {
    std::fs::create_dir_all(dir).map_err(|e| PersistError::io(dir, e))?;
    let path = dir.join(format!("cell{index}_{}.dat", side.label()));
    let file = File::create(&path).map_err(|e| PersistError::io(&path, e))?;

    let mut out = BufWriter::new(file);
    writeln!(out, "# {cell} side {}", side.label()).map_err(|e| PersistError::io(&path, e))?;
    for sample in waveform {
        writeln!(out, "{sample}").map_err(|e| PersistError::io(&path, e))?;
    }
    out.flush().map_err(|e| PersistError::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecal_core::CellLut;

    #[test]
    fn test_event_dir_layout() {
        let dir = event_dir(Path::new("out"), 4, 17);
        assert_eq!(dir, Path::new("out/TileCalTBpulse_Run4/Ev17"));
    }

    #[test]
    fn test_write_pulse_file() {
        let base = std::env::temp_dir().join(format!("tilecal-pulse-{}", std::process::id()));
        let dir = event_dir(&base, 0, 1);
        let lut = CellLut::new();
        let cell = lut.cell(97).expect("cell exists");
        let path = write_pulse(&dir, 97, cell, Side::Far, &[0.0, 0.5, 1.0]).expect("written");
        assert!(path.ends_with("cell97_far.dat"));

        let text = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# extended module cell B13 side far");
        assert_eq!(&lines[1..], &["0", "0.5", "1"]);
        let _ = std::fs::remove_dir_all(&base);
    }
}
