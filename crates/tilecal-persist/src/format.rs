use serde::{Deserialize, Serialize};
use tilecal_core::record::{ROW_COLUMNS, ROW_FORMAT_VERSION};

/// Current run-file format version.
pub const FORMAT_VERSION: u32 = ROW_FORMAT_VERSION;

/// First line of every run output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunHeader {
    pub format_version: u32,
    pub run: u32,
    pub columns: Vec<String>,
}

impl RunHeader {
    pub fn new(run: u32) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            run,
            columns: expected_columns(),
        }
    }
}

/// Column names in output order, owned.
pub fn expected_columns() -> Vec<String> {
    ROW_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Name of the per-event output file of a run.
pub fn output_file_name(run: u32) -> String {
    format!("TileCalTBout_Run{run}.jsonl")
}

/// Name of the pulse-dump directory of a run.
pub fn pulse_dir_name(run: u32) -> String {
    format!("TileCalTBpulse_Run{run}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(output_file_name(3), "TileCalTBout_Run3.jsonl");
        assert_eq!(pulse_dir_name(12), "TileCalTBpulse_Run12");
    }

    #[test]
    fn test_header_carries_columns() {
        let header = RunHeader::new(0);
        assert_eq!(header.format_version, 1);
        assert_eq!(header.columns.len(), 7);
        assert_eq!(header.columns[0], "ELeak");
        assert_eq!(header.columns[6], "EBeam");
    }
}
