use crate::error::PersistError;
use crate::format::{expected_columns, RunHeader, FORMAT_VERSION};

/// Validate a run-file header and return any compatibility warnings.
///
/// Version and column mismatches are fatal. A run number different from the
/// one the caller expects is only a warning.
pub fn validate_header(
    header: &RunHeader,
    expected_run: Option<u32>,
) -> Result<Vec<String>, PersistError> {
    if header.format_version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(header.format_version));
    }

    let expected = expected_columns();
    if header.columns != expected {
        return Err(PersistError::ColumnMismatch {
            expected,
            found: header.columns.clone(),
        });
    }

    let mut warnings = Vec::new();
    if let Some(run) = expected_run {
        if header.run != run {
            warnings.push(format!(
                "file holds run {} but run {run} was requested",
                header.run
            ));
        }
    }

    Ok(warnings)
}
