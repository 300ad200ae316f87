use std::path::PathBuf;

/// Errors that can occur while reading step streams or writing run output.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("malformed JSON on line {line}: {message}")]
    Json { line: usize, message: String },

    #[error("run file has no header line")]
    MissingHeader,

    #[error("unsupported row format version {0}")]
    UnsupportedVersion(u32),

    #[error("column mismatch: expected {expected:?}, found {found:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistError::Io {
            path: path.into(),
            source,
        }
    }
}
