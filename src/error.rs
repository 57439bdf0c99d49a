use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Which lookup table a class identifier was missing from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    /// The tab-separated `words.txt` mapping
    WordList,
    /// The ordered `wnids.txt` identifier list
    LabelIndex,
}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupTable::WordList => write!(f, "word list"),
            LookupTable::LabelIndex => write!(f, "label index"),
        }
    }
}

/// Errors raised while indexing the dataset. None of them are recovered:
/// the first one aborts the whole run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("class identifier '{class_id}' not found in {table}")]
    MissingKey {
        class_id: String,
        table: LookupTable,
    },

    #[error("malformed line {line_number} in {path:?}: {reason} (line: {line:?})")]
    Format {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("image '{file_name}' listed more than once in the {split} split")]
    DuplicateImage { split: String, file_name: String },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IngestError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn missing(class_id: &str, table: LookupTable) -> Self {
        IngestError::MissingKey {
            class_id: class_id.to_string(),
            table,
        }
    }
}
