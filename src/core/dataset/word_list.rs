use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::core::operations::read_text_file;
use crate::error::{IngestError, IngestResult, LookupTable};

/// Class identifier to human-readable name, parsed from `words.txt`.
///
/// The file covers far more identifiers than the dataset uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    names: HashMap<String, String>,
}

impl WordList {
    /// Parse tab-separated `<id>\t<name>` lines. Blank lines are skipped; any
    /// other line must split into exactly two fields. Later duplicates win.
    pub fn parse(content: &str, source: &Path) -> IngestResult<Self> {
        let mut names = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 2 {
                return Err(IngestError::Format {
                    path: source.to_path_buf(),
                    line_number: idx + 1,
                    line: line.to_string(),
                    reason: format!(
                        "expected 2 tab-separated fields, found {}",
                        fields.len()
                    ),
                });
            }

            names.insert(fields[0].to_string(), fields[1].to_string());
        }

        Ok(Self { names })
    }

    pub fn from_file(path: &Path) -> IngestResult<Self> {
        let content = read_text_file(path)?;
        let words = Self::parse(&content, path)?;
        info!("Loaded {} label names from {:?}", words.len(), path);
        Ok(words)
    }

    pub fn name_of(&self, class_id: &str) -> IngestResult<&str> {
        self.names
            .get(class_id)
            .map(String::as_str)
            .ok_or_else(|| IngestError::missing(class_id, LookupTable::WordList))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
