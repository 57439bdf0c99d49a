use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::core::operations::read_text_file;
use crate::error::{IngestError, IngestResult, LookupTable};

/// Ordered class identifiers; an identifier's position is its dense label id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelIndex {
    identifiers: Vec<String>,
    positions: HashMap<String, usize>,
}

impl LabelIndex {
    /// Split `content` on newlines, keeping order. A single trailing newline is
    /// tolerated; interior blank lines are kept as (empty) identifiers.
    pub fn parse(content: &str) -> Self {
        let identifiers: Vec<String> = content.lines().map(str::to_string).collect();

        let mut positions = HashMap::with_capacity(identifiers.len());
        for (idx, id) in identifiers.iter().enumerate() {
            if positions.contains_key(id) {
                warn!("Duplicate class identifier {:?} at line {}; keeping first", id, idx + 1);
                continue;
            }
            positions.insert(id.clone(), idx);
        }

        Self {
            identifiers,
            positions,
        }
    }

    /// Read and parse a label-list file such as `wnids.txt`
    pub fn from_file(path: &Path) -> IngestResult<Self> {
        let content = read_text_file(path)?;
        let index = Self::parse(&content);
        info!("Loaded {} class identifiers from {:?}", index.len(), path);
        Ok(index)
    }

    /// Dense id of `class_id`: the position of its first occurrence
    pub fn index_of(&self, class_id: &str) -> IngestResult<usize> {
        self.positions
            .get(class_id)
            .copied()
            .ok_or_else(|| IngestError::missing(class_id, LookupTable::LabelIndex))
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let index = LabelIndex::parse("a\nb\nc");
        assert_eq!(index.identifiers(), &["a", "b", "c"]);
        assert_eq!(index.index_of("b").unwrap(), 1);
    }

    #[test]
    fn test_trailing_newline_tolerated() {
        let index = LabelIndex::parse("a\nb\nc\n");
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_ids_are_dense_and_positional() {
        let index = LabelIndex::parse("n02\nn01\nn03\n");
        for (pos, id) in index.identifiers().iter().enumerate() {
            assert_eq!(index.index_of(id).unwrap(), pos);
        }
    }

    #[test]
    fn test_missing_identifier() {
        let index = LabelIndex::parse("a\nb");
        assert!(matches!(
            index.index_of("z"),
            Err(IngestError::MissingKey {
                table: LookupTable::LabelIndex,
                ..
            })
        ));
    }

    #[test]
    fn test_interior_blank_line_is_spurious_entry() {
        let index = LabelIndex::parse("a\n\nb\n");
        assert_eq!(index.identifiers(), &["a", "", "b"]);
        assert_eq!(index.index_of("b").unwrap(), 2);
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let index = LabelIndex::parse("a\nb\na\n");
        assert_eq!(index.len(), 3);
        assert_eq!(index.index_of("a").unwrap(), 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let index = LabelIndex::parse("a\r\nb\r\n");
        assert_eq!(index.identifiers(), &["a", "b"]);
    }
}
