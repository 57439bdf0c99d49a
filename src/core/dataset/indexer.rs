//! Split indexers.
//!
//! Both variants produce a [`SplitIndex`]: class identifier to the images of
//! that class, in insertion order. Train scans `train/<id>/images`; validation
//! reads the flat `val_annotations.txt` listing.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

use super::label_index::LabelIndex;
use super::split::DatasetSplit;
use super::word_list::WordList;
use crate::config::IngestConfig;
use crate::core::operations::{list_folders, list_images, read_text_file};
use crate::error::{IngestError, IngestResult};

/// Images of one class within one split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassImageSet {
    pub images: Vec<PathBuf>,
    /// Dense label id from the label index
    pub id: usize,
    /// Human-readable name from the word list
    pub name: String,
}

/// Per-class image sets, iterated in insertion order
pub type SplitIndex = IndexMap<String, ClassImageSet>;

/// One row of `val_annotations.txt`; bounding-box columns are ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValAnnotation {
    pub file_name: String,
    pub class_id: String,
}

/// Parse one annotation line, numbered from 1.
///
/// Returns `Ok(None)` for a blank line. Any other line needs at least two
/// whitespace-separated fields: the image file name, then the class id.
pub fn parse_val_annotation_line(
    line: &str,
    line_number: usize,
    source: &Path,
) -> IngestResult<Option<ValAnnotation>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(file_name), Some(class_id)) => Ok(Some(ValAnnotation {
            file_name: file_name.to_string(),
            class_id: class_id.to_string(),
        })),
        _ => Err(IngestError::Format {
            path: source.to_path_buf(),
            line_number,
            line: line.to_string(),
            reason: "expected at least 2 whitespace-separated fields, found 1".to_string(),
        }),
    }
}

/// Parse every annotation row, skipping blank lines
pub fn parse_val_annotations(content: &str, source: &Path) -> IngestResult<Vec<ValAnnotation>> {
    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if let Some(row) = parse_val_annotation_line(line, idx + 1, source)? {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Builds per-split indices from an extracted archive
pub struct SplitIndexer<'a> {
    config: &'a IngestConfig,
    labels: &'a LabelIndex,
}

impl<'a> SplitIndexer<'a> {
    pub fn new(config: &'a IngestConfig, labels: &'a LabelIndex) -> Self {
        Self { config, labels }
    }

    fn class_image_set(
        &self,
        class_id: &str,
        words: &WordList,
        images: Vec<PathBuf>,
    ) -> IngestResult<ClassImageSet> {
        Ok(ClassImageSet {
            images,
            id: self.labels.index_of(class_id)?,
            name: words.name_of(class_id)?.to_string(),
        })
    }

    /// Index `train/<class>/images/*` for every class directory
    pub fn index_train(&self) -> IngestResult<SplitIndex> {
        let _span = info_span!("index_train").entered();

        let train_path = self.config.train_path();
        let class_dirs = list_folders(&train_path)?;
        let words = WordList::from_file(&self.config.word_list_path())?;

        let mut index = SplitIndex::with_capacity(class_dirs.len());
        for class_id in class_dirs {
            let images_dir = train_path.join(&class_id).join(&self.config.images_dir);
            let images = list_images(&images_dir, &self.config.image_extensions)?;
            let set = self.class_image_set(&class_id, &words, images)?;
            debug!(
                "Class {} (id {}, {:?}): {} images",
                class_id,
                set.id,
                set.name,
                set.images.len()
            );
            index.insert(class_id, set);
        }

        info!(
            "Indexed {} train classes from {:?}",
            index.len(),
            train_path
        );
        Ok(index)
    }

    /// Index the validation split from `val/val_annotations.txt`.
    ///
    /// Lines are handled one at a time: each row is parsed, checked for a
    /// repeated file name, then its class is looked up. Classes appear in
    /// first-seen order and images keep annotation order.
    pub fn index_validation(&self) -> IngestResult<SplitIndex> {
        let _span = info_span!("index_validation").entered();

        let words = WordList::from_file(&self.config.word_list_path())?;
        let annotations_path = self.config.val_annotations_path();
        let content = read_text_file(&annotations_path)?;
        let images_dir = self.config.val_images_path();

        let mut index = SplitIndex::new();
        let mut seen = HashSet::new();
        for (idx, line) in content.lines().enumerate() {
            let Some(row) = parse_val_annotation_line(line, idx + 1, &annotations_path)? else {
                continue;
            };
            if !seen.insert(row.file_name.clone()) {
                return Err(IngestError::DuplicateImage {
                    split: DatasetSplit::Validation.to_string(),
                    file_name: row.file_name,
                });
            }

            let set = match index.entry(row.class_id) {
                indexmap::map::Entry::Occupied(entry) => entry.into_mut(),
                indexmap::map::Entry::Vacant(entry) => {
                    let set = self.class_image_set(entry.key(), &words, Vec::new())?;
                    entry.insert(set)
                }
            };
            set.images.push(images_dir.join(&row.file_name));
        }

        info!(
            "Indexed {} validation images across {} classes from {:?}",
            seen.len(),
            index.len(),
            annotations_path
        );
        Ok(index)
    }

    pub fn index(&self, split: DatasetSplit) -> IngestResult<SplitIndex> {
        match split {
            DatasetSplit::Train => self.index_train(),
            DatasetSplit::Validation => self.index_validation(),
        }
    }
}
