use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::indexer::{ClassImageSet, SplitIndex};
use crate::core::operations::basename;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleMetadata {
    pub label_name: String,
}

/// One output record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// `<class id>/<image basename>`, unique within a split
    pub key: String,
    pub image: PathBuf,
    /// Class identifier as text
    pub id: String,
    /// Dense label id
    pub label: usize,
    pub metadata: ExampleMetadata,
}

impl Example {
    fn new(class_id: &str, set: &ClassImageSet, image: &Path) -> Self {
        Self {
            key: format!("{}/{}", class_id, basename(image)),
            image: image.to_path_buf(),
            id: class_id.to_string(),
            label: set.id,
            metadata: ExampleMetadata {
                label_name: set.name.clone(),
            },
        }
    }
}

/// Lazy, single-pass stream of examples over a built [`SplitIndex`].
///
/// Classes are visited in index order and images in list order.
pub struct Examples<'a> {
    classes: indexmap::map::Iter<'a, String, ClassImageSet>,
    current: Option<(&'a String, &'a ClassImageSet, std::slice::Iter<'a, PathBuf>)>,
}

impl<'a> Iterator for Examples<'a> {
    type Item = Example;

    fn next(&mut self) -> Option<Example> {
        loop {
            if let Some((class_id, set, images)) = &mut self.current {
                if let Some(image) = images.next() {
                    return Some(Example::new(class_id.as_str(), set, image));
                }
            }

            let (class_id, set) = self.classes.next()?;
            self.current = Some((class_id, set, set.images.iter()));
        }
    }
}

/// Start a fresh example stream over `index`
pub fn generate_examples(index: &SplitIndex) -> Examples<'_> {
    Examples {
        classes: index.iter(),
        current: None,
    }
}

/// Total number of images across all classes
pub fn count_examples(index: &SplitIndex) -> usize {
    index.values().map(|set| set.images.len()).sum()
}
