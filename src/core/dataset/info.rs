use indexmap::IndexMap;
use serde::Serialize;

use super::label_index::LabelIndex;
use super::split::DatasetSplit;

pub const DATASET_NAME: &str = "tiny_imagenet";
pub const DATASET_VERSION: &str = "0.2.0";

const DESCRIPTION: &str = "Tiny ImageNet Challenge is a similar challenge as ImageNet with a \
smaller dataset but less image classes. It contains 200 image classes, a training dataset of \
100,000 images, a validation dataset of 10,000 images, and a test dataset of 10,000 images. \
All images are of size 64x64.";

const CITATION: &str = "@article{tiny-imagenet,\n  author = {Li, Fei-Fei and Karpathy, Andrej and Johnson, Justin}\n}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feature {
    Image {
        shape: [usize; 3],
        encoding_format: String,
    },
    Text,
    ClassLabel {
        num_classes: usize,
        names: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitInfo {
    pub name: DatasetSplit,
    pub num_examples: usize,
}

/// Dataset-level description written next to the split files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub source_url: String,
    pub citation: String,
    pub features: IndexMap<String, Feature>,
    pub supervised_keys: (String, String),
    pub splits: Vec<SplitInfo>,
}

impl DatasetInfo {
    /// Describe the dataset for a given label index. Class names are the
    /// identifiers in dense-id order.
    pub fn new(labels: &LabelIndex, source_url: &str) -> Self {
        let mut features = IndexMap::new();
        features.insert(
            "image".to_string(),
            Feature::Image {
                shape: [64, 64, 3],
                encoding_format: "jpeg".to_string(),
            },
        );
        features.insert("id".to_string(), Feature::Text);
        features.insert(
            "label".to_string(),
            Feature::ClassLabel {
                num_classes: labels.len(),
                names: labels.identifiers().to_vec(),
            },
        );
        features.insert("metadata.label_name".to_string(), Feature::Text);

        Self {
            name: DATASET_NAME.to_string(),
            version: DATASET_VERSION.to_string(),
            description: DESCRIPTION.to_string(),
            source_url: source_url.to_string(),
            citation: CITATION.to_string(),
            features,
            supervised_keys: ("image".to_string(), "label".to_string()),
            splits: Vec::new(),
        }
    }

    pub fn add_split(&mut self, name: DatasetSplit, num_examples: usize) {
        self.splits.push(SplitInfo { name, num_examples });
    }
}
