//! Tiny-ImageNet ingestion.
//!
//! Indexes an extracted `tiny-imagenet-200` archive into train and validation
//! splits of `(image, label, metadata)` examples.

pub mod config;
pub mod core;
pub mod error;
pub mod infrastructure;

pub use config::{IngestConfig, LoggingConfig};
pub use crate::core::dataset::{
    generate_examples, ClassImageSet, DatasetBuilder, DatasetInfo, DatasetSplit, Example,
    ExampleMetadata, Examples, LabelIndex, SplitGenerator, SplitIndex, SplitIndexer, WordList,
};
pub use error::{IngestError, IngestResult, LookupTable};
