mod builder;
mod indexer;
mod info;
mod label_index;
mod records;
mod split;
mod word_list;

pub use builder::{DatasetBuilder, SplitGenerator};
pub use indexer::{
    parse_val_annotation_line, parse_val_annotations, ClassImageSet, SplitIndex, SplitIndexer,
    ValAnnotation,
};
pub use info::{DatasetInfo, Feature, SplitInfo, DATASET_NAME, DATASET_VERSION};
pub use label_index::LabelIndex;
pub use records::{count_examples, generate_examples, Example, ExampleMetadata, Examples};
pub use split::DatasetSplit;
pub use word_list::WordList;
