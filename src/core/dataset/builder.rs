use tracing::{info, warn};

use super::indexer::{SplitIndex, SplitIndexer};
use super::info::DatasetInfo;
use super::label_index::LabelIndex;
use super::records::{count_examples, generate_examples, Examples};
use super::split::DatasetSplit;
use crate::config::IngestConfig;
use crate::error::IngestResult;

/// A named split and its index, ready for record generation
#[derive(Debug, Clone)]
pub struct SplitGenerator {
    pub split: DatasetSplit,
    pub index: SplitIndex,
}

impl SplitGenerator {
    /// Fresh example stream; call again to regenerate
    pub fn examples(&self) -> Examples<'_> {
        generate_examples(&self.index)
    }

    pub fn num_examples(&self) -> usize {
        count_examples(&self.index)
    }
}

/// Drives indexing of an extracted Tiny-ImageNet archive
pub struct DatasetBuilder {
    config: IngestConfig,
}

impl DatasetBuilder {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Read the class-id list; warns when its size differs from the expected class count
    pub fn label_index(&self) -> IngestResult<LabelIndex> {
        let labels = LabelIndex::from_file(&self.config.label_list_path())?;
        if labels.len() != self.config.expected_num_classes {
            warn!(
                "Label list has {} identifiers, expected {}",
                labels.len(),
                self.config.expected_num_classes
            );
        }
        Ok(labels)
    }

    /// Build the label index once, then index each requested split in order
    pub fn split_generators(
        &self,
        splits: &[DatasetSplit],
    ) -> IngestResult<(LabelIndex, Vec<SplitGenerator>)> {
        self.config.validate()?;
        info!("Indexing dataset at {:?}", self.config.dataset_folder());

        let labels = self.label_index()?;
        let indexer = SplitIndexer::new(&self.config, &labels);

        let mut generators = Vec::with_capacity(splits.len());
        for &split in splits {
            let index = indexer.index(split)?;
            let generator = SplitGenerator { split, index };
            info!(
                "Split {}: {} classes, {} examples",
                split,
                generator.index.len(),
                generator.num_examples()
            );
            generators.push(generator);
        }

        Ok((labels, generators))
    }

    /// Dataset description including per-split example counts
    pub fn info(&self, labels: &LabelIndex, generators: &[SplitGenerator]) -> DatasetInfo {
        let mut info = DatasetInfo::new(labels, &self.config.source_url);
        for generator in generators {
            info.add_split(generator.split, generator.num_examples());
        }
        info
    }
}
