use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{IngestError, IngestResult};

/// Ingestion configuration containing every path and constant the indexers use
///
/// Nothing here is global: the builder receives a config at construction time,
/// so tests can point it at a fixture directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Directory the archive was extracted into
    pub extracted_path: PathBuf,

    /// Remote archive location, recorded in the dataset info
    pub source_url: String,

    /// Top-level folder inside the archive
    pub extracted_folder_name: String,

    /// Newline-separated class identifiers; line order defines the dense id
    pub label_list_file: String,

    /// Tab-separated identifier to human-readable name mapping
    pub word_list_file: String,

    pub train_dir: String,
    pub val_dir: String,
    pub val_annotations_file: String,
    pub images_dir: String,

    /// Accepted image extensions, matched case-insensitively (`jpg`, `.JPG`, ...)
    pub image_extensions: Vec<String>,

    /// Number of classes the label list is expected to contain
    pub expected_num_classes: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            extracted_path: PathBuf::from("."),
            source_url: "http://cs231n.stanford.edu/tiny-imagenet-200.zip".to_string(),
            extracted_folder_name: "tiny-imagenet-200".to_string(),
            label_list_file: "wnids.txt".to_string(),
            word_list_file: "words.txt".to_string(),
            train_dir: "train".to_string(),
            val_dir: "val".to_string(),
            val_annotations_file: "val_annotations.txt".to_string(),
            images_dir: "images".to_string(),
            image_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            expected_num_classes: 200,
        }
    }
}

impl IngestConfig {
    /// Build a default config rooted at an extracted archive directory
    pub fn with_extracted_path(path: impl Into<PathBuf>) -> Self {
        Self {
            extracted_path: path.into(),
            ..Self::default()
        }
    }

    /// `<extracted>/<folder>`, or the extracted path itself when the folder name is empty
    pub fn dataset_folder(&self) -> PathBuf {
        if self.extracted_folder_name.is_empty() {
            self.extracted_path.clone()
        } else {
            self.extracted_path.join(&self.extracted_folder_name)
        }
    }

    pub fn label_list_path(&self) -> PathBuf {
        self.dataset_folder().join(&self.label_list_file)
    }

    pub fn word_list_path(&self) -> PathBuf {
        self.dataset_folder().join(&self.word_list_file)
    }

    pub fn train_path(&self) -> PathBuf {
        self.dataset_folder().join(&self.train_dir)
    }

    pub fn val_path(&self) -> PathBuf {
        self.dataset_folder().join(&self.val_dir)
    }

    pub fn val_annotations_path(&self) -> PathBuf {
        self.val_path().join(&self.val_annotations_file)
    }

    pub fn val_images_path(&self) -> PathBuf {
        self.val_path().join(&self.images_dir)
    }

    /// Reject configurations that cannot describe a usable layout
    pub fn validate(&self) -> IngestResult<()> {
        if self.image_extensions.is_empty() {
            return Err(IngestError::Config(
                "image_extensions must not be empty".to_string(),
            ));
        }
        for (field, value) in [
            ("label_list_file", &self.label_list_file),
            ("word_list_file", &self.word_list_file),
            ("train_dir", &self.train_dir),
            ("val_dir", &self.val_dir),
            ("val_annotations_file", &self.val_annotations_file),
            ("images_dir", &self.images_dir),
        ] {
            if value.is_empty() {
                return Err(IngestError::Config(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    /// Default location of the config file in the platform config directory
    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tiny-imagenet-ingest")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> IngestResult<Self> {
        info!("Loading ingest config from: {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
        let config: IngestConfig =
            serde_json::from_str(&contents).map_err(|source| IngestError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the platform config directory, falling back to defaults when no file exists
    pub fn load() -> IngestResult<Self> {
        match Self::get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                info!("No config file at {:?}. Using defaults.", path);
                Ok(Self::default())
            }
            None => {
                warn!("Could not determine config directory. Using defaults.");
                Ok(Self::default())
            }
        }
    }
}
