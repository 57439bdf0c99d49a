use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration for the ingest binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,

    /// When set, a timestamped log file is written into this directory
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Filter directive for our crate at the configured level, third-party crates at warn
    pub fn filter_directive(&self) -> String {
        format!("warn,tiny_imagenet_ingest={}", self.level)
    }
}
