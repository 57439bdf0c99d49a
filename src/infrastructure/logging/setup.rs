use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;
use crate::config::LoggingConfig;
use crate::error::{IngestError, IngestResult};

/// Timestamped log file name, e.g. `tiny_imagenet_ingest_20261019_142501.log`
pub fn log_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("tiny_imagenet_ingest_{}.log", now.format("%Y%m%d_%H%M%S"))
}

fn create_log_file(log_dir: &Path) -> IngestResult<(PathBuf, fs::File)> {
    fs::create_dir_all(log_dir).map_err(|e| IngestError::io(log_dir, e))?;

    let log_path = log_dir.join(log_file_name(chrono::Local::now()));
    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| IngestError::io(&log_path, e))?;

    Ok((log_path, file))
}

/// Install the global subscriber: stdout always, plus a log file when `log_dir` is set.
///
/// Returns the log file path if one was created.
pub fn setup_logging(config: &LoggingConfig) -> IngestResult<Option<PathBuf>> {
    let (log_path, file_layer) = match &config.log_dir {
        Some(dir) => {
            let (path, file) = create_log_file(dir)?;
            let layer = fmt::layer()
                .event_format(BracketedFormatter)
                .with_writer(Mutex::new(file))
                .with_ansi(false);
            (Some(path), Some(layer))
        }
        None => (None, None),
    };

    let stdout_layer = fmt::layer()
        .event_format(BracketedFormatter)
        .with_writer(std::io::stdout);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| IngestError::Config(format!("failed to install logger: {}", e)))?;

    info!("Starting Tiny-ImageNet ingest");
    if let Some(path) = &log_path {
        info!("Log file created at: {:?}", path);
    }

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_file_name() {
        let now = chrono::Local
            .with_ymd_and_hms(2026, 10, 19, 14, 25, 1)
            .unwrap();
        assert_eq!(log_file_name(now), "tiny_imagenet_ingest_20261019_142501.log");
    }

    #[test]
    fn test_create_log_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let (path, _file) = create_log_file(&log_dir).unwrap();
        assert!(path.exists());
        assert_eq!(path.parent(), Some(log_dir.as_path()));
    }
}
