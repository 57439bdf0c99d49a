use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::dataset::Example;
use crate::error::{IngestError, IngestResult};

fn json_error(path: &Path, source: serde_json::Error) -> IngestError {
    IngestError::Json {
        path: path.to_path_buf(),
        source,
    }
}

/// Stream examples into a JSON Lines file, one record per line.
/// The parent directory is created if missing and an existing file is truncated.
///
/// # Arguments
/// * `path` - Destination `.jsonl` file
/// * `examples` - Records in output order, consumed lazily
///
/// # Returns
/// * `Ok(count)` with the number of records written
/// * `Err(IngestError)` if the file cannot be written or a record fails to serialize
pub fn write_examples_jsonl<I>(path: &Path, examples: I) -> IngestResult<usize>
where
    I: IntoIterator<Item = Example>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IngestError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| IngestError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for example in examples {
        serde_json::to_writer(&mut writer, &example).map_err(|e| json_error(path, e))?;
        writer
            .write_all(b"\n")
            .map_err(|e| IngestError::io(path, e))?;
        count += 1;
    }
    writer.flush().map_err(|e| IngestError::io(path, e))?;

    info!("Wrote {} examples to {:?}", count, path);
    Ok(count)
}

/// Write any serializable value as pretty JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> IngestResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IngestError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| json_error(path, e))?;
    fs::write(path, json).map_err(|e| IngestError::io(path, e))?;
    info!("Wrote {:?}", path);
    Ok(())
}

/// `<output>/<split>.jsonl`
pub fn split_output_path(output_dir: &Path, split_name: &str) -> PathBuf {
    output_dir.join(format!("{}.jsonl", split_name))
}
