use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{IngestError, IngestResult};

/// Read a whole text file, attaching the path to any I/O error
pub fn read_text_file(path: &Path) -> IngestResult<String> {
    fs::read_to_string(path).map_err(|e| IngestError::io(path, e))
}

/// Check whether a file name carries one of the accepted extensions.
///
/// Both sides are compared case-insensitively, and a leading dot on a
/// configured extension is ignored, so `"JPG"`, `".jpg"` and `"jpg"` all
/// accept `photo.JPG`.
///
/// # Arguments
/// * `file_name` - Bare file name, e.g. `val_12.JPEG`
/// * `extensions` - Accepted extensions from the config
///
/// # Returns
/// * `true` if the name ends in `.<ext>` for any configured extension
pub fn has_image_extension(file_name: &str, extensions: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    extensions.iter().any(|ext| {
        let ext = ext.trim_start_matches('.').to_lowercase();
        !ext.is_empty() && lower.ends_with(&format!(".{}", ext))
    })
}

/// Names of the immediate subdirectories of `root_dir`, sorted by name.
/// Plain files are skipped.
pub fn list_folders(root_dir: &Path) -> IngestResult<Vec<String>> {
    let entries = fs::read_dir(root_dir).map_err(|e| IngestError::io(root_dir, e))?;

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::io(root_dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    folders.sort();
    debug!("Found {} folders in {:?}", folders.len(), root_dir);
    Ok(folders)
}

/// List the image files directly inside a directory.
///
/// # Arguments
/// * `root_dir` - Directory to scan (not recursive)
/// * `extensions` - Accepted extensions, see [`has_image_extension`]
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` with full paths, sorted by file name
/// * `Err(IngestError::Io)` if the directory cannot be read
pub fn list_images(root_dir: &Path, extensions: &[String]) -> IngestResult<Vec<PathBuf>> {
    let entries = fs::read_dir(root_dir).map_err(|e| IngestError::io(root_dir, e))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::io(root_dir, e))?;
        let name = entry.file_name();
        if has_image_extension(&name.to_string_lossy(), extensions) {
            images.push(entry.path());
        }
    }

    images.sort();
    debug!("Found {} images in {:?}", images.len(), root_dir);
    Ok(images)
}

/// Final path component as text, used to build example keys
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
