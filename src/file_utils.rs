use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the entries of `dir` whose file name ends with `suffix`.
///
/// Paths are returned in directory listing order, joined onto `dir`. Names
/// are matched on their raw bytes, so non-UTF-8 names are listed too.
pub fn list_images(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let image_files = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .as_encoded_bytes()
                .ends_with(suffix.as_bytes())
        })
        .map(|entry| dir.join(entry.file_name()))
        .collect();

    Ok(image_files)
}
