/// Recursive enumeration of candidate image files
use crate::error::{CompressionError, Result};
use crate::formats::is_image_file;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk `root` recursively and return every supported image file, in a
/// stable name-sorted order. Hidden entries are skipped. The scan itself
/// never touches the files.
///
/// Fails with `DirectoryNotFound` when `root` is missing or not a
/// directory.
pub fn collect_image_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CompressionError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut image_files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    // depth 0 is the root itself, which may legitimately be dot-prefixed
    for entry in walker.filter_entry(|e| {
        e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.')
    }) {
        let entry = entry?;
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            image_files.push(entry.into_path());
        }
    }

    Ok(image_files)
}
