//! Removal of a theme's build output.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, ThemeError};

/// Remove `dir` and everything below it, deepest entries first.
///
/// Returns the number of files removed. A missing `dir` is not an error.
/// If `dir` is a regular file it is removed on its own.
pub fn clean_dir(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    if dir.is_file() {
        fs::remove_file(dir).map_err(|e| ThemeError::io(dir, "Failed to remove file", e))?;
        return Ok(1);
    }

    let mut removed = 0;

    for entry in WalkDir::new(dir).contents_first(true) {
        let entry = entry.map_err(|e| ThemeError::io(dir, "Failed to walk build directory", e))?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            fs::remove_dir(path)
                .map_err(|e| ThemeError::io(path, "Failed to remove directory", e))?;
        } else {
            fs::remove_file(path).map_err(|e| ThemeError::io(path, "Failed to remove file", e))?;
            removed += 1;
        }
    }

    Ok(removed)
}
