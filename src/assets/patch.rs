//! Line-based rewriting of `theme.conf`.

use std::fs;
use std::path::Path;

use crate::error::{Result, ThemeError};

/// Line terminator written after every patched line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Replace every occurrence of `from` with `to`, line by line.
///
/// Input line endings (`\n` or `\r\n`) are normalised to [`LINE_ENDING`],
/// and every line, including the last, is terminated. An empty `from`
/// leaves the text unchanged.
pub fn patch_text(content: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(content.len());

    for line in content.lines() {
        if from.is_empty() {
            out.push_str(line);
        } else {
            out.push_str(&line.replace(from, to));
        }
        out.push_str(LINE_ENDING);
    }

    out
}

/// Copy `src` to `dest`, renaming the theme on the way.
///
/// Returns the number of lines that contained `from`.
pub fn patch_config(src: &Path, dest: &Path, from: &str, to: &str) -> Result<usize> {
    let content = fs::read_to_string(src)
        .map_err(|e| ThemeError::io(src, "Failed to read config", e))?;

    let touched = if from.is_empty() {
        0
    } else {
        content.lines().filter(|line| line.contains(from)).count()
    };

    fs::write(dest, patch_text(&content, from, to))
        .map_err(|e| ThemeError::io(dest, "Failed to write config", e))?;

    Ok(touched)
}
