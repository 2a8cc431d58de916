//! Verbatim copies of icons and templates.

use std::fs;
use std::path::Path;

use crate::error::{Result, ThemeError};
use crate::output::{display_path, Printer};
use crate::types::IconFile;

/// Copy one file, replacing the destination if it exists.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).map_err(|e| {
        ThemeError::io(
            src,
            &format!("Failed to copy to {}", dest.display()),
            e,
        )
    })?;
    Ok(())
}

/// Copy icons into `dest_dir` under their own names.
///
/// Returns the number of files copied.
pub fn copy_icons(icons: &[IconFile], dest_dir: &Path, printer: &Printer) -> Result<usize> {
    for icon in icons {
        let dest = icon.output_in(dest_dir);
        copy_file(&icon.path, &dest)?;
        printer.status(
            "Copied",
            &format!("{} -> {}", icon.name, display_path(&dest)),
        );
    }

    Ok(icons.len())
}
