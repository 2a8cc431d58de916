//! Clean command implementation.

use clap::Args;

use crate::assets::clean_dir;
use crate::discovery::Project;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// Delete the theme's build directory
#[derive(Args, Debug)]
pub struct CleanArgs {}

pub fn run(_args: CleanArgs, project: &Project, printer: &Printer) -> Result<()> {
    let dir = project.output_dir();

    if !dir.exists() {
        printer.info("Clean", &format!("{} does not exist", display_path(&dir)));
        return Ok(());
    }

    let removed = clean_dir(&dir)?;
    printer.success(
        "Removed",
        &format!("{} ({})", display_path(&dir), plural(removed, "file", "files")),
    );
    Ok(())
}
