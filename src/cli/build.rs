//! Build command implementation.
//!
//! Produces the theme directory: icons, `theme.conf`, `background.png` and
//! the two selection images.

use std::fs;
use std::path::Path;

use clap::Args;

use crate::assets::{copy_file, copy_icons, patch_config};
use crate::discovery::{outputs, scan_icons, templates, IconScan, Project, THEME_CONF};
use crate::error::{Result, ThemeError};
use crate::output::{display_path, plural, Printer};
use crate::render::{compose_background, load_png, write_png, IconSetBuilder};
use crate::types::{ButtonCounts, IconClass, TintSpec};

use super::options::{BuildMode, BuildOptions};

/// Build the theme from icons and templates
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Build options as KEY=VALUE (e.g. bgbakeicons=3)
    pub options: Vec<String>,
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Icons written to the output icon directory.
    pub icons: usize,
    /// Buttons baked into the background, if any.
    pub baked: Option<ButtonCounts>,
}

pub fn run(args: BuildArgs, project: &Project, printer: &Printer) -> Result<()> {
    let options = BuildOptions::parse(&args.options)?;

    for key in options.unknown_keys() {
        printer.warning("Warning", &format!("Ignoring unknown option '{}'", key));
    }

    build_theme(project, options.mode, printer)?;
    Ok(())
}

/// Run the whole build for `project`.
///
/// Any failure aborts the build; files already written are left in place.
pub fn build_theme(project: &Project, mode: BuildMode, printer: &Printer) -> Result<BuildReport> {
    let output_dir = project.output_dir();
    let icons_out = project.output_icons_dir();

    for dir in [project.icons_dir(), project.templates_dir(), icons_out.clone()] {
        create_dir(&dir)?;
    }

    printer.status(
        "Building",
        &format!("{} -> {}", project.manifest.name, display_path(&output_dir)),
    );
    printer.verbose("Root", &display_path(&project.root));
    printer.verbose("Icons", &display_path(&project.icons_dir()));
    printer.verbose("Mode", &format!("{:?}", mode));

    let scan = scan_icons(&project.icons_dir())?;

    let icons = match mode {
        BuildMode::Bake(_) => {
            copy_icons(&scan.os, &icons_out, printer)? + copy_icons(&scan.other, &icons_out, printer)?
        }
        BuildMode::Composite => {
            let tint = project.manifest.tint_spec()?;
            render_class(project, &scan, IconClass::Os, tint, printer)?
                + render_class(project, &scan, IconClass::Other, tint, printer)?
        }
    };

    migrate_config(project, printer)?;

    let baked = match mode {
        BuildMode::Bake(counts) => {
            bake_background(project, counts, printer)?;
            Some(counts)
        }
        BuildMode::Composite => {
            copy_reported(
                &project.template(templates::BACKGROUND_SD),
                &project.output(outputs::BACKGROUND),
                printer,
            )?;
            None
        }
    };

    copy_selection(project, mode, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(icons, "icon", "icons"),
            display_path(&output_dir)
        ),
    );

    Ok(BuildReport { icons, baked })
}

/// Composite every icon of one class onto its button template.
fn render_class(
    project: &Project,
    scan: &IconScan,
    class: IconClass,
    tint: Option<TintSpec>,
    printer: &Printer,
) -> Result<usize> {
    let layout = &project.manifest.layout;
    let (template_name, size) = match class {
        IconClass::Os => (templates::BUTTON_BIG, layout.big),
        IconClass::Other => (templates::BUTTON_SMALL, layout.small),
    };

    printer.verbose("Rendering", &format!("{} icons at {}x{}", class, size, size));

    let template = load_png(&project.template(template_name))?;
    let mut builder = IconSetBuilder::new(template, size, tint);

    builder.build(scan.of_class(class), &project.output_icons_dir(), printer)
}

/// Write `theme.conf` with the source theme name replaced.
fn migrate_config(project: &Project, printer: &Printer) -> Result<()> {
    let dest = project.output(THEME_CONF);
    let touched = patch_config(
        &project.root_file(THEME_CONF),
        &dest,
        &project.manifest.source_name,
        &project.manifest.name,
    )?;

    printer.status(
        "Patched",
        &format!(
            "{} ({})",
            display_path(&dest),
            plural(touched, "line", "lines")
        ),
    );
    Ok(())
}

/// Compose `background.png` from the HD background with buttons baked in.
fn bake_background(project: &Project, counts: ButtonCounts, printer: &Printer) -> Result<()> {
    let background = load_png(&project.template(templates::BACKGROUND_HD))?;
    let big = load_png(&project.template(templates::BUTTON_BIG))?;
    let small = load_png(&project.template(templates::BUTTON_SMALL))?;

    let composed =
        compose_background(&background, &big, &small, &project.manifest.layout, counts);

    let dest = project.output(outputs::BACKGROUND);
    write_png(&composed, &dest)?;

    printer.status(
        "Baked",
        &format!(
            "{} + {} -> {}",
            plural(counts.big as usize, "big button", "big buttons"),
            plural(counts.small as usize, "small button", "small buttons"),
            display_path(&dest)
        ),
    );
    Ok(())
}

/// Copy the two selection images for the current mode.
fn copy_selection(project: &Project, mode: BuildMode, printer: &Printer) -> Result<()> {
    let (big, small) = match mode {
        BuildMode::Bake(_) => (
            project.template(templates::BUTTON_DOWN_BIG),
            project.template(templates::BUTTON_DOWN_SMALL),
        ),
        BuildMode::Composite => (
            project.root_file(outputs::SELECTION_BIG),
            project.root_file(outputs::SELECTION_SMALL),
        ),
    };

    copy_reported(&big, &project.output(outputs::SELECTION_BIG), printer)?;
    copy_reported(&small, &project.output(outputs::SELECTION_SMALL), printer)
}

fn copy_reported(src: &Path, dest: &Path, printer: &Printer) -> Result<()> {
    copy_file(src, dest)?;
    printer.status(
        "Copied",
        &format!("{} -> {}", display_path(src), display_path(dest)),
    );
    Ok(())
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ThemeError::io(dir, "Failed to create directory", e))
}
