//! Batch rendering of icons onto a button template.

use std::path::Path;

use image::RgbaImage;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::types::{IconFile, TintSpec};

use super::composite::compose;
use super::png::{load_png, write_png};

/// Renders a batch of icons of one class onto one button template.
///
/// The builder owns a single scratch canvas of the class's button size and
/// reuses it for every icon, so one builder must not be shared between
/// batches running at the same time.
#[derive(Debug)]
pub struct IconSetBuilder {
    template: RgbaImage,
    tint: Option<TintSpec>,
    canvas: RgbaImage,
}

impl IconSetBuilder {
    /// Create a builder rendering `size`x`size` icons.
    pub fn new(template: RgbaImage, size: u32, tint: Option<TintSpec>) -> Self {
        Self {
            template,
            tint,
            canvas: RgbaImage::new(size, size),
        }
    }

    /// Edge length of rendered icons.
    pub fn size(&self) -> u32 {
        self.canvas.width()
    }

    /// Render one icon into the scratch canvas and return it.
    ///
    /// The returned image is overwritten by the next call.
    pub fn render(&mut self, icon: &RgbaImage) -> &RgbaImage {
        compose(&mut self.canvas, &self.template, icon, self.tint.as_ref());
        &self.canvas
    }

    /// Render every icon and write it to `output_dir` under its own name.
    ///
    /// Stops at the first icon that cannot be read or written. Returns the
    /// number of files written.
    pub fn build(&mut self, icons: &[IconFile], output_dir: &Path, printer: &Printer) -> Result<usize> {
        let size = self.size();

        for icon in icons {
            let image = load_png(&icon.path)?;
            let dest = icon.output_in(output_dir);

            write_png(self.render(&image), &dest)?;

            printer.status(
                "Composited",
                &format!("{} ({}x{}) -> {}", icon.name, size, size, display_path(&dest)),
            );
        }

        Ok(icons.len())
    }
}
