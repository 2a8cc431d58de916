//! Compositing icons onto button templates.
//!
//! All drawing is straight (non-premultiplied) RGBA with source-over
//! blending. Resampling is nearest neighbour and only happens when the
//! source and target sizes differ.

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::{Pixel, Rgba, RgbaImage};

use crate::types::TintSpec;

use super::tint::tint_image;

/// Draw `background` stretched over the whole canvas, then `foreground` on
/// top of it, optionally tinted first.
///
/// Every canvas pixel is overwritten by the background fill, so the canvas
/// can be reused between calls without clearing.
pub fn compose(
    canvas: &mut RgbaImage,
    background: &RgbaImage,
    foreground: &RgbaImage,
    tint: Option<&TintSpec>,
) {
    let (w, h) = canvas.dimensions();

    fill(canvas, background);

    match tint {
        None => draw_over(canvas, &fit(foreground, w, h), 0, 0),
        Some(tint) => {
            // Tint at native resolution, then scale the result.
            let tinted = tint_image(foreground, tint);
            draw_over(canvas, &fit(&tinted, w, h), 0, 0);
        }
    }
}

/// Replace every canvas pixel with `image` resampled to the canvas size.
pub fn fill(canvas: &mut RgbaImage, image: &RgbaImage) {
    let (w, h) = canvas.dimensions();
    let scaled = fit(image, w, h);
    canvas.copy_from_slice(scaled.as_raw());
}

/// Resample `image` to exactly `width`x`height`, borrowing when it already fits.
pub fn fit(image: &RgbaImage, width: u32, height: u32) -> Cow<'_, RgbaImage> {
    if image.dimensions() == (width, height) {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(imageops::resize(image, width, height, FilterType::Nearest))
    }
}

/// Source-over `src` onto `dest` with its top-left corner at (x, y).
///
/// Pixels falling outside `dest` are clipped; only the overlapping area is
/// visited.
pub fn draw_over(dest: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(dest, src, x, y);
}

/// Alpha-blend one pixel over another.
pub fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let mut out = dst;
    out.blend(&src);
    out
}
