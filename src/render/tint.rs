//! Per-pixel colour tinting.

use image::RgbaImage;

use crate::types::TintSpec;

/// Tint every pixel of `src` towards the tint colour, keeping alpha.
///
/// `dest` is reused when it already has the source's dimensions; otherwise a
/// fresh buffer is allocated. `src` is never touched.
pub fn tint_into(src: &RgbaImage, tint: &TintSpec, dest: Option<RgbaImage>) -> RgbaImage {
    let mut dest = match dest {
        Some(buffer) if buffer.dimensions() == src.dimensions() => buffer,
        _ => RgbaImage::new(src.width(), src.height()),
    };

    for (out, pixel) in dest.pixels_mut().zip(src.pixels()) {
        out.0 = tint.apply(pixel.0);
    }

    dest
}

/// Tint into a newly allocated image.
pub fn tint_image(src: &RgbaImage, tint: &TintSpec) -> RgbaImage {
    tint_into(src, tint, None)
}
