//! Background composition with buttons baked into it.

use image::RgbaImage;

use crate::types::{ButtonCounts, ButtonLayout};

use super::composite::{draw_over, fit};

/// Bake rows of buttons into a copy of `background`.
///
/// The background is kept at its native size. The big row is centred on the
/// canvas, the small row sits below it; see [`ButtonLayout`] for the offsets.
/// With zero counts the result equals the background.
pub fn compose_background(
    background: &RgbaImage,
    big_button: &RgbaImage,
    small_button: &RgbaImage,
    layout: &ButtonLayout,
    counts: ButtonCounts,
) -> RgbaImage {
    let (width, height) = background.dimensions();
    let mut canvas = background.clone();

    let big = fit(big_button, layout.big, layout.big);
    for (x, y) in layout.big_row(width, height, counts.big).positions() {
        draw_over(&mut canvas, &big, x, y);
    }

    let small = fit(small_button, layout.small, layout.small);
    for (x, y) in layout.small_row(width, height, counts.small).positions() {
        draw_over(&mut canvas, &small, x, y);
    }

    canvas
}
