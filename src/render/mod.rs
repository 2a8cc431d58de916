//! Rendering module for bootskin.
//!
//! Tinting, compositing icons onto button templates, baking buttons into
//! the background, and PNG input/output.

mod background;
mod composite;
mod icons;
mod png;
mod tint;

pub use background::compose_background;
pub use composite::{compose, draw_over, fill, fit, source_over};
pub use icons::IconSetBuilder;
pub use png::{load_png, write_png};
pub use tint::{tint_image, tint_into};
