//! bootskin - Boot-loader theme asset generator
//!
//! Composites icons onto button templates, optionally tinting them, bakes
//! button rows into a background image, and assembles the result into a
//! theme directory for the rEFInd boot manager.

pub mod assets;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use discovery::{discover, scan_icons, IconScan, Project, ThemeManifest};
pub use error::{Result, ThemeError};
pub use render::{compose, compose_background, tint_image, IconSetBuilder};
pub use types::{is_os_icon, ButtonCounts, ButtonLayout, IconClass, IconFile, TintSpec};
