//! Core value types for bootskin.

mod icon;
mod layout;
mod tint;

pub use icon::{is_os_icon, IconClass, IconFile, ICON_EXTENSION, OS_ICON_PREFIX};
pub use layout::{ButtonCounts, ButtonLayout, Row};
pub use tint::TintSpec;
